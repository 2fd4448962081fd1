//! Color handling for roadmap styles
//!
//! This module provides the [`Color`] type, checked with the `DynamicColor`
//! parser from the color crate. Style settings are kept as CSS strings so that
//! the rendering surface receives them verbatim; [`Color`] only guarantees
//! that those strings actually name a color.

use std::str::FromStr;

use color::DynamicColor;

/// A CSS color string that is known to parse as a `DynamicColor`
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    css: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#1e293b", "rgb(255, 0, 0)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadmap_core::color::Color;
    ///
    /// let slate = Color::new("#1e293b").unwrap();
    /// assert_eq!(slate.as_css(), "#1e293b");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                css: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The CSS text this color was parsed from, unchanged.
    pub fn as_css(&self) -> &str {
        &self.css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#64748b").is_ok());
        assert!(Color::new("#fff").is_ok());
        assert!(Color::new("slategray").is_ok());

        let invalid = Color::new("1px solid");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_keeps_css_verbatim() {
        let color = Color::new("rgb(255, 0, 0)").unwrap();
        assert_eq!(color.as_css(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_color_error_names_input() {
        let err = Color::new("bogus").unwrap_err();
        assert!(err.contains("bogus"));
    }
}
