//! CLI logic for the roadmap layout tool.
//!
//! Reads a generated roadmap (or the bundled sample), lays it out and writes
//! the positioned roadmap JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs, io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, info};

use roadmap::{RoadmapBuilder, RoadmapError, config::ValidationMode, positioned::RoadmapData};

/// Run the roadmap CLI application
///
/// This function lays out the input file (or the bundled sample) and writes
/// the resulting roadmap JSON to the output file.
///
/// # Errors
///
/// Returns `RoadmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed generated JSON
/// - Structural findings when running with `--strict`
pub fn run(args: &Args) -> Result<(), RoadmapError> {
    info!(
        input_path:? = args.input,
        output_path = args.output,
        sample = args.sample;
        "Processing roadmap"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = app_config.with_validation(ValidationMode::Strict);
    }

    let builder = RoadmapBuilder::new(app_config);
    let roadmap = if args.sample {
        builder.sample()?
    } else {
        let Some(input) = &args.input else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no input file given; pass a path or --sample",
            )
            .into());
        };
        build_from_file(&builder, args, input)?
    };

    let json = builder.to_json(&roadmap)?;
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        nodes_count = roadmap.nodes().len(),
        edges_count = roadmap.edges().len();
        "Roadmap exported successfully"
    );

    Ok(())
}

fn build_from_file(
    builder: &RoadmapBuilder,
    args: &Args,
    input: &str,
) -> Result<RoadmapData, RoadmapError> {
    let source = fs::read_to_string(input)?;
    let generated = builder.parse(&source)?;

    let fallback_title = match &args.topic {
        Some(topic) => topic.clone(),
        None => Path::new(input)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Roadmap".to_string()),
    };
    let id = args.id.clone().unwrap_or_else(timestamp_id);
    debug!(id = id, fallback_title = fallback_title; "Resolved roadmap identity");

    builder.build(&generated, id, &fallback_title)
}

/// Milliseconds since the Unix epoch, as a string.
fn timestamp_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_id_is_numeric() {
        let id = timestamp_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()), "{id}");
    }
}
