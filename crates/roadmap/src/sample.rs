//! The bundled "Frontend Developer" roadmap shown before anything is generated.

use roadmap_core::model::{GeneratedNode, Resource, ResourceKind};

/// Id of the bundled roadmap.
pub const SAMPLE_ID: &str = "frontend-dev";

/// Title of the bundled roadmap.
pub const SAMPLE_TITLE: &str = "Frontend Developer";

/// The bundled topics, in the order they are laid out.
///
/// Internet is the single root; HTML, CSS and JavaScript hang off it, with
/// Tailwind CSS under CSS and React and Git under JavaScript.
pub fn sample_nodes() -> Vec<GeneratedNode> {
    vec![
        topic("1", "Internet", "How the internet works.", None).with_resource(Resource::new(
            "How does the Internet work?",
            "#",
            ResourceKind::Article,
        )),
        topic("2", "HTML", "Structure of web pages.", Some("1")).with_resource(Resource::new(
            "MDN HTML",
            "#",
            ResourceKind::Documentation,
        )),
        topic("3", "CSS", "Styling web pages.", Some("1")).with_resource(Resource::new(
            "MDN CSS",
            "#",
            ResourceKind::Documentation,
        )),
        topic("4", "JavaScript", "Programming logic.", Some("1")).with_resource(Resource::new(
            "JS Info",
            "#",
            ResourceKind::Article,
        )),
        topic("5", "React", "UI Library.", Some("4")).with_resource(Resource::new(
            "React Docs",
            "#",
            ResourceKind::Documentation,
        )),
        topic("6", "Tailwind CSS", "Utility-first CSS.", Some("3")).with_resource(Resource::new(
            "Tailwind Docs",
            "#",
            ResourceKind::Documentation,
        )),
        topic("7", "Git", "Version control system.", Some("4")).with_resource(Resource::new(
            "Git Docs",
            "https://git-scm.com/doc",
            ResourceKind::Documentation,
        )),
    ]
}

fn topic(id: &str, label: &str, description: &str, parent: Option<&str>) -> GeneratedNode {
    let node = GeneratedNode::new(id, label).with_description(description);
    match parent {
        Some(parent) => node.with_parent(parent),
        None => node,
    }
}
