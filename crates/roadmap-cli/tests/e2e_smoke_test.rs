use std::{fs, path::PathBuf};

use tempfile::tempdir;

use roadmap_cli::{Args, run};

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn cli_args(input: Option<String>, output: String, strict: bool) -> Args {
    Args {
        input,
        output,
        config: None,
        sample: false,
        strict,
        topic: None,
        id: Some("e2e".to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.out.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        // Valid demos are well-formed, so they must pass strict validation too.
        let args = cli_args(
            Some(demo_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
            true,
        );

        match run(&args) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("Output was written");
                assert!(written.contains("\"nodes\""), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        let args = cli_args(
            Some(demo_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
            true,
        );

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_lenient_mode_lays_out_structural_errors() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("errors").join("dangling-parent.json");
    let output = temp_dir.path().join("dangling.json");

    let args = cli_args(
        Some(input.to_string_lossy().to_string()),
        output.to_string_lossy().to_string(),
        false,
    );
    run(&args).expect("Lenient mode lays out dangling parents");

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"e-99-2\""));
}

#[test]
fn e2e_sample_roadmap() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("sample.json");

    let mut args = cli_args(None, output.to_string_lossy().to_string(), true);
    args.sample = true;
    run(&args).expect("Sample roadmap is well-formed");

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"frontend-dev\""));
    assert!(written.contains("\"Frontend Developer\""));
}

#[test]
fn e2e_title_falls_back_to_topic_then_file_stem() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("untitled.json");
    let output = temp_dir.path().join("untitled.out.json");

    let mut with_topic = cli_args(
        Some(input.to_string_lossy().to_string()),
        output.to_string_lossy().to_string(),
        false,
    );
    with_topic.topic = Some("Math for ML".to_string());
    run(&with_topic).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("\"Math for ML\""));

    let from_stem = cli_args(
        Some(input.to_string_lossy().to_string()),
        output.to_string_lossy().to_string(),
        false,
    );
    run(&from_stem).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("\"title\": \"untitled\""));
}

#[test]
fn e2e_missing_input_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = cli_args(
        Some(temp_dir.path().join("nope.json").to_string_lossy().to_string()),
        temp_dir.path().join("out.json").to_string_lossy().to_string(),
        false,
    );

    assert!(run(&args).is_err());
}
