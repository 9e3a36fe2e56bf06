//! Autofix roundtrip tests.
//!
//! For each fixture:
//! 1. Build a linter from the fixture's skylint.toml
//! 2. Apply fixes to Input.jsx
//! 3. Compare the fixed output with Expected.jsx (byte-level match)
//! 4. Lint the fixed output again (must report zero violations)

use std::fs;
use std::path::{Path, PathBuf};

use skylint_config::SkylintConfig;
use skylint_js_parser::SourceType;
use skylint_linter::Linter;
use walkdir::WalkDir;

/// A fixture directory with its config, input and expected output.
struct Fixture {
    /// Path relative to the fixtures directory.
    name: String,
    input: PathBuf,
    config: PathBuf,
    expected: PathBuf,
}

/// Discover all fixture directories under `base`.
/// A fixture directory contains `skylint.toml`, `Input.jsx` and `Expected.jsx`.
fn discover_fixtures(base: &Path) -> Vec<Fixture> {
    let mut fixtures = Vec::new();

    for entry in WalkDir::new(base).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        let config = dir.join("skylint.toml");
        let input = dir.join("Input.jsx");
        let expected = dir.join("Expected.jsx");

        if config.exists() && input.exists() && expected.exists() {
            fixtures.push(Fixture {
                name: dir.strip_prefix(base).unwrap_or(dir).display().to_string(),
                input,
                config,
                expected,
            });
        }
    }

    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    fixtures
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Run the roundtrip for a single fixture.
fn run_fixture(fixture: &Fixture) -> Result<(), String> {
    let input = fs::read_to_string(&fixture.input)
        .map_err(|e| format!("Failed to read Input.jsx: {e}"))?;
    let expected = fs::read_to_string(&fixture.expected)
        .map_err(|e| format!("Failed to read Expected.jsx: {e}"))?;

    // A fixture without anything to fix tests nothing.
    if input == expected {
        return Err("Input.jsx and Expected.jsx are identical".to_string());
    }

    let config = SkylintConfig::from_file(&fixture.config)
        .map_err(|e| format!("Failed to load skylint.toml: {e}"))?;
    let linter =
        Linter::from_config(&config).map_err(|e| format!("Invalid skylint.toml: {e}"))?;

    let outcome = linter.fix(&input, SourceType::Jsx);
    if outcome.output != expected {
        return Err(format!(
            "Fixed output differs from Expected.jsx\n--- expected\n{expected}\n--- actual\n{}",
            outcome.output
        ));
    }
    if outcome.fixed == 0 {
        return Err("No fixes were applied".to_string());
    }

    let remaining = linter.lint(&outcome.output, SourceType::Jsx);
    if !remaining.is_empty() {
        return Err(format!(
            "Fixed output still has {} violation(s): {:?}",
            remaining.diagnostics.len(),
            remaining
                .diagnostics
                .iter()
                .map(|d| d.kind.body.as_str())
                .collect::<Vec<_>>()
        ));
    }

    Ok(())
}

#[test]
fn autofix_roundtrip() {
    let fixtures = discover_fixtures(&fixtures_dir());
    assert!(!fixtures.is_empty(), "No fixtures found");

    let failures: Vec<_> = fixtures
        .iter()
        .filter_map(|fixture| {
            run_fixture(fixture)
                .err()
                .map(|err| format!("{}: {err}", fixture.name))
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} fixture(s) failed:\n{}",
        failures.len(),
        fixtures.len(),
        failures.join("\n\n")
    );
}
