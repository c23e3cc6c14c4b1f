//! Common test utilities and fixtures
//!
//! Shared paths and session scripts for the integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a path to a specific fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Get the valid config fixture path
pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

/// Get the invalid config fixture path
pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// A command for the campus-records binary, isolated from the caller's
/// environment overrides
pub fn records_cmd() -> Command {
    let mut cmd = Command::cargo_bin("campus-records").unwrap();
    for var in [
        "CAMPUS_RECORDS_CONFIG",
        "CAMPUS_RECORDS_TITLE",
        "CAMPUS_RECORDS_SEPARATOR",
        "CAMPUS_RECORDS_LOG_LEVEL",
        "CAMPUS_RECORDS_LOG_FILE",
        "CAMPUS_RECORDS_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Join menu answers into stdin text, one answer per line
pub fn script(answers: &[&str]) -> String {
    let mut text = answers.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir_exists() {
        assert!(fixtures_dir().exists(), "Fixtures directory should exist");
    }

    #[test]
    fn test_valid_config_exists() {
        assert!(
            valid_config_fixture().exists(),
            "Valid config fixture should exist"
        );
    }

    #[test]
    fn test_invalid_config_exists() {
        assert!(
            invalid_config_fixture().exists(),
            "Invalid config fixture should exist"
        );
    }

    #[test]
    fn test_script_ends_with_newline() {
        assert_eq!(script(&["4", "5"]), "4\n5\n");
    }
}
