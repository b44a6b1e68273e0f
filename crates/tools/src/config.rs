//! Rules files for the command-line drivers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use seeker_core::Rules;

/// Default rules when no path is given. Missing keys in the file keep their defaults.
pub fn load_rules(path: Option<&Path>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let rules: Rules = toml::from_str(&text)
        .with_context(|| format!("Failed to parse rules TOML: {}", path.display()))?;
    rules.validate().with_context(|| format!("Invalid rules in {}", path.display()))?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::test_runner::{Config as ProptestConfig, TestCaseError, TestRunner};
    use seeker_core::{HazardEntry, Pos, RaceRule};
    use tempfile::tempdir;

    #[test]
    fn missing_path_means_default_rules() {
        assert_eq!(load_rules(None).expect("defaults"), Rules::default());
    }

    #[test]
    fn partial_file_overrides_only_listed_keys() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rules.toml");
        fs::write(
            &path,
            "race_rule = \"strictly_closer\"\nhazard_entry = \"skip_turn\"\n\
             adversary_start = { row = 4, col = 4 }\n",
        )
        .expect("write rules");

        let rules = load_rules(Some(&path)).expect("rules load");
        assert_eq!(rules.race_rule, RaceRule::StrictlyCloser);
        assert_eq!(rules.hazard_entry, HazardEntry::SkipTurn);
        assert_eq!(rules.adversary_start, Pos::new(4, 4));
        assert_eq!(rules.grid_size, Rules::default().grid_size);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rules.toml");
        fs::write(&path, "grid_sise = 7\n").expect("write rules");
        assert!(load_rules(Some(&path)).is_err());
    }

    #[test]
    fn invalid_layout_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rules.toml");
        fs::write(&path, "grid_size = 4\n").expect("write rules");
        let err = load_rules(Some(&path)).expect_err("adversary start is off the grid");
        assert!(format!("{err:#}").contains("outside the grid"), "{err:#}");
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rules.toml");
        fs::write(&path, "grid_size = 100000\n").expect("write rules");
        let err = load_rules(Some(&path)).expect_err("grid side is above the cap");
        assert!(format!("{err:#}").contains("exceeds the maximum of 64"), "{err:#}");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("absent.toml");
        let err = load_rules(Some(&path)).expect_err("file does not exist");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn any_valid_sizes_load_as_written() {
        let mut runner = TestRunner::new(ProptestConfig::with_cases(32));
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rules.toml");

        runner
            .run(&(6usize..16, 0usize..32), |(grid_size, history_len)| {
                let text = format!("grid_size = {grid_size}\nhistory_len = {history_len}\n");
                fs::write(&path, text).map_err(|e| TestCaseError::fail(e.to_string()))?;
                let rules = load_rules(Some(&path)).map_err(|e| TestCaseError::fail(e.to_string()))?;
                if rules.grid_size != grid_size || rules.history_len != history_len {
                    return Err(TestCaseError::fail(format!("loaded {rules:?}")));
                }
                Ok(())
            })
            .expect("valid rules files should load unchanged");
    }
}
