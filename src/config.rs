//! # Configuration files
//!
//! Reads [`EvolutionOptions`] from a small line-oriented text format:
//!
//! ```text
//! # comment
//! mode = min
//! left = -5
//! right = 5
//! population_size = 60
//! selection = tournament
//! selection_part = 0.5
//! debug
//! ```
//!
//! Each line holds a key and a value separated by spaces and/or `=`. Blank lines
//! and lines starting with `#` are ignored. Parameters that are not mentioned
//! keep their defaults. The result goes through the same validation as
//! [`EvolutionOptionsBuilder::build`].
//!
//! ```rust
//! use bitga::config::parse_options;
//! use bitga::search_space::Goal;
//!
//! let options = parse_options("mode = min\nepochs = 50\n").unwrap();
//! assert_eq!(options.get_goal(), Goal::Minimize);
//! assert_eq!(options.get_max_epochs(), 50);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::error::{GeneticError, Result, ResultExt};
use crate::evolution::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};

/// Parses options from configuration text.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` for unknown keys, malformed values
/// (both reported with their line number) and options that fail validation.
pub fn parse_options(text: &str) -> Result<EvolutionOptions> {
    let mut builder = EvolutionOptions::builder();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = split_line(line);
        builder = apply(builder, key, value).map_err(|e| match e {
            GeneticError::Configuration(msg) => {
                GeneticError::Configuration(format!("line {}: {}", number + 1, msg))
            }
            other => other,
        })?;
    }

    builder.build()
}

/// Loads options from a file. A missing file is not an error: the defaults are
/// returned and a warning is logged.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<EvolutionOptions> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse_options(&text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "config file not found, using default configuration"
            );
            Ok(EvolutionOptions::default())
        }
        Err(e) => Err(e).context(format!("Failed to read config file '{}'", path.display())),
    }
}

// Key and value are the first two tokens separated by spaces or '='.
fn split_line(line: &str) -> (&str, &str) {
    let mut tokens = line
        .split(|c: char| c == '=' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    let key = tokens.next().unwrap_or("");
    let value = tokens.next().unwrap_or("");
    (key, value)
}

fn apply(
    builder: EvolutionOptionsBuilder,
    key: &str,
    value: &str,
) -> Result<EvolutionOptionsBuilder> {
    let builder = match key {
        "mode" => builder.goal(value.parse()?),
        "left_border" | "left" | "a" => builder.left(number(key, value)?),
        "right_border" | "right" | "b" => builder.right(number(key, value)?),
        "genome_width" | "bits" => builder.genome_width(number(key, value)?),
        "population_size" => builder.population_size(number(key, value)?),
        "max_epochs" | "total_epochs" | "epochs" | "iterations" => {
            builder.max_epochs(number(key, value)?)
        }
        "max_valueless_epochs" | "valueless_epochs" | "valueless_iterations" => {
            builder.max_valueless_epochs(number(key, value)?)
        }
        "quality_epsilon" | "epsilon" => builder.quality_epsilon(number(key, value)?),
        "preserved_part" => builder.preserved_part(number(key, value)?),
        "selection_type" | "selection_mode" | "selection" => builder.selection(value.parse()?),
        "selection_part" => builder.selection_part(number(key, value)?),
        "crossbreeding_type" | "crossbreeding_mode" | "crossbreeding" => {
            builder.crossbreeding(value.parse()?)
        }
        "mutation_type" | "mutation_mode" | "mutation" => builder.mutation(value.parse()?),
        "mutation_probability" => builder.mutation_probability(number(key, value)?),
        "debug" => match value {
            "true" | "" => builder.log_level(LogLevel::Verbose),
            "false" => builder.log_level(LogLevel::None),
            other => {
                return Err(GeneticError::Configuration(format!("invalid debug value '{}'", other)));
            }
        },
        other => {
            return Err(GeneticError::Configuration(format!("unknown parameter '{}'", other)));
        }
    };
    Ok(builder)
}

fn number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(GeneticError::Configuration(format!("invalid {} value '{}'", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::{CrossbreedingKind, MutationKind};
    use crate::search_space::Goal;
    use crate::selection::SelectionKind;

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_options("").unwrap(), EvolutionOptions::default());
        assert_eq!(
            parse_options("# only a comment\n\n").unwrap(),
            EvolutionOptions::default()
        );
    }

    #[test]
    fn test_full_config() {
        let text = "\
mode = min
a = -2.5
b=2.5
bits 20
population_size = 30
iterations = 70
valueless_iterations = 4
epsilon = 0.001
preserved_part = 3
selection_mode = cut
selection_part = 0.5
crossbreeding = uniform
mutation_type = reverse
mutation_probability = 0.05
debug
";
        let options = parse_options(text).unwrap();
        assert_eq!(options.get_goal(), Goal::Minimize);
        assert_eq!(options.get_search_space().left, -2.5);
        assert_eq!(options.get_search_space().right, 2.5);
        assert_eq!(options.get_genome_width(), 20);
        assert_eq!(options.get_population_size(), 30);
        assert_eq!(options.get_max_epochs(), 70);
        assert_eq!(options.get_max_valueless_epochs(), 4);
        assert_eq!(options.get_quality_epsilon(), 0.001);
        assert_eq!(options.get_preserved_positions(), 3);
        assert_eq!(options.get_selection(), SelectionKind::Cut);
        assert_eq!(options.get_selection_size(), 15);
        assert_eq!(options.get_crossbreeding(), CrossbreedingKind::Uniform);
        assert_eq!(options.get_mutation(), MutationKind::Reverse);
        assert_eq!(options.get_mutation_probability(), 0.05);
        assert_eq!(options.get_log_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_unknown_key_reports_line() {
        let err = parse_options("mode = max\nspeed = 3\n").unwrap_err();
        match err {
            GeneticError::Configuration(msg) => {
                assert!(msg.contains("line 2"));
                assert!(msg.contains("unknown parameter 'speed'"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_values() {
        assert!(parse_options("mode = maximum").is_err());
        assert!(parse_options("population_size = many").is_err());
        assert!(parse_options("selection = roullete").is_err());
        assert!(parse_options("debug = maybe").is_err());
    }

    #[test]
    fn test_validation_still_applies() {
        assert!(parse_options("left = 5\nright = 1").is_err());
        assert!(parse_options("mutation_probability = 2").is_err());
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("key = value"), ("key", "value"));
        assert_eq!(split_line("key=value"), ("key", "value"));
        assert_eq!(split_line("key    value"), ("key", "value"));
        assert_eq!(split_line("debug"), ("debug", ""));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let options = load_options("/definitely/not/here/bitga.conf").unwrap();
        assert_eq!(options, EvolutionOptions::default());
    }

    #[test]
    fn test_load_file() {
        let name = format!("bitga-config-{}.conf", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "mode = min\nepochs = 12\n").unwrap();
        let options = load_options(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(options.get_goal(), Goal::Minimize);
        assert_eq!(options.get_max_epochs(), 12);
    }
}
