pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Criterion;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::RosterConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shortlist")]
#[command(about = "Keep a roster of job candidates and sort, search and rank it")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Data file name, relative to the base directory [default: resumes.txt]
    #[arg(long)]
    pub data_file: Option<String>,

    /// Directory the data file lives in [default: .]
    #[arg(long)]
    pub base_dir: Option<String>,

    /// How many candidates `top` shows [default: 3]
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,
    /// Show every candidate in roster order
    List,
    /// Append a candidate and save the roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cgpa: f64,
        #[arg(long)]
        experience: u32,
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Primary programming language of a technical candidate
        #[arg(long)]
        language: Option<String>,
    },
    /// Reorder the roster and save it
    Sort {
        #[arg(value_enum)]
        by: Criterion,
        /// Show the sorted roster without writing it back
        #[arg(long)]
        no_save: bool,
    },
    /// Find a candidate by exact name (binary search)
    SearchName { name: String },
    /// List candidates having an exact skill (linear search)
    SearchSkill { skill: String },
    /// Show the highest ranked candidates (max-heap)
    Top {
        #[arg(value_enum, default_value = "cgpa")]
        by: Criterion,
        #[arg(short)]
        k: Option<usize>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file when one is given, then lets command-line flags
    /// override it.
    pub fn resolve(&self) -> Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::default(),
        };

        if let Some(data_file) = &self.data_file {
            config.storage.data_file = data_file.clone();
        }
        if let Some(base_dir) = &self.base_dir {
            config.storage.base_dir = base_dir.clone();
        }
        if let Some(top_k) = self.top_k {
            config.ranking.top_k = top_k;
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }
        if self.log_json {
            config.logging.json = Some(true);
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["shortlist"]);
        assert!(cli.command.is_none());

        let config = cli.resolve().unwrap();
        assert_eq!(config.data_file(), "resumes.txt");
        assert_eq!(config.top_k(), 3);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[storage]
data_file = "file.txt"
base_dir = "/from/file"

[ranking]
top_k = 7
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "shortlist",
            "--config",
            path.as_str(),
            "--data-file",
            "flag.txt",
            "--verbose",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.data_file(), "flag.txt");
        assert_eq!(config.base_dir(), "/from/file");
        assert_eq!(config.top_k(), 7);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::parse_from([
            "shortlist", "add", "--name", "Alice", "--cgpa", "8.5", "--experience", "3",
            "--skills", "Python,Go",
        ]);
        match cli.command {
            Some(Command::Add { name, skills, .. }) => {
                assert_eq!(name, "Alice");
                assert_eq!(skills, vec!["Python", "Go"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = CliConfig::parse_from(["shortlist", "sort", "skills"]);
        assert!(matches!(
            cli.command,
            Some(Command::Sort { by: Criterion::SkillCount, no_save: false })
        ));

        let cli = CliConfig::parse_from(["shortlist", "top", "experience", "-k", "2"]);
        assert!(matches!(
            cli.command,
            Some(Command::Top { by: Criterion::Experience, k: Some(2) })
        ));
    }
}
