use crate::config::toml_config::TomlConfig;
use crate::config::GeneratorConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-gen")]
#[command(about = "Generate course folders and MkDocs nav entries from a course catalog CSV")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Template with $1 (display name), $2 (course code), $3 (badge) placeholders
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Headerless CSV: code, name, display name, category, electiveness
    #[arg(long, global = true)]
    pub courses: Option<PathBuf>,

    /// Root directory for the generated course folders
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Optional TOML config file; explicit flags take precedence
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Derive everything but write nothing
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate course folders and documents
    Generate,
    /// Print MkDocs nav entries
    Nav,
    /// Generate, then print nav entries
    All,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::All)
    }

    /// 預設值 <- TOML <- 命令列
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.to_generator_config()
            }
            None => GeneratorConfig::default(),
        };

        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(courses) = &self.courses {
            config.courses_path = courses.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_runs_everything_with_defaults() {
        let cli = CliConfig::parse_from(["course-gen"]);
        assert_eq!(cli.command(), Command::All);
        assert_eq!(cli.resolve().unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_subcommands_and_global_flags() {
        let cli = CliConfig::parse_from(["course-gen", "nav", "--courses", "list.csv"]);
        assert_eq!(cli.command(), Command::Nav);
        assert_eq!(cli.resolve().unwrap().courses_path, PathBuf::from("list.csv"));

        let cli = CliConfig::parse_from(["course-gen", "--dry-run", "generate"]);
        assert_eq!(cli.command(), Command::Generate);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[paths]\noutput = \"from-file\"\ntemplate = \"file.md\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["course-gen", "--config", config_path.as_str(), "--output", "from-flag"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.output_path, PathBuf::from("from-flag"));
        assert_eq!(config.template_path, PathBuf::from("file.md"));
    }
}
