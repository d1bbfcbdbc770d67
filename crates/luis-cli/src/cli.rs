use std::path::PathBuf;

use clap::Parser;
use luis_config::LuisConfig;

/// Top-level CLI parser for the `botmock-luis` binary.
#[derive(Debug, Parser)]
#[command(
    name = "botmock-luis",
    version,
    about = "Export a Botmock project as a LUIS app"
)]
pub struct Cli {
    /// Output directory (overrides OUTPUT_DIR and config). Recreated on every run.
    pub output_dir: Option<PathBuf>,

    /// Convert a local project JSON file instead of fetching from Botmock
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// LUIS schema version written into the document
    #[arg(long)]
    pub schema_version: Option<String>,

    /// LUIS app version id written into the document
    #[arg(long)]
    pub version_id: Option<String>,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut LuisConfig) {
        if let Some(dir) = &self.output_dir {
            config.export.output_directory = dir.display().to_string();
        }
        if let Some(version) = &self.schema_version {
            config.export.schema_version.clone_from(version);
        }
        if let Some(id) = &self.version_id {
            config.export.version_id.clone_from(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use luis_config::LuisConfig;
    use pretty_assertions::assert_eq;

    use super::Cli;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_config() {
        let cli = Cli::try_parse_from(["botmock-luis"]).expect("cli should parse");
        assert!(cli.output_dir.is_none());
        assert!(cli.input.is_none());

        let mut config = LuisConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.export.output_directory, "output");
        assert_eq!(config.export.schema_version, "3.2.0");
    }

    #[test]
    fn positional_output_dir_and_flags() {
        let cli = Cli::try_parse_from([
            "botmock-luis",
            "exports",
            "--input",
            "project.json",
            "--schema-version",
            "4.0.0",
            "--version-id",
            "1.2",
            "--verbose",
        ])
        .expect("cli should parse");

        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("project.json")));
        assert!(cli.verbose);

        let mut config = LuisConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.export.output_directory, "exports");
        assert_eq!(config.export.schema_version, "4.0.0");
        assert_eq!(config.export.version_id, "1.2");
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["botmock-luis", "-q", "-v"]).is_err());
    }
}
