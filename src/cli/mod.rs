pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weekly-track")]
#[command(about = "Tracks the weekly GTA Online bonuses post and the vehicles it features", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/weekly-track/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the newest weekly post and save the extracted update
    Fetch {
        /// Where to write the weekly update JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract a weekly update from a saved post body
    Extract {
        /// Text file holding the raw markdown body
        file: PathBuf,

        /// Post title used for the week-of date
        #[arg(short, long)]
        title: Option<String>,

        /// Where to write the weekly update JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up the week's vehicles in the catalog
    Resolve {
        /// Weekly update JSON to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the vehicle data JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch, then resolve
    Run,
    /// Save the raw body of the newest post and print its metadata
    Debug,
    /// Print the stored weekly update
    Show,
    /// Launch the TUI
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_with_overrides() {
        let cli = Cli::try_parse_from([
            "weekly-track",
            "resolve",
            "--input",
            "in.json",
            "--output",
            "out.json",
            "--config",
            "alt.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        match cli.command {
            Commands::Resolve { input, output } => {
                assert_eq!(input, Some(PathBuf::from("in.json")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from(["weekly-track", "extract", "body.txt", "-t", "Weekly - Jan 2"])
            .unwrap();
        match cli.command {
            Commands::Extract { file, title, output } => {
                assert_eq!(file, PathBuf::from("body.txt"));
                assert_eq!(title.as_deref(), Some("Weekly - Jan 2"));
                assert!(output.is_none());
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["weekly-track"]).is_err());
    }
}
