use clap::{Args, Parser, Subcommand, ValueEnum};
use dir_report_core::View;

#[derive(Debug, Parser)]
#[command(name = "dir-report")]
#[command(about = "Directory reports grouped by extension, folder and size", long_about = None)]
pub struct Cli {
    /// Configuration file (extension optional)
    #[arg(long, global = true, value_name = "FILE", default_value = "Config")]
    pub config: String,

    /// Directory listed one level deep; replaces `listing_roots` from the config
    #[arg(long = "listing-root", global = true, value_name = "DIR")]
    pub listing_roots: Vec<String>,

    /// Directory walked recursively; replaces `tree_roots` from the config
    #[arg(long = "tree-root", global = true, value_name = "DIR")]
    pub tree_roots: Vec<String>,

    /// Hide the scan spinner
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print all seven report views
    Report(FormatArgs),
    /// Print a single view: listing, names, sorted, executables, extensions, folders, percentages
    View {
        #[arg(value_name = "VIEW")]
        view: View,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["dir-report"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, "Config");
        assert!(cli.listing_roots.is_empty());
    }

    #[test]
    fn test_view_with_roots_and_format() {
        let cli = Cli::try_parse_from([
            "dir-report",
            "view",
            "percentages",
            "--tree-root",
            "/a",
            "--tree-root",
            "/b",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.tree_roots, vec!["/a".to_string(), "/b".to_string()]);
        match cli.command {
            Some(Commands::View { view, format }) => {
                assert_eq!(view, View::Percentages);
                assert_eq!(format.format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_view_rejected() {
        assert!(Cli::try_parse_from(["dir-report", "view", "bogus"]).is_err());
    }
}
