use crate::config::{ColorMode, ViewMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "linediff")]
#[command(version, about = "Line-based diff with unified and side-by-side views")]
pub struct Args {
    /// Original file
    pub before: PathBuf,

    /// Changed file
    pub after: PathBuf,

    /// Layout: unified (single column) or split (two columns)
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Lines of context around each change
    #[arg(short = 'U', long)]
    pub context: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Total width of the split view
    #[arg(long)]
    pub width: Option<usize>,

    /// Print only the added/removed summary
    #[arg(long)]
    pub stat: bool,

    /// Config file (default: <config dir>/linediff/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the inputs differ
    #[arg(long)]
    pub exit_code: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["linediff", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.before, PathBuf::from("a.txt"));
        assert_eq!(args.after, PathBuf::from("b.txt"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.view.is_none());
        assert!(!args.stat);
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "linediff", "a", "b", "--view", "split", "-U", "1", "--color", "never", "--format",
            "json", "--exit-code",
        ])
        .unwrap();
        assert_eq!(args.view, Some(ViewMode::Split));
        assert_eq!(args.context, Some(1));
        assert_eq!(args.color, Some(ColorMode::Never));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.exit_code);
    }

    #[test]
    fn test_requires_two_paths() {
        assert!(Args::try_parse_from(["linediff", "only-one"]).is_err());
    }
}
