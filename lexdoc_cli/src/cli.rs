use clap::{Parser, Subcommand, ValueEnum};
use lexdoc_analyzer::dictionary::generator::{DEFAULT_DEFINITIONS_FILE, DEFAULT_DICTIONARY_FILE};
use lexdoc_analyzer::Language;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lexdoc", version, about = "Token reference lookup for Python and C source")]
pub struct Cli {
    /// Preferences file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Python,
    C,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Python => Language::Python,
            LanguageArg::C => Language::C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify every token in a file
    Analyze {
        file: PathBuf,
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
        /// Dictionary to use instead of the embedded one (.json or .md)
        #[arg(long)]
        dictionary: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print the category tree instead of the token listing
        #[arg(long)]
        groups: bool,
    },

    /// Show the reference entry for the token at a position
    Hover {
        file: PathBuf,
        /// 1-based line
        #[arg(long)]
        line: u32,
        /// 1-based column in characters
        #[arg(long)]
        column: u32,
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
        #[arg(long)]
        dictionary: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Look a token up in the dictionary
    Lookup {
        token: String,
        #[arg(long, value_enum, default_value_t = LanguageArg::Python)]
        language: LanguageArg,
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// Convert a markdown reference into JSON dictionaries
    Generate {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        /// Title for the sectioned document (defaults to the first heading)
        #[arg(long)]
        title: Option<String>,
        #[arg(long, default_value = DEFAULT_DEFINITIONS_FILE)]
        definitions_out: String,
        #[arg(long, default_value = DEFAULT_DICTIONARY_FILE)]
        dictionary_out: String,
    },

    /// Render the reference as a static HTML page
    Docs {
        #[arg(long, value_enum, default_value_t = LanguageArg::Python)]
        language: LanguageArg,
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Re-analyze a file whenever it changes
    Watch {
        file: PathBuf,
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
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
    fn test_parse_hover() {
        let cli = Cli::try_parse_from([
            "lexdoc", "hover", "main.py", "--line", "3", "--column", "7",
        ])
        .unwrap();
        match cli.command {
            Command::Hover { line, column, .. } => assert_eq!((line, column), (3, 7)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from([
            "lexdoc", "generate", "--source", "ref.md", "--out-dir", "out",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                definitions_out,
                dictionary_out,
                title,
                ..
            } => {
                assert_eq!(definitions_out, "built-in-definitions.json");
                assert_eq!(dictionary_out, "dictionary.json");
                assert!(title.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["lexdoc", "lookup", "print", "-vv", "--language", "c"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Lookup { language, .. } => assert_eq!(language, LanguageArg::C),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
