use lexdoc_analyzer::config::PreferencesError;
use lexdoc_analyzer::dictionary::GeneratorError;
use lexdoc_analyzer::logging::{codes, Code};
use lexdoc_analyzer::{AnalysisError, DictionaryError, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error("Position {line}:{column} is outside {path}")]
    PositionOutOfRange {
        path: String,
        line: u32,
        column: u32,
    },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn error_code(&self) -> Code {
        match self {
            CliError::Source(e) => e.error_code(),
            CliError::Dictionary(e) => e.error_code(),
            CliError::Analysis(e) => e.error_code(),
            CliError::Generator(e) => e.error_code(),
            CliError::Preferences(_) => codes::system::INITIALIZATION_FAILURE,
            CliError::PositionOutOfRange { .. } => codes::source::POSITION_OUT_OF_RANGE,
            CliError::Io { .. } => codes::source::IO_ERROR,
            CliError::Json(_) => codes::system::INTERNAL_ERROR,
        }
    }

    /// `error[CODE]: message` plus the registered description of the code
    pub fn report(&self) -> String {
        let code = self.error_code();
        format!(
            "error[{}]: {}\n  = note: {}",
            code,
            self,
            codes::get_description(code.as_str())
        )
    }

    /// Whether the code is registered as fatal
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn io(path: &std::path::Path, error: std::io::Error) -> Self {
        CliError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
