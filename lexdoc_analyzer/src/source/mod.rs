//! Source file loading with compile-time size limits

use crate::config::compile_time::input::MAX_FILE_SIZE;
use crate::dictionary::Language;
use crate::logging::codes;
use crate::utils::{SourceMap, Span};
use crate::{log_debug, log_error};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Cannot determine language for {path} (extension {extension:?})")]
    UnsupportedLanguage {
        path: String,
        extension: Option<String>,
    },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading {path}: {message}")]
    IoError { path: String, message: String },
}

impl SourceError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SourceError::FileNotFound { .. } => codes::source::FILE_NOT_FOUND,
            SourceError::UnsupportedLanguage { .. } => codes::source::UNSUPPORTED_LANGUAGE,
            SourceError::FileTooLarge { .. } => codes::source::FILE_TOO_LARGE,
            SourceError::InvalidEncoding { .. } => codes::source::INVALID_ENCODING,
            SourceError::IoError { .. } => codes::source::IO_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub line_count: usize,
    pub char_count: usize,
}

/// A loaded buffer with its line table and detected language
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub metadata: FileMetadata,
    pub language: Option<Language>,
    source_map: SourceMap,
}

impl SourceFile {
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let display = path.display().to_string();
        log_debug!("Loading source file", "file" => display);

        let meta = fs::metadata(path).map_err(|e| io_error(path, e))?;
        if meta.len() > MAX_FILE_SIZE {
            let error = SourceError::FileTooLarge {
                size: meta.len(),
                max_size: MAX_FILE_SIZE,
            };
            log_error!(error.error_code(), "File exceeds size limit",
                "file" => display,
                "size" => meta.len()
            );
            return Err(error);
        }

        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| {
            let error = SourceError::InvalidEncoding {
                path: display.clone(),
            };
            let span = invalid_utf8_span(e.as_bytes(), e.utf8_error().valid_up_to());
            log_error!(error.error_code(), "File is not valid UTF-8",
                span = span,
                "file" => display
            );
            error
        })?;

        Ok(Self::from_text(path, text, meta.len()))
    }

    /// Wrap in-memory text as if loaded from `path`
    pub fn from_text(path: &Path, text: String, size: u64) -> Self {
        let source_map = SourceMap::new(text);
        Self {
            metadata: FileMetadata {
                path: path.to_path_buf(),
                size,
                line_count: source_map.line_count(),
                char_count: source_map.char_count(),
            },
            language: Language::from_path(path),
            source_map,
        }
    }

    pub fn text(&self) -> &str {
        self.source_map.source()
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Explicit language if given, else the detected one
    pub fn resolve_language(&self, explicit: Option<Language>) -> Result<Language, SourceError> {
        explicit
            .or(self.language)
            .ok_or_else(|| SourceError::UnsupportedLanguage {
                path: self.metadata.path.display().to_string(),
                extension: self
                    .metadata
                    .path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned()),
            })
    }
}

/// Position of the first byte that fails to decode
fn invalid_utf8_span(bytes: &[u8], valid_up_to: usize) -> Span {
    let prefix = String::from_utf8_lossy(&bytes[..valid_up_to.min(bytes.len())]);
    let map = SourceMap::new(prefix.into_owned());
    let end = map.char_count();
    map.span(end, end)
}

fn io_error(path: &Path, error: std::io::Error) -> SourceError {
    let path = path.display().to_string();
    match error.kind() {
        ErrorKind::NotFound => SourceError::FileNotFound { path },
        _ => SourceError::IoError {
            path,
            message: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_load_python_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.py");
        fs::write(&path, "import os\nprint(os.name)\n").unwrap();

        let file = SourceFile::load(&path).unwrap();
        assert_eq!(file.language, Some(Language::Python));
        assert_eq!(file.metadata.line_count, 3);
        assert_eq!(file.metadata.size, 25);
        assert_eq!(file.text(), "import os\nprint(os.name)\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourceFile::load(&dir.path().join("absent.py"));
        assert_matches!(result, Err(SourceError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::Builder::new().suffix(".c").tempfile().unwrap();
        file.write_all(&[0x69, 0x6e, 0x74, 0xff, 0xfe]).unwrap();
        let result = SourceFile::load(file.path());
        assert_matches!(result, Err(SourceError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_invalid_utf8_span_points_at_bad_byte() {
        let bytes = b"int x;\nch\xffar";
        let span = invalid_utf8_span(bytes, 9);
        assert_eq!(span.start().line, 2);
        assert_eq!(span.start().column, 3);
        assert_eq!(span.start().offset, 9);
    }

    #[test]
    fn test_resolve_language() {
        let file = SourceFile::from_text(Path::new("notes.txt"), "x".to_string(), 1);
        assert_eq!(file.language, None);
        assert_matches!(
            file.resolve_language(None),
            Err(SourceError::UnsupportedLanguage { extension: Some(ref ext), .. }) if ext == "txt"
        );
        assert_eq!(file.resolve_language(Some(Language::C)), Ok(Language::C));

        let header = SourceFile::from_text(Path::new("lib.h"), String::new(), 0);
        assert_eq!(header.resolve_language(None), Ok(Language::C));
        assert_eq!(header.resolve_language(Some(Language::Python)), Ok(Language::Python));
    }

    #[test]
    fn test_error_codes() {
        let error = SourceError::FileTooLarge {
            size: 10,
            max_size: 1,
        };
        assert_eq!(error.error_code(), codes::source::FILE_TOO_LARGE);
    }
}
