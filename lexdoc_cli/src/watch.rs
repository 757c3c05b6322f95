//! `lexdoc watch`: poll a file's mtime and re-analyze through a debounced session

use crate::commands::{build_analyzer, Context};
use crate::error::CliError;
use lexdoc_analyzer::analysis::StatusLabel;
use lexdoc_analyzer::config::compile_time::session::POLL_INTERVAL_MS;
use lexdoc_analyzer::{log_info, log_warning, AnalysisSession, Analyzer, Language, SourceFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

pub struct FileWatcher {
    path: PathBuf,
    session: AnalysisSession,
    last_modified: Option<SystemTime>,
    text: String,
}

impl FileWatcher {
    pub fn new(path: &Path, session: AnalysisSession) -> Result<Self, CliError> {
        let source = SourceFile::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            session,
            last_modified: modified(path),
            text: source.text().to_string(),
        })
    }

    /// Full pass over the current contents, regardless of the timer
    pub fn initial(&mut self) -> Result<StatusLabel, CliError> {
        Ok(self.session.analyze_now(&self.text)?.status())
    }

    /// Record a change if the mtime moved, then let the session decide
    /// whether a pass is due.
    pub fn check(&mut self, now: Instant) -> Result<Option<StatusLabel>, CliError> {
        let current = modified(&self.path);
        if current.is_some() && current != self.last_modified {
            self.text = SourceFile::load(&self.path)?.text().to_string();
            self.last_modified = current;
            self.session.on_edit(now);
        }

        let analysis = self.session.poll(now, &self.text)?;
        Ok(analysis.map(|a| a.status()))
    }

    pub fn passes(&self) -> u64 {
        self.session.passes()
    }
}

/// Editors often replace files by rename, so source errors are transient
/// here. Anything else retries only when its code is not fatal.
fn is_retryable(error: &CliError) -> bool {
    matches!(error, CliError::Source(_)) || !error.requires_halt()
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

pub fn run(
    ctx: &Context,
    file: &Path,
    language: Option<Language>,
    dictionary: Option<&Path>,
) -> Result<(), CliError> {
    let source = SourceFile::load(file)?;
    let language = source.resolve_language(language)?;
    let analyzer = build_analyzer(language, dictionary)?;
    let session = AnalysisSession::with_preferences(analyzer, &ctx.preferences);
    let mut watcher = FileWatcher::new(file, session)?;

    log_info!("Watching file",
        "file" => file.display(),
        "language" => language,
        "poll_ms" => POLL_INTERVAL_MS
    );
    println!("{}", watcher.initial()?);

    let interval = Duration::from_millis(POLL_INTERVAL_MS);
    loop {
        thread::sleep(interval);
        match watcher.check(Instant::now()) {
            Ok(Some(status)) => println!("{}", status),
            Ok(None) => {}
            Err(e) if is_retryable(&e) => {
                log_warning!(code = e.error_code(), "Re-analysis failed, retrying",
                    "file" => file.display(),
                    "error" => e
                );
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexdoc_analyzer::DictionaryStore;
    use std::sync::Arc;

    fn watcher_for(path: &Path) -> FileWatcher {
        let store = DictionaryStore::builtin(Language::Python).unwrap();
        let analyzer = Analyzer::new(Arc::new(store)).unwrap();
        FileWatcher::new(path, AnalysisSession::new(analyzer, Duration::ZERO)).unwrap()
    }

    #[test]
    fn test_retry_policy() {
        let missing = CliError::from(lexdoc_analyzer::SourceError::FileNotFound {
            path: "a.py".to_string(),
        });
        assert!(is_retryable(&missing));

        let too_many = CliError::from(lexdoc_analyzer::AnalysisError::from(
            lexdoc_analyzer::LexerError::TooManyTokens { count: 2 },
        ));
        assert!(!is_retryable(&too_many));
    }

    #[test]
    fn test_unchanged_file_does_not_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "x = 1").unwrap();

        let mut watcher = watcher_for(&path);
        assert_eq!(watcher.initial().unwrap(), StatusLabel::Total { count: 3 });
        assert_eq!(watcher.check(Instant::now()).unwrap(), None);
        assert_eq!(watcher.passes(), 1);
    }

    #[test]
    fn test_modification_triggers_one_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "x = 1").unwrap();
        let mut watcher = watcher_for(&path);

        fs::write(&path, "if x: pass").unwrap();
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(SystemTime::now() + Duration::from_secs(5))
            .unwrap();

        let now = Instant::now();
        assert_eq!(
            watcher.check(now).unwrap(),
            Some(StatusLabel::Total { count: 4 })
        );
        assert_eq!(watcher.check(now).unwrap(), None);
        assert_eq!(watcher.passes(), 1);
    }
}
