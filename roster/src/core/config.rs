use std::path::PathBuf;

/// Roster configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Directory holding the database |
/// | ROSTER_DB_FILE | roster.redb | Database file inside WORK_DIR |
/// | ROSTER_STORAGE_KEY | oneMealData | Key of the persisted roster blob |
/// | ROSTER_CURRENCY | DZD | Currency suffix for amounts |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
///
/// A `.env` file in the working directory is read first.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database
    pub work_dir: PathBuf,
    /// Database file name inside `work_dir`
    pub db_file: String,
    /// Key under which the roster blob is stored
    pub storage_key: String,
    /// Currency shown after amounts
    pub currency: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

/// Key used by existing installations
pub const DEFAULT_STORAGE_KEY: &str = "oneMealData";

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            db_file: std::env::var("ROSTER_DB_FILE").unwrap_or_else(|_| "roster.redb".into()),
            storage_key: std::env::var("ROSTER_STORAGE_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.into()),
            currency: std::env::var("ROSTER_CURRENCY").unwrap_or_else(|_| "DZD".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
        }
    }

    /// Override the working directory, keeping the rest
    ///
    /// Mostly for tests
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.work_dir.join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
