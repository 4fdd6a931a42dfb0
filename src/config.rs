use std::path::{Path, PathBuf};
use time::UtcOffset;

/// File name of the account statistics table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountStatsNaming {
    /// `<name>account_stats.csv`, as existing consumers of these tables expect.
    #[default]
    Legacy,
    /// `<name>_account_stats.csv`, consistent with the other three tables.
    Underscore,
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct TableGenOptions {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,   // None: parent of input_dir
    pub prefix: Option<String>,        // None: base name of input_dir
    pub extension: String,             // candidate file suffix
    pub account_stats_naming: AccountStatsNaming,
    pub utc_offset: Option<UtcOffset>, // None: local time, offset looked up per timestamp
    pub progress: bool,
}

impl Default for TableGenOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: None,
            prefix: None,
            extension: ".json.xz".to_string(),
            account_stats_naming: AccountStatsNaming::Legacy,
            utc_offset: None,
            progress: false,
        }
    }
}

impl TableGenOptions {
    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }
    pub fn with_account_stats_naming(mut self, naming: AccountStatsNaming) -> Self {
        self.account_stats_naming = naming;
        self
    }
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
}
