use crate::config::AccountStatsNaming;
use crate::error::UsageError;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Candidate inputs directly inside `dir` whose file name ends with `extension`,
/// sorted by file name so runs over the same folder are reproducible.
/// Symlinks count when they point at a regular file.
pub fn discover_inputs(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let ent = entry.map_err(io::Error::from)?;
        if !ent.path().is_file() {
            continue;
        }
        if let Some(name) = ent.file_name().to_str() {
            if name.ends_with(extension) {
                files.push(ent.path().to_path_buf());
            }
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Locations of the four output tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub posts: PathBuf,
    pub hashtag_links: PathBuf,
    pub hashtag_stats: PathBuf,
    pub account_stats: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, prefix: &str, naming: AccountStatsNaming) -> Self {
        let account_stats = match naming {
            AccountStatsNaming::Legacy => format!("{prefix}account_stats.csv"),
            AccountStatsNaming::Underscore => format!("{prefix}_account_stats.csv"),
        };
        Self {
            posts: out_dir.join(format!("{prefix}_posts.csv")),
            hashtag_links: out_dir.join(format!("{prefix}_hashtags.csv")),
            hashtag_stats: out_dir.join(format!("{prefix}_hashtag_stats.csv")),
            account_stats: out_dir.join(account_stats),
        }
    }
}

/// `path` made absolute against the working directory, with `.` and `..`
/// removed textually. Symlinks are left alone.
fn lexical_absolute(path: &Path) -> io::Result<PathBuf> {
    let mut out = PathBuf::new();
    for comp in std::path::absolute(path)?.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Parent directory and base name of an input folder.
///
/// The name comes from the folder as given, so a symlinked folder keeps the
/// link's name. The parent is the physical one, where `<folder>/..` leads.
pub fn parent_and_prefix(input_dir: &Path) -> Result<(PathBuf, String), UsageError> {
    let named = lexical_absolute(input_dir).unwrap_or_else(|_| input_dir.to_path_buf());
    let prefix = named
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| UsageError::NoBaseName(input_dir.to_path_buf()))?;
    let resolved = std::fs::canonicalize(input_dir).unwrap_or_else(|_| named.clone());
    let parent = resolved
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| UsageError::NoParent(input_dir.to_path_buf()))?;
    Ok((parent, prefix))
}
