use crate::pipeline::TableGen;
use crate::progress::make_count_progress;
use crate::util::init_tracing_once;
use crate::xz_json::{decode_file, validate_xz_full};
use anyhow::Result;
use std::path::PathBuf;

/// Mode for integrity checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrityMode {
    /// Decompress each stream to EOF; catches truncation and checksum errors only.
    Stream,
    /// Decompress and parse as a post document, the same way a run does.
    #[default]
    Document,
}

impl TableGen {
    /// Check every candidate file in the input folder without writing any output.
    /// Returns `(path, error_message)` for each file that failed the check.
    pub fn check_integrity(&self, mode: IntegrityMode) -> Result<Vec<(PathBuf, String)>> {
        init_tracing_once();
        let files = self.candidates()?;

        let pb = if self.opts.progress {
            Some(make_count_progress(files.len() as u64, "Integrity"))
        } else {
            None
        };

        let mut errors = Vec::new();
        for path in &files {
            let res = match mode {
                IntegrityMode::Stream => validate_xz_full(path),
                IntegrityMode::Document => decode_file(path).map(|_| ()),
            };
            if let Err(e) = res {
                tracing::debug!(path=%path.display(), error=%e, "integrity check failed");
                errors.push((path.clone(), e.to_string()));
            }
            if let Some(pb) = &pb { pb.inc(1); }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }
        tracing::info!("Integrity: {} of {} files failed", errors.len(), files.len());
        Ok(errors)
    }
}
