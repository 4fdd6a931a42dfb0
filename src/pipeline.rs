use crate::aggregate::Aggregator;
use crate::config::{AccountStatsNaming, TableGenOptions};
use crate::date::DateZone;
use crate::error::{SkipReason, UsageError};
use crate::extract::{extract, PostRecord};
use crate::paths::{discover_inputs, parent_and_prefix, OutputPaths};
use crate::progress::make_count_progress;
use crate::report::ReportWriters;
use crate::util::init_tracing_once;
use crate::xz_json::{decode_file, warn_skip};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use time::UtcOffset;

#[derive(Clone, Default)]
pub struct TableGen {
    pub(crate) opts: TableGenOptions,
}

/// What a run did, returned once all four tables are flushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files carrying the metadata extension.
    pub candidates: u64,
    /// Files that became a posts row.
    pub processed: u64,
    /// Files skipped after a decode or structural error.
    pub skipped: u64,
    pub hashtag_links: u64,
    pub hashtags: u64,
    pub accounts: u64,
    /// Posts, hashtag links, hashtag stats, account stats.
    pub outputs: Vec<PathBuf>,
}

/// Decode one file and pull the post out of it.
pub fn load_post(path: &Path, zone: DateZone) -> Result<PostRecord, SkipReason> {
    let doc = decode_file(path)?;
    Ok(extract(doc, zone)?)
}

impl TableGen {
    pub fn new() -> Self {
        Self { opts: TableGenOptions::default() }
    }

    pub fn from_options(opts: TableGenOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn input_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_input_dir(dir); self }
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_dir(dir); self }
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self { self.opts = self.opts.with_prefix(prefix); self }
    pub fn extension(mut self, ext: impl Into<String>) -> Self { self.opts = self.opts.with_extension(ext); self }
    pub fn account_stats_naming(mut self, naming: AccountStatsNaming) -> Self { self.opts = self.opts.with_account_stats_naming(naming); self }
    pub fn utc_offset(mut self, offset: UtcOffset) -> Self { self.opts = self.opts.with_utc_offset(offset); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }

    pub fn options(&self) -> &TableGenOptions {
        &self.opts
    }

    /// Resolve where the four tables go, filling unset pieces from the input folder.
    pub fn output_paths(&self) -> Result<OutputPaths, UsageError> {
        let (dir, prefix) = match (&self.opts.output_dir, &self.opts.prefix) {
            (Some(dir), Some(prefix)) => (dir.clone(), prefix.clone()),
            (dir, prefix) => {
                let (parent, base) = parent_and_prefix(&self.opts.input_dir)?;
                (dir.clone().unwrap_or(parent), prefix.clone().unwrap_or(base))
            }
        };
        Ok(OutputPaths::new(&dir, &prefix, self.opts.account_stats_naming))
    }

    pub(crate) fn candidates(&self) -> Result<Vec<PathBuf>> {
        let input = &self.opts.input_dir;
        if !input.is_dir() {
            return Err(UsageError::NotADirectory(input.clone()).into());
        }
        discover_inputs(input, &self.opts.extension)
            .with_context(|| format!("listing {}", input.display()))
    }

    /// Single pass over the input folder: write posts and hashtag links as each
    /// file is read, then the hashtag and account statistics.
    ///
    /// Unreadable or incomplete files are logged and skipped. Any failure to
    /// create or write an output aborts the run.
    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        let zone = self.opts.utc_offset.map_or(DateZone::Local, DateZone::Fixed);

        let files = self.candidates()?;
        let outputs = self.output_paths()?;
        tracing::info!("Processing files for {}", self.opts.input_dir.display());
        if files.is_empty() {
            tracing::info!("No files found in folder");
        } else {
            tracing::debug!("Found {} candidate files.", files.len());
        }

        let mut writers = ReportWriters::create(&outputs)
            .context("creating output tables")?;
        let mut agg = Aggregator::new();
        let mut summary = RunSummary { candidates: files.len() as u64, ..Default::default() };

        let pb = if self.opts.progress {
            Some(make_count_progress(files.len() as u64, "Posts"))
        } else {
            None
        };

        for path in &files {
            match load_post(path, zone) {
                Ok(post) => {
                    writers.emit_post_row(&post)?;
                    for tag in &post.hashtags {
                        writers.emit_hashtag_link(&post.post_id, tag)?;
                    }
                    agg.record_post(&post);
                    summary.processed += 1;
                    summary.hashtag_links += post.hashtags.len() as u64;
                    tracing::debug!(post=%post.post_id, hashtags=post.hashtags.len(), "processed {}", path.display());
                }
                Err(e) => {
                    match &pb {
                        Some(pb) => pb.suspend(|| warn_skip(path, &e)),
                        None => warn_skip(path, &e),
                    }
                    summary.skipped += 1;
                }
            }
            if let Some(pb) = &pb { pb.inc(1); }
        }

        if let Some(pb) = pb { pb.finish_with_message("done"); }

        summary.hashtags = writers.emit_hashtag_stats(agg.hashtags())?;
        summary.accounts = writers.emit_account_stats(agg.accounts())?;
        summary.outputs = writers.finish()?;

        tracing::info!(
            processed = summary.processed,
            skipped = summary.skipped,
            hashtags = summary.hashtags,
            accounts = summary.accounts,
            "Done."
        );
        Ok(summary)
    }
}
