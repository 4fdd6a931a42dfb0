mod config;
mod date;
mod paths;
mod xz_json;
mod document;
mod error;

mod extract;
mod hashtags;
mod aggregate;
mod report;

mod progress;
mod util;
mod pipeline;
mod integrity;

pub use crate::config::{AccountStatsNaming, TableGenOptions};
pub use crate::pipeline::{load_post, RunSummary, TableGen};
pub use crate::integrity::IntegrityMode;

// Errors
pub use crate::error::{DecodeError, OutputWriteError, SkipReason, StructuralError, UsageError};

// Decoding and extraction building blocks.
pub use crate::document::{Ident, Number, PostDocument};
pub use crate::xz_json::{decode_file, validate_xz_full};
pub use crate::extract::{extract, PostRecord, NO_ACCESSIBILITY_CAPTION, POST_URL_BASE};
pub use crate::date::{format_post_date, local_offset_at, DateZone};
pub use crate::hashtags::{join_hashtags, parse_hashtags};

// Aggregation and report output.
pub use crate::aggregate::{AccountStat, Aggregator, HashtagStat, Metrics};
pub use crate::report::{
    format_average, table_writer, write_row, ReportWriters, ACCOUNT_STATS_COLUMNS, HASHTAG_LINK_COLUMNS,
    HASHTAG_STATS_COLUMNS, POSTS_COLUMNS,
};
pub use crate::paths::{discover_inputs, OutputPaths};

pub use crate::util::init_tracing_once;
