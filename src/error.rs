//! Error taxonomy. Decode and structural errors are per-file and recoverable;
//! output and usage errors end the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The file could not be decompressed or its payload is not a valid document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("read/decompress failed: {0}")]
    Io(#[from] io::Error),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A well-formed document lacks something every post is expected to carry.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

#[derive(Debug, Error)]
pub enum OutputWriteError {
    #[error("cannot create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
    #[error("cannot flush {path}: {source}")]
    Flush { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("input path {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("input path {0} has no parent directory to write outputs into")]
    NoParent(PathBuf),
    #[error("input path {0} has no usable base name")]
    NoBaseName(PathBuf),
}

/// Why a single input file was skipped.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
}
