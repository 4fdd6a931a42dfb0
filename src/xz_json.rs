use crate::document::PostDocument;
use crate::error::DecodeError;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;
use xz2::read::XzDecoder;

// ----------------------------- Helpers for full-error logging ------------------------------------

/// Log a skipped input with its canonical path so the offending file is easy to find.
pub fn warn_skip(path: &Path, e: &dyn std::error::Error) {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::warn!(path=%abs.display(), error=%e, "Skipping post file; the run continues without it");
}

// ----------------------------- Decoding ------------------------------------

fn open_decoder(path: &Path) -> io::Result<XzDecoder<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(XzDecoder::new(BufReader::new(file)))
}

/// Decompress an xz file into a UTF-8 string.
pub fn read_to_string(path: &Path) -> Result<String, DecodeError> {
    let mut bytes = Vec::new();
    open_decoder(path)?.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decompress and parse one post metadata file.
pub fn decode_file(path: &Path) -> Result<PostDocument, DecodeError> {
    let text = read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

// ----------------------------- Integrity checks ----------------------------------

/// Decode the entire stream to EOF, discarding output.
pub fn validate_xz_full(path: &Path) -> Result<(), DecodeError> {
    let mut decoder = open_decoder(path)?;
    io::copy(&mut decoder, &mut io::sink())?;
    Ok(())
}
