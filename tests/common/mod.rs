#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `value` as an xz-compressed JSON document, like the scraper does.
pub fn write_xz_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = xz2::write::XzEncoder::new(f, 6);
    enc.write_all(value.to_string().as_bytes()).unwrap();
    enc.finish().unwrap();
}

/// A post document with every required field. `caption: None` drops the caption edge.
pub fn post_json(shortcode: &str, username: &str, likes: u64, comments: u64, caption: Option<&str>) -> Value {
    let caption_edges = match caption {
        Some(text) => json!({ "edges": [ { "node": { "text": text } } ] }),
        None => json!({ "edges": [] }),
    };
    json!({
        "node": {
            "shortcode": shortcode,
            "taken_at_timestamp": 1136073600,
            "owner": { "id": format!("id_{username}"), "username": username, "full_name": format!("{username} full") },
            "edge_media_preview_like": { "count": likes },
            "edge_media_to_comment": { "count": comments },
            "edge_media_to_caption": caption_edges,
            "thumbnail_src": format!("https://cdn.example/{shortcode}.jpg"),
            "is_video": false
        },
        "instaloader": { "version": "4.9", "node_type": "Post" }
    })
}

/// A tiny folder `<tmp>/travel` with:
/// - `a1.json.xz`: alice, 10 likes / 3 comments, caption with `#Cat`, `#cat`, `#Sun`
///   across a newline, a 3-image sidecar and an accessibility caption
/// - `a2.json.xz`: alice, 4 likes / 1 comment, no caption, video
/// - `b1.json.xz`: bob, 7 likes / 0 comments, no hashtags, numeric owner id
/// - `corrupt.json.xz`: plain text, not xz
/// - `missing.json.xz`: valid xz + JSON but no shortcode
/// - `notes.txt`, `raw.json`: ignored (wrong extension)
///
/// Outputs of a run land in `<tmp>`.
pub fn make_corpus_basic() -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("travel");
    fs::create_dir_all(&dir).unwrap();

    let mut a1 = post_json("A1", "alice", 10, 3, Some("Nice #Cat day #cat\nsecond line #Sun"));
    a1["node"]["edge_sidecar_to_children"] = json!({ "edges": [ {"node": {}}, {"node": {}}, {"node": {}} ] });
    a1["node"]["accessibility_caption"] = json!("Photo of a cat");
    write_xz_json(&dir.join("a1.json.xz"), &a1);

    let mut a2 = post_json("A2", "alice", 4, 1, None);
    a2["node"]["is_video"] = json!(true);
    a2["node"]["owner"]["full_name"] = json!("Alice Renamed");
    write_xz_json(&dir.join("a2.json.xz"), &a2);

    let mut b1 = post_json("B1", "bob", 7, 0, Some("no tags here"));
    b1["node"]["owner"]["id"] = json!(42);
    write_xz_json(&dir.join("b1.json.xz"), &b1);

    add_corrupt_file(&dir);

    let mut missing = post_json("M1", "mallory", 1, 1, None);
    missing["node"].as_object_mut().unwrap().remove("shortcode");
    write_xz_json(&dir.join("missing.json.xz"), &missing);

    fs::write(dir.join("notes.txt"), "not a post").unwrap();
    fs::write(dir.join("raw.json"), post_json("R1", "raw", 1, 1, None).to_string()).unwrap();

    (tmp, dir)
}

/// Correct extension, but plain text instead of an xz stream.
pub fn add_corrupt_file(dir: &Path) {
    fs::write(dir.join("corrupt.json.xz"), "{\"node\":{\"shortcode\":\"bad\"}}").unwrap();
}

/// Header plus data rows of a table written in the report dialect.
pub fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::ReaderBuilder::new()
        .double_quote(true)
        .escape(Some(b'\\'))
        .from_path(path)
        .unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

/// Data rows keyed by their first column.
pub fn rows_by_key(rows: &[Vec<String>]) -> std::collections::BTreeMap<String, Vec<String>> {
    rows.iter().map(|r| (r[0].clone(), r.clone())).collect()
}
