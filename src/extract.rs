//! Field extraction: turns a decoded `PostDocument` into a flat `PostRecord`.
//!
//! Required fields fail with `StructuralError::MissingField`; optional ones
//! fall back to their documented defaults.

use crate::date::DateZone;
use crate::document::{Node, PostDocument};
use crate::error::StructuralError;
use crate::hashtags::parse_hashtags;

pub const POST_URL_BASE: &str = "https://www.instagram.com/p/";
/// Written when the document has no accessibility caption. A JSON `null` is
/// treated as absent, so it also becomes `NONE` rather than an empty field.
pub const NO_ACCESSIBILITY_CAPTION: &str = "NONE";

/// One post, ready to be written and aggregated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRecord {
    pub post_id: String,
    pub timestamp: i64,
    pub date: String,
    pub owner_id: String,
    pub owner_username: String,
    pub owner_full_name: String,
    pub thumbnail_url: String,
    pub is_video: bool,
    pub post_url: String,
    pub image_count: u64,
    pub accessibility_caption: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub like_count: u64,
    pub comment_count: u64,
}

fn required<T>(v: Option<T>, field: &'static str) -> Result<T, StructuralError> {
    v.ok_or(StructuralError::MissingField(field))
}

/// Caption text with newlines flattened; empty when the caption edge is absent.
fn caption_of(node: &Node) -> String {
    node.edge_media_to_caption
        .as_ref()
        .and_then(|c| c.edges.first())
        .and_then(|e| e.node.as_ref())
        .and_then(|n| n.text.as_deref())
        .map(|t| t.replace('\n', " "))
        .unwrap_or_default()
}

/// 1 for single-media posts, else the number of sidecar children (at least 1).
fn image_count_of(node: &Node) -> u64 {
    match &node.edge_sidecar_to_children {
        None => 1,
        Some(sidecar) => (sidecar.edges.len() as u64).max(1),
    }
}

pub fn extract(doc: PostDocument, zone: DateZone) -> Result<PostRecord, StructuralError> {
    let node = required(doc.node, "node")?;

    let post_id = required(node.shortcode.clone(), "node.shortcode")?;
    let timestamp = required(
        node.taken_at_timestamp.as_ref().and_then(|n| n.as_i64()),
        "node.taken_at_timestamp",
    )?;
    let date = zone.format(timestamp)?;

    let owner = required(node.owner.as_ref(), "node.owner")?;
    let owner_id = required(owner.id.clone(), "node.owner.id")?.into_string();
    let owner_username = required(owner.username.clone(), "node.owner.username")?;
    let owner_full_name = required(owner.full_name.clone(), "node.owner.full_name")?;

    let like_count = required(
        node.edge_media_preview_like.as_ref().and_then(|e| e.count.as_ref()).and_then(|n| n.as_count()),
        "node.edge_media_preview_like.count",
    )?;
    let comment_count = required(
        node.edge_media_to_comment.as_ref().and_then(|e| e.count.as_ref()).and_then(|n| n.as_count()),
        "node.edge_media_to_comment.count",
    )?;

    let thumbnail_url = required(node.thumbnail_src.clone(), "node.thumbnail_src")?;
    let is_video = required(node.is_video, "node.is_video")?;

    let caption = caption_of(&node);
    let hashtags = parse_hashtags(&caption);
    let accessibility_caption = node
        .accessibility_caption
        .clone()
        .unwrap_or_else(|| NO_ACCESSIBILITY_CAPTION.to_string());

    Ok(PostRecord {
        post_url: format!("{POST_URL_BASE}{post_id}"),
        post_id,
        timestamp,
        date,
        owner_id,
        owner_username,
        owner_full_name,
        thumbnail_url,
        is_video,
        image_count: image_count_of(&node),
        accessibility_caption,
        caption,
        hashtags,
        like_count,
        comment_count,
    })
}
