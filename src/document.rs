//! Typed view of one post metadata document.
//!
//! Every field is optional so that presence is decided by the extractor, not by
//! serde. Extra fields in the source are ignored.

use serde::Deserialize;

/// Top-level wrapper: all post data sits under `node`.
#[derive(Debug, Default, Deserialize)]
pub struct PostDocument {
    pub node: Option<Node>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Node {
    pub shortcode: Option<String>,
    pub taken_at_timestamp: Option<Number>,
    pub owner: Option<Owner>,
    pub edge_media_preview_like: Option<CountEdge>,
    pub edge_media_to_comment: Option<CountEdge>,
    pub edge_media_to_caption: Option<Edges<CaptionNode>>,
    pub edge_sidecar_to_children: Option<Edges<serde_json::Value>>,
    pub thumbnail_src: Option<String>,
    pub is_video: Option<bool>,
    pub accessibility_caption: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Owner {
    pub id: Option<Ident>,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountEdge {
    pub count: Option<Number>,
}

#[derive(Debug, Deserialize)]
pub struct Edges<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptionNode {
    pub text: Option<String>,
}

/// Integers show up both as JSON numbers and as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Number {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Number::Float(_) => None,
            Number::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Non-negative count; negative values clamp to zero.
    pub fn as_count(&self) -> Option<u64> {
        self.as_i64().map(|n| n.max(0) as u64)
    }
}

/// Identifiers are usually strings, occasionally bare numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    Text(String),
    Int(i64),
}

impl Ident {
    pub fn into_string(self) -> String {
        match self {
            Ident::Text(s) => s,
            Ident::Int(n) => n.to_string(),
        }
    }
}
