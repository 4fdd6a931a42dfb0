/// Hashtags in `caption`, lowercased, in order of appearance.
///
/// The caption is split on single spaces; any token beginning with `#` counts.
/// Repeats are kept, so `"#Cat #cat"` yields two entries.
pub fn parse_hashtags(caption: &str) -> Vec<String> {
    caption
        .split(' ')
        .filter(|word| word.starts_with('#'))
        .map(|word| word.to_lowercase())
        .collect()
}

/// Comma-joined form written to the posts table.
pub fn join_hashtags(tags: &[String]) -> String {
    tags.join(",")
}
