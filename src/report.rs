//! CSV sinks for the four output tables.
//!
//! Every field is quoted, embedded quotes are doubled and a literal backslash
//! is written as `\\`. Rows end in CRLF.

use crate::aggregate::{AccountStat, HashtagStat};
use crate::error::OutputWriteError;
use crate::extract::PostRecord;
use crate::hashtags::join_hashtags;
use crate::paths::OutputPaths;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const POSTS_COLUMNS: [&str; 14] = [
    "postid", "date", "userid", "username", "userfullname",
    "thumbnail_url", "is_video", "post_url", "num_images",
    "accessibility_caption", "caption", "hashtags",
    "likecount", "commentcount",
];

pub const HASHTAG_LINK_COLUMNS: [&str; 2] = ["post", "hashtag"];

pub const HASHTAG_STATS_COLUMNS: [&str; 8] = [
    "hashtag", "count", "likecount", "commentcount", "engagementcount",
    "averagelikes", "averagecomments", "averageengagement",
];

pub const ACCOUNT_STATS_COLUMNS: [&str; 10] = [
    "username", "userfullname", "userid", "count", "likecount", "commentcount",
    "engagementcount", "averagelikes", "averagecomments", "averageengagement",
];

/// CSV writer configured with the table dialect (always quoted, CRLF).
/// Write rows through [`write_row`] so backslashes get escaped.
pub fn table_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::CRLF)
        .from_writer(inner)
}

/// Write one record, doubling every backslash so readers that treat `\` as an
/// escape character get the original text back.
pub fn write_row<W, I, T>(w: &mut Writer<W>, fields: I) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    for field in fields {
        let field = field.as_ref();
        if field.contains('\\') {
            w.write_field(field.replace('\\', "\\\\"))?;
        } else {
            w.write_field(field)?;
        }
    }
    w.write_record(None::<&[u8]>)
}

/// Shortest round-trip rendering that always keeps a fractional part (`10.0`).
/// Exponents carry a sign and at least two digits (`1e+16`, `1.5e-05`).
pub fn format_average(x: f64) -> String {
    let s = format!("{:?}", x);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

struct Sink {
    path: PathBuf,
    w: Writer<File>,
}

impl Sink {
    fn create(path: &Path, header: &[&str]) -> Result<Self, OutputWriteError> {
        let file = File::create(path)
            .map_err(|source| OutputWriteError::Create { path: path.to_path_buf(), source })?;
        let mut sink = Self { path: path.to_path_buf(), w: table_writer(file) };
        sink.row(header)?;
        Ok(sink)
    }

    fn row<I, T>(&mut self, fields: I) -> Result<(), OutputWriteError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        write_row(&mut self.w, fields)
            .map_err(|source| OutputWriteError::Write { path: self.path.clone(), source })
    }

    fn finish(mut self) -> Result<PathBuf, OutputWriteError> {
        self.w
            .flush()
            .map_err(|source| OutputWriteError::Flush { path: self.path.clone(), source })?;
        Ok(self.path)
    }
}

/// The four output tables, opened once for the whole run.
pub struct ReportWriters {
    posts: Sink,
    links: Sink,
    hashtag_stats: Sink,
    account_stats: Sink,
}

impl ReportWriters {
    /// Create (truncating) all four files and write their header rows.
    pub fn create(paths: &OutputPaths) -> Result<Self, OutputWriteError> {
        Ok(Self {
            posts: Sink::create(&paths.posts, &POSTS_COLUMNS)?,
            links: Sink::create(&paths.hashtag_links, &HASHTAG_LINK_COLUMNS)?,
            hashtag_stats: Sink::create(&paths.hashtag_stats, &HASHTAG_STATS_COLUMNS)?,
            account_stats: Sink::create(&paths.account_stats, &ACCOUNT_STATS_COLUMNS)?,
        })
    }

    pub fn emit_post_row(&mut self, post: &PostRecord) -> Result<(), OutputWriteError> {
        self.posts.row([
            post.post_id.as_str(),
            post.date.as_str(),
            post.owner_id.as_str(),
            post.owner_username.as_str(),
            post.owner_full_name.as_str(),
            post.thumbnail_url.as_str(),
            format_bool(post.is_video),
            post.post_url.as_str(),
            post.image_count.to_string().as_str(),
            post.accessibility_caption.as_str(),
            post.caption.as_str(),
            join_hashtags(&post.hashtags).as_str(),
            post.like_count.to_string().as_str(),
            post.comment_count.to_string().as_str(),
        ])
    }

    pub fn emit_hashtag_link(&mut self, post_id: &str, tag: &str) -> Result<(), OutputWriteError> {
        self.links.row([post_id, tag])
    }

    pub fn emit_hashtag_stats<'a, I>(&mut self, stats: I) -> Result<u64, OutputWriteError>
    where
        I: IntoIterator<Item = (&'a str, &'a HashtagStat)>,
    {
        let mut n = 0u64;
        for (tag, stat) in stats {
            let m = stat.metrics();
            self.hashtag_stats.row([
                tag.to_string(),
                stat.count.to_string(),
                stat.like_sum.to_string(),
                stat.comment_sum.to_string(),
                m.engagement.to_string(),
                format_average(m.average_likes),
                format_average(m.average_comments),
                format_average(m.average_engagement),
            ])?;
            n += 1;
        }
        Ok(n)
    }

    pub fn emit_account_stats<'a, I>(&mut self, stats: I) -> Result<u64, OutputWriteError>
    where
        I: IntoIterator<Item = (&'a str, &'a AccountStat)>,
    {
        let mut n = 0u64;
        for (username, stat) in stats {
            let m = stat.metrics();
            self.account_stats.row([
                username.to_string(),
                stat.full_name.clone(),
                stat.user_id.clone(),
                stat.count.to_string(),
                stat.like_sum.to_string(),
                stat.comment_sum.to_string(),
                m.engagement.to_string(),
                format_average(m.average_likes),
                format_average(m.average_comments),
                format_average(m.average_engagement),
            ])?;
            n += 1;
        }
        Ok(n)
    }

    /// Flush every table; returns the written paths in table order.
    pub fn finish(self) -> Result<Vec<PathBuf>, OutputWriteError> {
        Ok(vec![
            self.posts.finish()?,
            self.links.finish()?,
            self.hashtag_stats.finish()?,
            self.account_stats.finish()?,
        ])
    }
}
