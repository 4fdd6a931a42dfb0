//! Running per-hashtag and per-account totals, plus the metrics derived from
//! them when the tables are flushed.

use crate::extract::PostRecord;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashtagStat {
    pub count: u64,
    pub like_sum: u64,
    pub comment_sum: u64,
}

/// `full_name` and `user_id` are taken from the first post seen for the account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountStat {
    pub count: u64,
    pub like_sum: u64,
    pub comment_sum: u64,
    pub full_name: String,
    pub user_id: String,
}

/// Flush-time figures for one aggregate key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub engagement: u64,
    pub average_likes: f64,
    pub average_comments: f64,
    pub average_engagement: f64,
}

impl Metrics {
    /// Engagement weights a comment twice a like. `count` must be at least 1.
    pub fn compute(count: u64, like_sum: u64, comment_sum: u64) -> Self {
        let engagement = 2 * comment_sum + like_sum;
        let n = count as f64;
        Self {
            engagement,
            average_likes: like_sum as f64 / n,
            average_comments: comment_sum as f64 / n,
            average_engagement: engagement as f64 / n,
        }
    }
}

impl HashtagStat {
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self.count, self.like_sum, self.comment_sum)
    }
}

impl AccountStat {
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self.count, self.like_sum, self.comment_sum)
    }
}

/// Owned aggregation state for one run. Entries only appear on first
/// occurrence, so every stored count is at least 1.
#[derive(Debug, Default)]
pub struct Aggregator {
    hashtags: BTreeMap<String, HashtagStat>,
    accounts: BTreeMap<String, AccountStat>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hashtag(&mut self, tag: &str, likes: u64, comments: u64) {
        let stat = self.hashtags.entry(tag.to_string()).or_default();
        stat.count += 1;
        stat.like_sum += likes;
        stat.comment_sum += comments;
    }

    pub fn record_account(&mut self, username: &str, full_name: &str, user_id: &str, likes: u64, comments: u64) {
        let stat = self.accounts.entry(username.to_string()).or_insert_with(|| AccountStat {
            full_name: full_name.to_string(),
            user_id: user_id.to_string(),
            ..Default::default()
        });
        stat.count += 1;
        stat.like_sum += likes;
        stat.comment_sum += comments;
    }

    /// Feed one post: its account once, and each hashtag occurrence once.
    pub fn record_post(&mut self, post: &PostRecord) {
        for tag in &post.hashtags {
            self.record_hashtag(tag, post.like_count, post.comment_count);
        }
        self.record_account(
            &post.owner_username,
            &post.owner_full_name,
            &post.owner_id,
            post.like_count,
            post.comment_count,
        );
    }

    pub fn hashtag(&self, tag: &str) -> Option<&HashtagStat> {
        self.hashtags.get(tag)
    }

    pub fn account(&self, username: &str) -> Option<&AccountStat> {
        self.accounts.get(username)
    }

    pub fn hashtag_count(&self) -> usize {
        self.hashtags.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn hashtags(&self) -> impl Iterator<Item = (&str, &HashtagStat)> {
        self.hashtags.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn accounts(&self) -> impl Iterator<Item = (&str, &AccountStat)> {
        self.accounts.iter().map(|(k, v)| (k.as_str(), v))
    }
}
