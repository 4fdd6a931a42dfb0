use crate::error::StructuralError;
use chrono::{Local, TimeZone};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// `DD/MM/YYYY HH:MM:SS`, the display form used in the posts table.
const POST_DATE: &[FormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

/// Which wall clock post dates are rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateZone {
    /// System local time, with the offset in force at each timestamp (DST aware).
    #[default]
    Local,
    /// One offset for every timestamp.
    Fixed(UtcOffset),
}

impl DateZone {
    pub fn offset_at(self, ts: i64) -> UtcOffset {
        match self {
            DateZone::Fixed(off) => off,
            DateZone::Local => local_offset_at(ts),
        }
    }

    pub fn format(self, ts: i64) -> Result<String, StructuralError> {
        format_post_date(ts, self.offset_at(ts))
    }
}

/// Render a unix timestamp (seconds) in the given offset.
pub fn format_post_date(ts: i64, offset: UtcOffset) -> Result<String, StructuralError> {
    let dt = OffsetDateTime::from_unix_timestamp(ts)
        .map_err(|_| StructuralError::InvalidTimestamp(ts))?
        .to_offset(offset);
    dt.format(POST_DATE).map_err(|_| StructuralError::InvalidTimestamp(ts))
}

/// Local UTC offset in force at `ts`, per the system time zone rules (`TZ`).
/// Falls back to UTC for instants the zone database cannot place.
pub fn local_offset_at(ts: i64) -> UtcOffset {
    let secs = match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.offset().local_minus_utc(),
        None => return UtcOffset::UTC,
    };
    UtcOffset::from_whole_seconds(secs).unwrap_or(UtcOffset::UTC)
}
