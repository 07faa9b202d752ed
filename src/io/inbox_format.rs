//! Inbox CSV format handling
//!
//! This module centralizes the inbox file format, providing:
//! - InboxRecord structure for deserialization
//! - Date column parsing into raw date components
//! - Conversion from inbox records to messages
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::DateStamp;
use chrono::DateTime;
use serde::Deserialize;

/// Inbox record structure for deserialization
///
/// Matches the inbox format with columns: date, message
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InboxRecord {
    pub date: String,
    pub message: String,
}

/// A message ready for routing
#[derive(Debug, Clone, PartialEq)]
pub struct InboxMessage {
    pub date: DateStamp,
    pub body: String,
}

/// Parse the date column
///
/// Accepts `YYYY-MM-DD`, kept as raw components so an impossible day still
/// reaches the validator, or an RFC 2822 mail header date such as
/// `Fri, 1 Mar 2024 09:15:00 -0500` (the sender's local date is kept).
pub fn parse_date_stamp(value: &str) -> Result<DateStamp, String> {
    let value = value.trim();

    if let Some(stamp) = parse_iso_components(value) {
        return Ok(stamp);
    }

    DateTime::parse_from_rfc2822(value)
        .map(|dt| DateStamp::from(dt.date_naive()))
        .map_err(|_| format!("Unrecognized date '{}'", value))
}

fn parse_iso_components(value: &str) -> Option<DateStamp> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some(DateStamp::new(year, month, day))
}

/// Convert an InboxRecord to an InboxMessage
///
/// # Returns
///
/// Result containing either:
/// - Ok(InboxMessage) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_inbox_record(record: InboxRecord) -> Result<InboxMessage, String> {
    let date = parse_date_stamp(&record.date)?;

    if record.message.trim().is_empty() {
        return Err(format!("Empty message dated '{}'", record.date));
    }

    Ok(InboxMessage {
        date,
        body: record.message,
    })
}
