//! Display rendering for a single user record.
//!
//! Timestamps arrive string-encoded, the way a client receives them over the
//! wire. Formatting never fails: an empty timestamp renders as [`PLACEHOLDER`]
//! and anything that does not parse is shown verbatim.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::User;

pub const PLACEHOLDER: &str = "N/A";

/// Month abbreviation, day, year, 12-hour clock.
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecordView {
  pub id: i32,
  pub name: String,
  pub email: String,
  #[serde(default)]
  pub created_at: String,
  #[serde(default)]
  pub updated_at: String,
}

impl From<&User> for UserRecordView {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      name: user.name.clone(),
      email: user.email.clone(),
      created_at: user.created_at.to_rfc3339(),
      updated_at: user.updated_at.to_rfc3339(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
  pub id: i32,
  pub name: String,
  pub email: String,
  pub created: String,
  pub updated: String,
}

impl UserCard {
  pub fn from_record(record: &UserRecordView) -> Self {
    Self {
      id: record.id,
      name: record.name.clone(),
      email: record.email.clone(),
      created: format_timestamp(&record.created_at),
      updated: format_timestamp(&record.updated_at),
    }
  }

  pub fn to_html(&self) -> String {
    format!(
      concat!(
        "<div class=\"user-card\">",
        "<div class=\"user-card__id\">ID: {}</div>",
        "<div class=\"user-card__name\">{}</div>",
        "<div class=\"user-card__email\">{}</div>",
        "<div class=\"user-card__created\">Created: {}</div>",
        "<div class=\"user-card__updated\">Updated: {}</div>",
        "</div>"
      ),
      self.id,
      escape_html(&self.name),
      escape_html(&self.email),
      escape_html(&self.created),
      escape_html(&self.updated),
    )
  }
}

impl fmt::Display for UserCard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "ID: {}", self.id)?;
    writeln!(f, "Name: {}", self.name)?;
    writeln!(f, "Email: {}", self.email)?;
    writeln!(f, "Created: {}", self.created)?;
    write!(f, "Updated: {}", self.updated)
  }
}

pub fn format_timestamp(raw: &str) -> String {
  if raw.is_empty() {
    return PLACEHOLDER.to_string();
  }

  match parse_timestamp(raw) {
    Ok(timestamp) => timestamp.format(DISPLAY_FORMAT).to_string(),
    Err(_) => raw.to_string(),
  }
}

/// Offset-less inputs are read as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
    return Ok(timestamp.with_timezone(&Utc));
  }

  for format in NAIVE_FORMATS {
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
      return Ok(timestamp.and_utc());
    }
  }

  NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::default()).and_utc())
}

fn escape_html(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
