use chrono::{DateTime, SubsecRound, Utc};

pub mod error;

/// Current time at the precision a `TIMESTAMPTZ` column stores, so a value
/// handed to the database comes back unchanged.
pub fn current_timestamp() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(6)
}
