//! Query logging and the live analytics feed.
//!
//! Every classified query is appended to a line-oriented log file, the
//! whole file is re-parsed, and the parsed history is pushed to all
//! connected feed subscribers. The log is advisory analytics data, not a
//! system of record: writers take no lock, and near-simultaneous writes
//! may broadcast out-of-order snapshots.

mod feed;
mod log;

pub use feed::{serve_feed, LiveFeed};
pub use log::{QueryLog, QueryLogEntry};
