//! Chat-session lifecycle.
//!
//! A [`SessionCache`] holds at most one provider session, tagged with the
//! display language it was built for. Asking for a different language
//! replaces it. Construction never fails outright: problems are reported
//! through [`SessionResult::Degraded`] and a warning.

mod cache;
mod types;

pub use cache::SessionCache;
pub use types::{DegradedReason, SessionHandle, SessionResult};
