//! Application layer containing the allocation logic.
//!
//! `engine` holds the pure arithmetic that turns a bill and a selection state
//! into per-item, per-attendee and grand totals. `session` owns the state of
//! one splitting session and recomputes on every selection change.

pub mod engine;
pub mod session;
