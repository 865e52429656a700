//! Error types for the limitbook crate.
//!
//! The book reports exactly one error: an unrecognized side tag. That
//! is a caller contract violation, surfaced synchronously and never
//! retried. Every "not found" outcome (unknown order id, out-of-range
//! level) is an `Option::None`, not an error, so callers can tell
//! "no such thing" apart from "malformed request".

/// The main error type for this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A side tag was neither `'B'` (bid) nor `'O'` (offer)
    #[error("side '{0}' not recognized; should be either 'B' (bid) or 'O' (offer)")]
    InvalidSide(char),
}
