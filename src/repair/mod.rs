//! The two repair procedures and the read-only marker scan.
//!
//! Marker truncation and range removal are independent one-shot tools. They
//! must not both be applied to the same corrupted state without re-checking
//! offsets first: truncation shortens the file, which moves every absolute
//! line range.

pub mod locate;
pub mod markers;
pub mod range;
pub mod truncate;

pub use locate::{locate_marker, LocateReport};
pub use markers::{MarkerHit, MarkerSet};
pub use range::{excise, remove_line_range, LineRange, RemoveReport};
pub use truncate::{truncate_at_marker, TruncateOutcome, TruncatePlan, TruncateReport};
