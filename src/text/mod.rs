//! Byte decoding and line splitting.
//!
//! A target file is never interpreted beyond "an ordered list of lines". Each
//! line keeps its own terminator so that concatenating the lines reproduces
//! the decoded text byte for byte.

mod decode;
mod lines;

pub use decode::{decode_lenient, decode_strict, DecodedText};
pub use lines::{byte_offset_of_line, split_lines};
