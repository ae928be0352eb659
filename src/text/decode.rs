use serde::Serialize;
use std::path::Path;

use crate::error::{RepairError, RepairResult};

/// Text produced by lenient decoding, with the number of bytes it lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedText {
    pub text: String,
    pub dropped_bytes: usize,
}

impl DecodedText {
    pub fn is_lossless(&self) -> bool {
        self.dropped_bytes == 0
    }
}

/// Decode UTF-8, discarding every invalid byte sequence and counting it.
pub fn decode_lenient(bytes: &[u8]) -> DecodedText {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped_bytes = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped_bytes += chunk.invalid().len();
    }

    DecodedText {
        text,
        dropped_bytes,
    }
}

/// Decode UTF-8, failing on the first invalid sequence.
pub fn decode_strict(bytes: Vec<u8>, path: &Path) -> RepairResult<String> {
    String::from_utf8(bytes).map_err(|e| RepairError::Decode {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
