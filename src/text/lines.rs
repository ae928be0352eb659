/// Split text into lines, each keeping its own terminator byte for byte.
///
/// A line ends at `\r\n`, `\n`, or a lone `\r`. The last line has no
/// terminator when the text does not end with one. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
            b'\r' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };
        // Terminators are ASCII, so `end` is always a char boundary
        lines.push(&text[start..end]);
        start = end;
        i = end;
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Byte offset at which line `index` starts; `text.len()` when past the end.
pub fn byte_offset_of_line(lines: &[&str], index: usize) -> usize {
    lines.iter().take(index).map(|line| line.len()).sum()
}
