//! File naming for saved content.

/// Characters that are unsafe in file names on common filesystems.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest stem in bytes; keeps the whole name under the usual 255-byte
/// `NAME_MAX`.
pub const MAX_STEM_BYTES: usize = 200;

/// Plain-text file name for a topic: `content_{topic}.txt`.
///
/// The topic is trimmed; whitespace, path separators, reserved characters
/// and control characters each become `_`. The result is cut on a char
/// boundary to at most [`MAX_STEM_BYTES`].
pub fn content_file_name(topic: &str) -> String {
    let mut sanitized: String = topic
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    if sanitized.len() > MAX_STEM_BYTES {
        let mut end = MAX_STEM_BYTES;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized.truncate(end);
    }

    format!("content_{sanitized}.txt")
}
