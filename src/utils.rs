use encoding_rs::WINDOWS_1252;

/// Decode file bytes as text, falling back to WINDOWS_1252 when they are not
/// valid UTF-8, and normalize line endings (CRLF/CR -> LF) so platform EOL
/// differences never show up as content mismatches.
pub fn decode_text(bytes: Vec<u8>) -> String {
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let (res, _, _) = WINDOWS_1252.decode(err.as_bytes());
            res.into_owned()
        }
    };

    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split normalized text into lines without terminators. A trailing newline
/// does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
