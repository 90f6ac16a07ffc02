use std::ops::Range;

/// A float token found in a line: the matched byte range and its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatToken {
    pub range: Range<usize>,
    pub value: f64,
}

impl FloatToken {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }
}

// Fixed-format float grammar: sign? digit '.' digit+ ('e' sign? digit+)?
//
// Exactly one integer digit before the point, so "12.5" yields "2.5" and bare
// integers never match. Lowercase 'e' only. This matcher decides which
// substrings count as floats vs text and must stay exactly this strict.
fn match_float(b: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    if i >= b.len() || !b[i].is_ascii_digit() {
        return None;
    }
    i += 1;
    if i >= b.len() || b[i] != b'.' {
        return None;
    }
    i += 1;
    let frac_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == frac_start {
        return None;
    }
    // The exponent is consumed only when complete: "1.2e" keeps the 'e' as text.
    if i < b.len() && b[i] == b'e' {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(i)
}

/// Extract every float token from a line, left to right, non-overlapping.
pub fn scan_floats(line: &str) -> Vec<FloatToken> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match match_float(bytes, i) {
            Some(end) => {
                // Matched text is pure ASCII, so the slice is boundary-safe
                // and always parses as f64.
                if let Ok(value) = line[i..end].parse::<f64>() {
                    tokens.push(FloatToken { range: i..end, value });
                }
                i = end;
            }
            None => i += 1,
        }
    }
    tokens
}

/// Remove every float token from a line, keeping everything else verbatim.
pub fn strip_floats(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for tok in scan_floats(line) {
        out.push_str(&line[last..tok.range.start]);
        last = tok.range.end;
    }
    out.push_str(&line[last..]);
    out
}
