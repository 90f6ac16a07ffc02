use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Options;
use crate::scanner::{scan_floats, strip_floats};
use crate::utils::{decode_text, split_lines};

// Exit codes are a contract with calling test harnesses.
pub const EXIT_MATCH: i32 = 0;
pub const EXIT_STAT_FIRST: i32 = 1;
pub const EXIT_STAT_SECOND: i32 = 2;
pub const EXIT_SIZE: i32 = 3;
pub const EXIT_LINE_COUNT: i32 = 4;
pub const EXIT_FLOAT_COUNT: i32 = 5;
pub const EXIT_FLOAT_VALUE: i32 = 6;
pub const EXIT_TEXT: i32 = 7;

/// What went wrong on a single line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    FloatCount,
    FloatValue,
    Text,
}

impl MismatchKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            MismatchKind::FloatCount => EXIT_FLOAT_COUNT,
            MismatchKind::FloatValue => EXIT_FLOAT_VALUE,
            MismatchKind::Text => EXIT_TEXT,
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::FloatCount => write!(f, "float counts"),
            MismatchKind::FloatValue => write!(f, "float values"),
            MismatchKind::Text => write!(f, "non-float content"),
        }
    }
}

/// Two float values are equal when within `epsilon` of each other.
pub fn floats_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Check one line pair. Returns the mismatch kinds in check order: a float
/// count mismatch short-circuits the line (positional pairing is meaningless
/// then); otherwise value and residual-text checks both run, so a line can
/// report both kinds.
pub fn compare_line(left: &str, right: &str, epsilon: f64) -> Vec<MismatchKind> {
    let lf = scan_floats(left);
    let rf = scan_floats(right);

    if lf.len() != rf.len() {
        return vec![MismatchKind::FloatCount];
    }

    let mut kinds = Vec::new();
    if lf
        .iter()
        .zip(&rf)
        .any(|(a, b)| !floats_equal(a.value, b.value, epsilon))
    {
        kinds.push(MismatchKind::FloatValue);
    }
    if strip_floats(left) != strip_floats(right) {
        kinds.push(MismatchKind::Text);
    }
    kinds
}

fn report_line(kind: MismatchKind, line_num: usize, left: &str, right: &str) {
    println!("Files have different {kind} on line {line_num}");
    println!("  <<<{left}");
    println!("  >>>{right}");
}

/// Compare two files, printing diagnostics to stdout. The returned value is
/// the process exit code.
///
/// Checkpoints in order: stat both files (1 / 2 per argument), byte-size gate
/// (3), line-count gate (4), then per-line float-count (5), float-value (6)
/// and residual-text (7) checks. In `all_lines` mode every mismatching line is
/// reported and the exit code is that of the first mismatch; otherwise the
/// first mismatch terminates the run.
pub fn run_compare(first: &Path, second: &Path, opts: &Options) -> Result<i32> {
    let size_a = match fs::metadata(first) {
        Ok(m) => m.len(),
        Err(_) => {
            println!("ERROR: Could not stat file argument: '{}'", first.display());
            return Ok(EXIT_STAT_FIRST);
        }
    };
    let size_b = match fs::metadata(second) {
        Ok(m) => m.len(),
        Err(_) => {
            println!("ERROR: Could not stat file argument: '{}'", second.display());
            return Ok(EXIT_STAT_SECOND);
        }
    };

    // Heuristic fast-fail; equal sizes prove nothing on their own.
    if size_a != size_b {
        println!("Files have different sizes");
        return Ok(EXIT_SIZE);
    }

    let bytes_a =
        fs::read(first).with_context(|| format!("Failed to read '{}'", first.display()))?;
    let bytes_b =
        fs::read(second).with_context(|| format!("Failed to read '{}'", second.display()))?;

    // Byte-identical files match under any tolerance.
    if bytes_a == bytes_b {
        return Ok(EXIT_MATCH);
    }

    let text_a = decode_text(bytes_a);
    let text_b = decode_text(bytes_b);
    let lines_a = split_lines(&text_a);
    let lines_b = split_lines(&text_b);

    if lines_a.len() != lines_b.len() {
        println!("Files have different line counts");
        return Ok(EXIT_LINE_COUNT);
    }

    let mut first_code = EXIT_MATCH;
    for (idx, (left, right)) in lines_a.iter().zip(&lines_b).enumerate() {
        for kind in compare_line(left, right, opts.epsilon) {
            report_line(kind, idx + 1, left, right);
            if !opts.all_lines {
                return Ok(kind.exit_code());
            }
            if first_code == EXIT_MATCH {
                first_code = kind.exit_code();
            }
        }
    }

    Ok(first_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1.0e-5;

    #[test]
    fn floats_equal_within_epsilon() {
        assert!(floats_equal(1.0, 1.0, EPS));
        assert!(floats_equal(2.0, 2.000001, EPS));
        // Boundary case: difference rounds to just under epsilon in f64.
        assert!(floats_equal(1.00001, 1.00002, EPS));
        assert!(!floats_equal(1.0, 1.1, EPS));
    }

    #[test]
    fn epsilon_is_a_parameter() {
        assert!(!floats_equal(1.0, 1.01, EPS));
        assert!(floats_equal(1.0, 1.01, 0.1));
    }

    #[test]
    fn identical_lines_report_nothing() {
        assert!(compare_line("x 1.5 y", "x 1.5 y", EPS).is_empty());
        assert!(compare_line("", "", EPS).is_empty());
    }

    #[test]
    fn tolerated_difference_reports_nothing() {
        assert!(compare_line("v = 1.00001", "v = 1.00002", EPS).is_empty());
    }

    #[test]
    fn count_mismatch_short_circuits_the_line() {
        assert_eq!(
            compare_line("val 1.0", "val 1.0 2.0", EPS),
            vec![MismatchKind::FloatCount]
        );
    }

    #[test]
    fn value_mismatch_beyond_epsilon() {
        assert_eq!(
            compare_line("v 1.0", "v 1.1", EPS),
            vec![MismatchKind::FloatValue]
        );
    }

    #[test]
    fn residual_text_compared_exactly() {
        assert_eq!(
            compare_line("result: 1.0 ok", "result: 1.0 fail", EPS),
            vec![MismatchKind::Text]
        );
        // Whitespace counts.
        assert_eq!(
            compare_line("a  1.0", "a 1.0", EPS),
            vec![MismatchKind::Text]
        );
    }

    #[test]
    fn bare_integers_are_text_not_floats() {
        assert_eq!(
            compare_line("count 5", "count 6", EPS),
            vec![MismatchKind::Text]
        );
    }

    #[test]
    fn value_and_text_can_both_fire() {
        assert_eq!(
            compare_line("a 1.0", "b 2.0", EPS),
            vec![MismatchKind::FloatValue, MismatchKind::Text]
        );
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(MismatchKind::FloatCount.exit_code(), 5);
        assert_eq!(MismatchKind::FloatValue.exit_code(), 6);
        assert_eq!(MismatchKind::Text.exit_code(), 7);
    }
}
