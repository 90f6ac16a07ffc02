//
// lib.rs
// floatdiff
//
// Library entry that re-exports modules so the binary and tests can access
// CLI parsing, the float token scanner, and the tolerant comparison driver.
//
pub mod cli;
pub mod compare;
pub mod scanner;
pub mod utils;

pub use cli::{build_options, Args, Options, DEFAULT_EPSILON};
pub use compare::{compare_line, floats_equal, run_compare, MismatchKind};
pub use scanner::{scan_floats, strip_floats, FloatToken};
