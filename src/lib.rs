// Conversion oracle module
pub mod convert;

// File operations module
pub mod file;

// Result bookkeeping and presentation module
pub mod report;

// Concurrent per-line scan engine
pub mod scan;

// Directory walk module
pub mod walk;

// Re-exports
pub use convert::{Converter, contains_cjk};
pub use file::{FileContent, FileError, read_file, replace_char_in_file, strip_terminator};
pub use report::{
    FileReport, Finding, ResultKey, RunSummary, ScanCounts, ScanFailure, Suggestion,
    generate_run_id,
};
pub use scan::scan_file;
pub use walk::{DirectoryScan, matches_extension, scan_directory};
