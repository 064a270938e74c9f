use std::path::Path;

use walkdir::WalkDir;

use crate::convert::Converter;
use crate::report::{FileReport, ScanCounts, ScanFailure};
use crate::scan::scan_file;

/// Result of scanning a directory tree
#[derive(Debug)]
pub struct DirectoryScan {
    /// Per-file reports in walk order
    pub reports: Vec<FileReport>,
    /// Files whose scan failed entirely
    pub failures: Vec<ScanFailure>,
    /// Counters summed across all scanned files
    pub totals: ScanCounts,
}

/// Case-insensitive suffix match against the extension allow-list
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Walk a directory tree and scan every matching file
///
/// Files are processed sequentially; concurrency lives inside each file's
/// scan. Each file runs inside its own failure boundary: an unreadable or
/// non-UTF-8 file is logged and recorded, and the walk continues.
pub fn scan_directory<P: AsRef<Path>>(
    root: P,
    extensions: &[String],
    converter: &Converter,
) -> DirectoryScan {
    let mut reports = Vec::new();
    let mut failures = Vec::new();
    let mut totals = ScanCounts::default();

    for entry in WalkDir::new(root.as_ref()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "directory entry skipped");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches_extension(entry.path(), extensions) {
            continue;
        }

        match scan_file(entry.path(), converter) {
            Ok(report) => {
                totals += report.counts;
                reports.push(report);
            }
            Err(err) => {
                tracing::warn!(file = %entry.path().display(), error = %err, "file scan failed");
                failures.push(ScanFailure {
                    path: entry.path().display().to_string(),
                    error: err.to_string(),
                });
            }
        }
    }

    DirectoryScan {
        reports,
        failures,
        totals,
    }
}
