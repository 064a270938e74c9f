use serde::Serialize;
use uuid::Uuid;

/// Identity of one reported finding
///
/// One key per line that contained at least one simplified character. The
/// line text is captured when the line task starts, so the key stays stable
/// while the underlying file is being rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultKey {
    /// Path of the scanned file
    pub path: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Original line text at detection time, terminator excluded
    pub text: String,
}

/// One suggested replacement within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Traditional form to write
    pub replacement: char,
    /// Character index within the line (0-indexed)
    pub column: usize,
}

/// All suggestions for one line, sorted by column
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub line: usize,
    pub text: String,
    pub suggestions: Vec<Suggestion>,
}

/// Aggregate counters for one file scan or a whole run
///
/// `chars_modified` counts successful disk writes only, so a failed write
/// shows up as `chars_found > chars_modified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounts {
    /// Characters needing change
    pub chars_found: usize,
    /// Files containing changes
    pub files_found: usize,
    /// Characters actually rewritten on disk
    pub chars_modified: usize,
    /// Files actually rewritten on disk
    pub files_modified: usize,
}

impl ScanCounts {
    pub fn is_clean(&self) -> bool {
        self.chars_found == 0
    }
}

impl std::ops::AddAssign for ScanCounts {
    fn add_assign(&mut self, other: Self) {
        self.chars_found += other.chars_found;
        self.files_found += other.files_found;
        self.chars_modified += other.chars_modified;
        self.files_modified += other.files_modified;
    }
}

/// Result of scanning one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the scanned file
    pub path: String,
    /// Total line count, used to right-align line numbers in the report
    pub total_lines: usize,
    /// Byte length of the file when read; replacements are
    /// length-preserving, so this holds after the scan too
    pub len: usize,
    pub counts: ScanCounts,
    /// Findings in first-registration order
    pub findings: Vec<Finding>,
    /// Checksum of the file before any rewrite
    pub checksum_before: String,
    /// Checksum after the scan; present only when something was rewritten
    pub checksum_after: Option<String>,
}

impl FileReport {
    /// Report for a file with nothing to convert
    pub fn clean(path: String, total_lines: usize, len: usize, checksum: String) -> Self {
        Self {
            path,
            total_lines,
            len,
            counts: ScanCounts::default(),
            findings: Vec::new(),
            checksum_before: checksum,
            checksum_after: None,
        }
    }

    /// Format one console line per finding
    ///
    /// Line numbers are right-aligned to the width of the file's total line
    /// count; suggestions are joined in column order.
    pub fn render(&self) -> Vec<String> {
        let width = decimal_width(self.total_lines);
        self.findings
            .iter()
            .map(|finding| {
                let suggestions = finding
                    .suggestions
                    .iter()
                    .map(|s| s.replacement.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "文件 '{}', 第 {:>width$} 行：{} 建议替换为繁体中文：{}",
                    self.path,
                    finding.line,
                    finding.text,
                    suggestions,
                    width = width
                )
            })
            .collect()
    }
}

/// A file whose scan failed entirely (unreadable, invalid UTF-8, ...)
#[derive(Debug, Clone, Serialize)]
pub struct ScanFailure {
    pub path: String,
    pub error: String,
}

/// Whole-run summary, also the `--json` output shape
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub totals: ScanCounts,
    pub files: Vec<FileReport>,
    pub failures: Vec<ScanFailure>,
}

impl RunSummary {
    /// Totals and processed-file listing for the console report
    pub fn render_totals(&self) -> Vec<String> {
        let mut out = vec![
            format!(
                "总计发现 {} 个字需要修改，涉及 {} 个文件。",
                self.totals.chars_found, self.totals.files_found
            ),
            format!(
                "总计修改 {} 个字，涉及 {} 个文件。",
                self.totals.chars_modified, self.totals.files_modified
            ),
            "已处理文件：".to_string(),
        ];
        for report in &self.files {
            out.push(report.path.clone());
        }
        out
    }
}

/// Generate a unique id for one run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

fn decimal_width(n: usize) -> usize {
    n.max(1).to_string().len()
}
