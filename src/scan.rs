use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::convert::{Converter, contains_cjk};
use crate::file::{FileError, read_file, replace_char_in_file, strip_terminator};
use crate::report::{FileReport, Finding, ResultKey, ScanCounts, Suggestion};

/// Shared bookkeeping for one file scan
///
/// Created fresh per scan and torn down after report assembly. Line tasks
/// never share a `ResultKey` (keys are line-scoped), so the maps only need
/// short lock holds; `io_lock` is the coarse lock that serializes every
/// read-modify-write cycle against the file.
struct ScanState {
    /// Result keys in first-registration order
    findings: Mutex<Vec<ResultKey>>,
    /// Suggestions accumulated per key
    suggestions: Mutex<HashMap<ResultKey, Vec<Suggestion>>>,
    /// Line numbers already registered, one key per line
    printed_lines: Mutex<HashSet<usize>>,
    /// Guards all disk writes to the file under scan
    io_lock: Mutex<()>,
    /// Successful character writes
    chars_modified: AtomicUsize,
}

impl ScanState {
    fn new() -> Self {
        Self {
            findings: Mutex::new(Vec::new()),
            suggestions: Mutex::new(HashMap::new()),
            printed_lines: Mutex::new(HashSet::new()),
            io_lock: Mutex::new(()),
            chars_modified: AtomicUsize::new(0),
        }
    }
}

/// Process one line of one file
///
/// Walks the character sequence captured at fan-out time. For every
/// character whose converted form differs: registers the line's `ResultKey`
/// (first qualifying character only), records the suggestion, and rewrites
/// that single character on disk under the I/O lock.
///
/// Column indices refer to the captured sequence, not the current on-disk
/// content. The oracle guarantees one-character-to-one-character
/// replacement, so indices stay valid while sibling characters of the same
/// line are rewritten in arbitrary order.
///
/// A write failure aborts the rest of this line; suggestions recorded so
/// far stay in the report.
fn process_line(
    path: &Path,
    display_path: &str,
    line_num: usize,
    chars: &[char],
    converter: &Converter,
    state: &ScanState,
) -> Result<(), FileError> {
    for (column, &ch) in chars.iter().enumerate() {
        if !converter.needs_conversion(ch) {
            continue;
        }

        let key = ResultKey {
            path: display_path.to_string(),
            line: line_num,
            text: chars.iter().collect(),
        };

        {
            let mut printed = state.printed_lines.lock().unwrap();
            if printed.insert(line_num) {
                state.findings.lock().unwrap().push(key.clone());
            }
        }

        let replacement = converter.convert_char(ch);
        state
            .suggestions
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push(Suggestion {
                replacement,
                column,
            });

        {
            let _io = state.io_lock.lock().unwrap();
            replace_char_in_file(path, line_num, column, replacement)?;
        }
        state.chars_modified.fetch_add(1, Ordering::Relaxed);
    }
    Ok(())
}

/// Scan one file, rewriting simplified characters in place
///
/// 1. Reads the file (UTF-8 validated, checksummed). Files without any CJK
///    ideograph return a clean report without spawning anything.
/// 2. Fans the lines out over a bounded pool of scoped worker threads fed
///    by a channel, one task per line.
/// 3. Joins all tasks; a failed line task is logged and does not abort its
///    siblings.
/// 4. Assembles findings in first-registration order with suggestions
///    sorted by column, plus the four counters.
///
/// # Returns
/// * `Ok(FileReport)` - Findings, counters and before/after checksums
/// * `Err(FileError)` - The file itself could not be read
pub fn scan_file<P: AsRef<Path>>(path: P, converter: &Converter) -> Result<FileReport, FileError> {
    let path_ref = path.as_ref();
    let file = read_file(path_ref)?;

    let total_lines = file.content.split_inclusive('\n').count();
    if !contains_cjk(&file.content) {
        tracing::debug!(file = %file.path, "no CJK ideographs, skipping");
        return Ok(FileReport::clean(
            file.path,
            total_lines,
            file.len,
            file.checksum,
        ));
    }

    let jobs: Vec<(usize, Vec<char>)> = file
        .content
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, raw)| (idx + 1, strip_terminator(raw).chars().collect()))
        .collect();

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(jobs.len())
        .max(1);

    let (tx, rx) = crossbeam_channel::unbounded();
    for job in jobs {
        tx.send(job).expect("receiver held until workers finish");
    }
    drop(tx);

    let state = ScanState::new();
    thread::scope(|s| {
        for _ in 0..workers {
            let rx = rx.clone();
            let state = &state;
            let display_path = file.path.as_str();
            s.spawn(move || {
                for (line_num, chars) in rx.iter() {
                    if let Err(err) =
                        process_line(path_ref, display_path, line_num, &chars, converter, state)
                    {
                        tracing::warn!(
                            file = display_path,
                            line = line_num,
                            error = %err,
                            "line task failed"
                        );
                    }
                }
            });
        }
    });

    let keys = state.findings.into_inner().unwrap();
    let mut suggestion_map = state.suggestions.into_inner().unwrap();
    let chars_modified = state.chars_modified.into_inner();

    let mut findings = Vec::with_capacity(keys.len());
    for key in keys {
        let mut suggestions = suggestion_map.remove(&key).unwrap_or_default();
        suggestions.sort_by_key(|s| s.column);
        suggestions.dedup_by_key(|s| s.column);
        findings.push(Finding {
            line: key.line,
            text: key.text,
            suggestions,
        });
    }

    let chars_found: usize = findings.iter().map(|f| f.suggestions.len()).sum();
    let counts = ScanCounts {
        chars_found,
        files_found: usize::from(chars_found > 0),
        chars_modified,
        files_modified: usize::from(chars_modified > 0),
    };

    let checksum_after = if chars_modified > 0 {
        Some(read_file(path_ref)?.checksum)
    } else {
        None
    };

    Ok(FileReport {
        path: file.path,
        total_lines,
        len: file.len,
        counts,
        findings,
        checksum_before: file.checksum,
        checksum_after,
    })
}
