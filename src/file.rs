use std::fs;
use std::io;
use std::path::Path;

use blake3;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path to the file as displayed in reports
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Error types for file operations
#[derive(Debug)]
pub enum FileError {
    NotFound(String),
    IoError(String),
    InvalidUtf8(String),
    /// The target line no longer exists (file changed externally mid-scan)
    LineOutOfRange { line: usize, total: usize },
    /// The target column no longer exists within the line
    ColumnOutOfRange { line: usize, column: usize },
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::NotFound(p) => write!(f, "File not found: {}", p),
            FileError::IoError(e) => write!(f, "I/O error: {}", e),
            FileError::InvalidUtf8(p) => write!(f, "Invalid UTF-8 in file: {}", p),
            FileError::LineOutOfRange { line, total } => {
                write!(f, "Line {} out of range (file has {} lines)", line, total)
            }
            FileError::ColumnOutOfRange { line, column } => {
                write!(f, "Column {} out of range on line {}", column, line)
            }
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        FileError::IoError(err.to_string())
    }
}

/// Read a file from disk with UTF-8 validation
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(FileContent)` - File content with BLAKE3 checksum
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(FileError::NotFound(path_ref.display().to_string()));
    }

    let bytes = fs::read(path_ref)?;

    let content = String::from_utf8(bytes)
        .map_err(|_| FileError::InvalidUtf8(path_ref.display().to_string()))?;

    let len = content.len();
    let checksum = blake3::hash(content.as_bytes()).to_hex().to_string();

    Ok(FileContent {
        path: path_ref.display().to_string(),
        content,
        len,
        checksum,
    })
}

/// Strip the line terminator (`\n` or `\r\n`) from one raw line
pub fn strip_terminator(raw: &str) -> &str {
    let no_lf = raw.strip_suffix('\n').unwrap_or(raw);
    no_lf.strip_suffix('\r').unwrap_or(no_lf)
}

/// Replace the character at `column` of 1-based line `line_num` directly on disk
///
/// Performs one full read-modify-write cycle: re-reads the file, splits it
/// into lines with their terminators intact, overwrites the single character,
/// and writes everything back. Callers serialize invocations per file with a
/// mutex; the cycle itself must never observe a half-written file.
///
/// The column index counts characters of the line excluding its terminator,
/// matching the sequence captured when the line task was fanned out. Because
/// every replacement is exactly one character for one character, indices
/// recorded against the original line stay valid as sibling characters on
/// the same line are rewritten.
///
/// # Returns
/// * `Ok(())` - Character written
/// * `Err(FileError)` - I/O failure, or the line/column vanished because the
///   file was modified externally between capture and write
pub fn replace_char_in_file<P: AsRef<Path>>(
    path: P,
    line_num: usize,
    column: usize,
    replacement: char,
) -> Result<(), FileError> {
    let path_ref = path.as_ref();
    let file = read_file(path_ref)?;

    let mut lines: Vec<&str> = file.content.split_inclusive('\n').collect();
    if line_num == 0 || line_num > lines.len() {
        return Err(FileError::LineOutOfRange {
            line: line_num,
            total: lines.len(),
        });
    }

    let raw = lines[line_num - 1];
    let body = strip_terminator(raw);
    let terminator = &raw[body.len()..];

    let mut chars: Vec<char> = body.chars().collect();
    if column >= chars.len() {
        return Err(FileError::ColumnOutOfRange {
            line: line_num,
            column,
        });
    }
    chars[column] = replacement;

    let mut rebuilt: String = chars.into_iter().collect();
    rebuilt.push_str(terminator);

    lines[line_num - 1] = &rebuilt;
    let new_content: String = lines.concat();

    fs::write(path_ref, new_content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_file_valid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("valid.txt");
        let content = "Hello, world!\n这是一行。\n";
        fs::write(&file_path, content.as_bytes()).unwrap();

        let result = read_file(&file_path).unwrap();

        assert_eq!(result.content, content);
        assert_eq!(result.len, content.len());
        assert_eq!(result.path, file_path.display().to_string());
        assert!(!result.checksum.is_empty());
        assert!(result.checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("invalid.txt");
        fs::write(&file_path, [0xFF, 0xFE, 0xFD]).unwrap();

        match read_file(&file_path) {
            Err(FileError::InvalidUtf8(p)) => {
                assert_eq!(p, file_path.display().to_string());
            }
            other => panic!("Expected FileError::InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_not_found() {
        let result = read_file("/nonexistent/path/that/does/not/exist.txt");

        match result {
            Err(FileError::NotFound(p)) => assert!(p.contains("nonexistent")),
            other => panic!("Expected FileError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("abc\n"), "abc");
        assert_eq!(strip_terminator("abc\r\n"), "abc");
        assert_eq!(strip_terminator("abc"), "abc");
        assert_eq!(strip_terminator("\n"), "");
    }

    #[test]
    fn test_replace_char_preserves_length() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "第一行\n这是第二行\n").unwrap();
        let before = fs::metadata(&file_path).unwrap().len();

        replace_char_in_file(&file_path, 2, 0, '這').unwrap();

        let after = fs::read_to_string(&file_path).unwrap();
        assert_eq!(after, "第一行\n這是第二行\n");
        assert_eq!(fs::metadata(&file_path).unwrap().len(), before);
    }

    #[test]
    fn test_replace_char_preserves_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("crlf.txt");
        fs::write(&file_path, "abc\r\n测xyz\r\n").unwrap();

        replace_char_in_file(&file_path, 2, 0, '測').unwrap();

        let after = fs::read_to_string(&file_path).unwrap();
        assert_eq!(after, "abc\r\n測xyz\r\n");
    }

    #[test]
    fn test_replace_char_no_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("notail.txt");
        fs::write(&file_path, "x测y").unwrap();

        replace_char_in_file(&file_path, 1, 1, '測').unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "x測y");
    }

    #[test]
    fn test_replace_char_line_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("short.txt");
        fs::write(&file_path, "only one line\n").unwrap();

        match replace_char_in_file(&file_path, 5, 0, '測') {
            Err(FileError::LineOutOfRange { line: 5, total: 1 }) => {}
            other => panic!("Expected LineOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_replace_char_column_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("narrow.txt");
        fs::write(&file_path, "ab\n").unwrap();

        match replace_char_in_file(&file_path, 1, 7, '測') {
            Err(FileError::ColumnOutOfRange { line: 1, column: 7 }) => {}
            other => panic!("Expected ColumnOutOfRange, got {:?}", other),
        }
    }
}
