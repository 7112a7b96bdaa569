use std::io::BufRead;

/// Reads one line at a time from an interactive input stream.
///
/// The buffer grows as needed, so there is no upper bound on line length.
pub struct LineReader<R> {
    source: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Blocks until a full line is available.
    ///
    /// Returns `Ok(Some(line))` with the trailing line terminator stripped,
    /// or `Ok(None)` once the stream is exhausted.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.source.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let mut reader = LineReader::new(Cursor::new("help\ncd /tmp\nexit\n"));

        assert_eq!(reader.read_line().unwrap(), Some("help".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("cd /tmp".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("exit".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut reader = LineReader::new(Cursor::new("exit"));

        assert_eq!(reader.read_line().unwrap(), Some("exit".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_strips_crlf() {
        let mut reader = LineReader::new(Cursor::new("help\r\n"));
        assert_eq!(reader.read_line().unwrap(), Some("help".to_string()));
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut reader = LineReader::new(Cursor::new("\nexit\n"));

        assert_eq!(reader.read_line().unwrap(), Some(String::new()));
        assert_eq!(reader.read_line().unwrap(), Some("exit".to_string()));
    }

    #[test]
    fn test_long_lines_are_not_truncated() {
        let long = "x".repeat(64 * 1024);
        let mut reader = LineReader::new(Cursor::new(format!("{}\n", long)));

        assert_eq!(reader.read_line().unwrap(), Some(long));
    }
}
