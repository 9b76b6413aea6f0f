//! Reading interactive input.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or a read error. Read errors
/// are logged at `warn`.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use twentyone_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(&b"  hit \n"[..]);
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read input line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn invalid_utf8_ends_input() {
        let mut input = Cursor::new(&[0xff, 0xfe, b'\n'][..]);
        assert_eq!(read_stdin_line(&mut input), None);
    }

    #[test]
    fn blank_line_is_empty_not_eof() {
        let mut input = Cursor::new(&b"\n"[..]);
        assert_eq!(read_stdin_line(&mut input), Some(String::new()));
    }
}
