//! Line unfolding over a byte source.
//!
//! vCard folds long lines by inserting CRLF followed by one folding marker
//! (RFC 6350 §3.2). Besides space and tab, `=` and `;` continue a line, as
//! written by some 2.1 exporters.

use std::io::Read;
use std::iter::Peekable;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

fn is_fold_marker(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'=' | b';')
}

/// Lazily yields logical lines from a byte source.
///
/// A physical line ends at CR, CRLF or a bare LF. Only a CRLF directly
/// followed by a folding marker continues the line; that single marker is
/// dropped. Lines are decoded as UTF-8, replacing invalid sequences.
#[derive(Debug)]
pub struct LineUnfolder<I: Iterator<Item = u8>> {
    bytes: Peekable<I>,
}

impl<I: Iterator<Item = u8>> LineUnfolder<I> {
    #[must_use]
    pub fn new(bytes: I) -> Self {
        Self {
            bytes: bytes.peekable(),
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for LineUnfolder<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = Vec::new();

        loop {
            match self.bytes.next() {
                None if line.is_empty() => return None,
                None => break,
                Some(CR) => {
                    if self.bytes.next_if_eq(&LF).is_some()
                        && self.bytes.next_if(|b| is_fold_marker(*b)).is_some()
                    {
                        continue;
                    }
                    break;
                }
                Some(LF) => break,
                Some(byte) => line.push(byte),
            }
        }

        Some(String::from_utf8_lossy(&line).into_owned())
    }
}

/// Unfolds an in-memory document.
#[must_use]
pub fn unfold_str(input: &str) -> LineUnfolder<std::str::Bytes<'_>> {
    LineUnfolder::new(input.bytes())
}

/// Byte source over a reader that stops at the first I/O error.
///
/// The error is kept so the caller can report it once scanning is done.
#[derive(Debug)]
pub struct ReadBytes<R: Read> {
    bytes: std::io::Bytes<std::io::BufReader<R>>,
    error: Option<std::io::Error>,
}

impl<R: Read> ReadBytes<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            bytes: std::io::BufReader::new(reader).bytes(),
            error: None,
        }
    }

    /// Takes the I/O error that ended the source, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }
}

impl<R: Read> Iterator for ReadBytes<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<String> {
        unfold_str(input).collect()
    }

    #[test]
    fn splits_on_crlf() {
        assert_eq!(lines("A:1\r\nB:2\r\n"), vec!["A:1", "B:2"]);
    }

    #[test]
    fn unfolds_space_continuation() {
        assert_eq!(
            lines("NOTE:This is a long\r\n  description\r\nFN:x"),
            vec!["NOTE:This is a long description", "FN:x"]
        );
    }

    #[test]
    fn consumes_exactly_one_marker() {
        assert_eq!(lines("A:1\r\n\t\tB"), vec!["A:1\tB"]);
        assert_eq!(lines("ADR:;;42\r\n;Plantation"), vec!["ADR:;;42Plantation"]);
        assert_eq!(lines("NOTE:a=\r\n=3D"), vec!["NOTE:a=3D"]);
    }

    #[test]
    fn bare_line_breaks_end_lines() {
        assert_eq!(lines("A:1\nB:2\rC:3"), vec!["A:1", "B:2", "C:3"]);
    }

    #[test]
    fn bare_lf_does_not_fold() {
        assert_eq!(lines("A:1\n B"), vec!["A:1", " B"]);
    }

    #[test]
    fn final_line_without_terminator() {
        assert_eq!(lines("A:1\r\nB:2"), vec!["A:1", "B:2"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn fold_at_end_of_input() {
        assert_eq!(lines("A:1\r\n "), vec!["A:1"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let unfolded: Vec<String> = LineUnfolder::new(b"FN:\xFFx\r\n".iter().copied()).collect();
        assert_eq!(unfolded, vec!["FN:\u{FFFD}x"]);
    }

    #[test]
    fn multibyte_fold() {
        assert_eq!(lines("NOTE:日本\r\n 語"), vec!["NOTE:日本語"]);
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::other("connection reset"));
            }
            self.served = true;
            let data = b"FN:x\r\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn read_bytes_keeps_first_error() {
        let mut bytes = ReadBytes::new(FailingReader { served: false });
        let unfolded: Vec<String> = LineUnfolder::new(&mut bytes).collect();
        assert_eq!(unfolded, vec!["FN:x"]);
        assert!(bytes.take_error().is_some());
        assert!(bytes.take_error().is_none());
    }
}
