//! Line splitting with end-of-file bookkeeping.
//!
//! A file is viewed as the LF-separated records of its content followed by
//! one synthetic empty read, exactly like piping `content` plus a newline
//! through a line-oriented reader:
//!
//! ```text
//! "x\n"   -> ["x", ""]
//! "x"     -> ["x"]
//! ""      -> [""]
//! "x\n\n" -> ["x", "", ""]
//! ```
//!
//! The final record is therefore empty exactly when the file ends with a
//! line terminator (or is empty).

/// Lines of one file, 1-indexed.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    records: Vec<&'a [u8]>,
    offsets: Vec<usize>,
}

impl<'a> Lines<'a> {
    /// Splits content into records.
    #[must_use]
    pub fn new(content: &'a [u8]) -> Self {
        let mut records = Vec::new();
        let mut offsets = Vec::new();
        let mut offset = 0;

        for record in content.split(|&b| b == b'\n') {
            records.push(record);
            offsets.push(offset);
            offset += record.len() + 1;
        }

        Self { records, offsets }
    }

    /// Number of records, including the synthetic trailing one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.records.len()
    }

    /// Returns a line by its 1-indexed number.
    #[must_use]
    pub fn get(&self, line: usize) -> Option<&'a [u8]> {
        line.checked_sub(1)
            .and_then(|i| self.records.get(i))
            .copied()
    }

    /// Byte offset of the start of a line in the file.
    #[must_use]
    pub fn offset(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|i| self.offsets.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates over `(line_number, line)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a [u8])> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (i + 1, *record))
    }

    /// The final record.
    #[must_use]
    pub fn last(&self) -> &'a [u8] {
        self.records.last().copied().unwrap_or_default()
    }

    /// Whether the content ends with a line terminator (or is empty).
    #[must_use]
    pub fn ends_with_newline(&self) -> bool {
        self.last().is_empty()
    }

    /// Line count after accounting for a missing final terminator.
    ///
    /// A file without a trailing LF is treated as if the terminator were
    /// there, which adds the empty record the reader would have seen.
    #[must_use]
    pub fn effective_line_count(&self) -> usize {
        if self.ends_with_newline() {
            self.line_count()
        } else {
            self.line_count() + 1
        }
    }

    /// The line immediately before the (effective) last record.
    ///
    /// Returns `None` when the file is a single empty record.
    #[must_use]
    pub fn line_before_last(&self) -> Option<(usize, &'a [u8])> {
        let line = self.effective_line_count().checked_sub(1)?;
        self.get(line).map(|content| (line, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terminated() {
        let lines = Lines::new(b"a\nbc\n");
        assert_eq!(lines.line_count(), 3);
        assert_eq!(lines.get(1), Some(&b"a"[..]));
        assert_eq!(lines.get(2), Some(&b"bc"[..]));
        assert_eq!(lines.get(3), Some(&b""[..]));
        assert_eq!(lines.get(0), None);
        assert!(lines.ends_with_newline());
    }

    #[test]
    fn test_split_unterminated() {
        let lines = Lines::new(b"x");
        assert_eq!(lines.line_count(), 1);
        assert!(!lines.ends_with_newline());
        assert_eq!(lines.effective_line_count(), 2);
        assert_eq!(lines.line_before_last(), Some((1, &b"x"[..])));
    }

    #[test]
    fn test_empty_file() {
        let lines = Lines::new(b"");
        assert_eq!(lines.line_count(), 1);
        assert!(lines.ends_with_newline());
        assert_eq!(lines.line_before_last(), None);
    }

    #[test]
    fn test_line_before_last_blank() {
        let lines = Lines::new(b"x\n\n");
        assert_eq!(lines.line_before_last(), Some((2, &b""[..])));
    }

    #[test]
    fn test_offsets() {
        let lines = Lines::new(b"ab\ncde\nf");
        assert_eq!(lines.offset(1), 0);
        assert_eq!(lines.offset(2), 3);
        assert_eq!(lines.offset(3), 7);
        assert_eq!(lines.offset(9), 0);
    }

    #[test]
    fn test_iter_numbers_from_one() {
        let lines = Lines::new(b"a\nb");
        let numbered: Vec<usize> = lines.iter().map(|(n, _)| n).collect();
        assert_eq!(numbered, vec![1, 2]);
    }
}
