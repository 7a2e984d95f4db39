/// Precomputed byte-offset → line-number mapping for one source file.
///
/// All line numbers are 1-based, matching what editors and the outline
/// consumers expect.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line containing the given byte offset. Offsets past the end
    /// of the file clamp to the last line.
    pub fn line(&self, offset: usize) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_is_one() {
        let index = LineIndex::new("package main\n");
        assert_eq!(index.line(0), 1);
        assert_eq!(index.line(11), 1);
    }

    #[test]
    fn offsets_after_newlines() {
        let source = "a\nbb\nccc\n";
        let index = LineIndex::new(source);
        assert_eq!(index.line(0), 1);
        assert_eq!(index.line(2), 2);
        assert_eq!(index.line(3), 2);
        assert_eq!(index.line(5), 3);
        assert_eq!(index.line(8), 3);
    }

    #[test]
    fn offset_past_end_clamps() {
        let index = LineIndex::new("x\ny");
        assert_eq!(index.line(100), 2);
    }

    #[test]
    fn empty_source() {
        let index = LineIndex::new("");
        assert_eq!(index.line(0), 1);
    }
}
