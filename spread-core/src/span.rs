use std::ops::Range;

/// source map of a marker token
#[derive(Debug, Clone)]
pub struct Span {
    range: Range<usize>,
}

impl Span {
    pub fn eval<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
    pub fn start(&self) -> usize {
        self.range.start
    }
    pub fn end(&self) -> usize {
        self.range.end
    }
    pub(crate) fn range(range: Range<usize>) -> Self {
        Self { range }
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
    }
}

impl PartialEq<Range<usize>> for Span {
    fn eq(&self, other: &Range<usize>) -> bool {
        &self.range == other
    }
}
