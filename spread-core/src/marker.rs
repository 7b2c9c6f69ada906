//! The [`Marker`] type and its parser.
//!
//! `Hello {?user.name}` = `Marker { token: "{?user.name}", name: "user.name", optional: true }`
use crate::Span;

/// A named placeholder declared by a token in the source.
///
/// Markers sharing a name are the same logical variable, only the first occurrence is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    token: Box<str>,
    name: Box<str>,
    optional: bool,
    segments: Box<[Box<str>]>,
    span: Span,
}

impl Marker {
    fn new(token: &str, optional: bool, span: Span) -> Marker {
        let name = token[1 + optional as usize..token.len() - 1].to_owned().into_boxed_str();
        let segments = name.split('.').map(Into::into).collect();
        Marker { token: token.into(), name, optional, segments, span }
    }

    /// Collect markers in `source`, deduplicated by name, in first occurrence order.
    pub fn parse(source: &str) -> Vec<Marker> {
        let mut markers: Vec<Marker> = vec![];

        for (start,end) in Scanner::new(source) {
            let marker = Marker::new(&source[start..end], source.as_bytes()[start + 1] == b'?', Span::range(start..end));
            if markers.iter().any(|e|e.name == marker.name) {
                continue;
            }
            markers.push(marker);
        }

        markers
    }

    /// Returns `true` if `value` is a valid name segment.
    ///
    /// A segment starts with an ascii lowercase letter, followed by ascii word characters.
    pub fn is_segment(value: &str) -> bool {
        match value.as_bytes() {
            [lead, rest @ ..] => lead.is_ascii_lowercase() && rest.iter().all(|e|is_word(*e)),
            [] => false,
        }
    }

    /// The literal token, e.g. `{?a.b}`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The dotted name, e.g. `a.b`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Path into the data map.
    pub fn segments(&self) -> &[Box<str>] {
        &self.segments
    }

    /// The first segment, which is the top level data key.
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// Location of the first occurrence.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Select attribute values containing the token.
    pub fn attr_selector(&self) -> Selector<'_> {
        Selector::Attr(&self.token)
    }

    /// Select text nodes containing the token.
    pub fn text_selector(&self) -> Selector<'_> {
        Selector::Text(&self.token)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

// ===== Selector =====

/// A query locating a token inside a markup tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// attribute values containing the token
    Attr(&'a str),
    /// text nodes containing the token
    Text(&'a str),
}

impl<'a> Selector<'a> {
    pub fn token(&self) -> &'a str {
        match self {
            Selector::Attr(token) | Selector::Text(token) => token,
        }
    }

    /// Returns `true` if `content` contains the token.
    pub fn matches(&self, content: &str) -> bool {
        content.contains(self.token())
    }
}

// ===== Scanner =====

/// Yields the byte range of each token, non overlapping, left to right.
struct Scanner<'a> {
    source: &'a [u8],
    index: usize,
    state: ScanState,
}

enum ScanState {
    Static,
    Open { start: usize },
    Lead { start: usize },
    Segment { start: usize },
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self { source: source.as_bytes(), index: 0, state: ScanState::Static }
    }
}

impl Iterator for Scanner<'_> {
    type Item = (usize,usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.index;
            let byte = *self.source.get(current)?;
            self.index += 1;

            match self.state {
                ScanState::Static => {
                    if byte == b'{' {
                        self.state = ScanState::Open { start: current };
                    }
                }
                ScanState::Open { start } => match byte {
                    b'?' => self.state = ScanState::Lead { start },
                    b'a'..=b'z' => self.state = ScanState::Segment { start },
                    _ => self.restart(start),
                }
                ScanState::Lead { start } => match byte {
                    b'a'..=b'z' => self.state = ScanState::Segment { start },
                    _ => self.restart(start),
                }
                ScanState::Segment { start } => match byte {
                    b'.' => self.state = ScanState::Lead { start },
                    b'}' => {
                        self.state = ScanState::Static;
                        return Some((start,current + 1));
                    }
                    _ if is_word(byte) => {}
                    _ => self.restart(start),
                }
            }
        }
    }
}

impl Scanner<'_> {
    /// failed match resume right after the opening brace
    fn restart(&mut self, start: usize) {
        self.index = start + 1;
        self.state = ScanState::Static;
    }
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
