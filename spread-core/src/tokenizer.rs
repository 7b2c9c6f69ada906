//! text splitter
//!
//! with tokens `["{a}", "{b}"]`, `Hi {a}, {b}{a}` = `[Static("Hi "), Marker("{a}"), Static(", "),
//! Marker("{b}"), Marker("{a}")]`

/// a tokenizer where the text and token ownership is hold by the caller
pub struct Tokenizer<'a, 't> {
    text: &'a str,
    tokens: &'t [&'t str],
    offset: usize,
    pending: Option<(usize,&'a str)>,
}

impl<'a, 't> Tokenizer<'a, 't> {
    /// create new [`Tokenizer`]
    pub fn new(text: &'a str, tokens: &'t [&'t str]) -> Tokenizer<'a, 't> {
        Tokenizer {
            text,
            tokens,
            offset: 0,
            pending: None,
        }
    }

    /// earliest token occurrence at or after `offset`, ties resolved by token order
    fn locate(&self) -> Option<(usize,&'a str)> {
        let rest = &self.text[self.offset..];
        self.tokens
            .iter()
            .filter_map(|token|rest.find(token).map(|at|(self.offset + at,token.len())))
            .min_by_key(|(at,_)|*at)
            .map(|(at,len)|(at,&self.text[at..at + len]))
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((at,token)) = self.pending.take() {
            self.offset = at + token.len();
            return Some(Token::Marker(token));
        }

        if self.offset >= self.text.len() {
            return None;
        }

        match self.locate() {
            // empty static
            Some((at,token)) if at == self.offset => {
                self.offset = at + token.len();
                Some(Token::Marker(token))
            }
            Some((at,token)) => {
                let statics = &self.text[self.offset..at];
                self.pending = Some((at,token));
                Some(Token::Static(statics))
            }
            None => {
                let statics = &self.text[self.offset..];
                self.offset = self.text.len();
                Some(Token::Static(statics))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Static(&'a str),
    Marker(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Static(val) | Token::Marker(val) => val,
        }
    }
}
