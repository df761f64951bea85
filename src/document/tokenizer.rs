//! Streaming scanner for the restricted note-markdown dialect.
//!
//! The scanner is lenient by construction: there are no parse errors, and
//! every byte of input is eventually consumed as some token, falling back
//! to plain text for anything unrecognized.

use super::types::{Link, TextFormat, Token, TokenKind, classify_target};

/// Pull-based tokenizer over one note body.
///
/// Call [`next_token`](Self::next_token) until it yields
/// [`TokenKind::EndOfStream`]; further calls keep yielding it. Links are
/// collected into an append-only registry as a side effect of scanning and
/// can be inspected at any point via [`links`](Self::links).
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    start_of_line: bool,
    links: Vec<Link>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a note body.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            start_of_line: true,
            links: Vec::new(),
        }
    }

    /// Links discovered up to the current cursor position, in document order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Consume the tokenizer, yielding the full link registry.
    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    /// Advance the cursor by exactly one token's worth of input.
    ///
    /// Rules are tried in fixed priority order and the first match wins;
    /// later rules never preempt earlier ones.
    pub fn next_token(&mut self) -> Token {
        if self.pos >= self.source.len() {
            return Token::bare(TokenKind::EndOfStream);
        }

        if self.rest().starts_with('\n') {
            self.advance(1);
            self.start_of_line = true;
            return Token::bare(TokenKind::Newline);
        }

        if self.start_of_line {
            self.start_of_line = false;

            if let Some(tok) = self.match_heading() {
                return tok;
            }
            if let Some(tok) = self.match_bullet() {
                return tok;
            }
            if let Some(tok) = self.match_ordered_item() {
                return tok;
            }
            if let Some(tok) = self.match_code_fence() {
                return tok;
            }
        }

        if let Some(tok) = self.match_link() {
            return tok;
        }
        if let Some(tok) = self.match_code_span() {
            return tok;
        }

        self.take_plain_text()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    /// Remainder of the current line, excluding its terminating newline.
    fn line_rest(&self) -> &'a str {
        let rest = self.rest();
        match rest.find('\n') {
            Some(idx) => &rest[..idx],
            None => rest,
        }
    }

    /// Remainder of the current line up to the next inline trigger.
    ///
    /// A `[` or a backtick terminates the span only when it occurs past the
    /// first character; a trigger in the leading position belongs to the
    /// link or code-span rule, so the span stays non-empty whenever any
    /// input remains on the line.
    fn scan_span(&self) -> &'a str {
        let mut span = self.line_rest();

        if let Some(idx) = span.find('[')
            && idx > 0
        {
            span = &span[..idx];
        }

        if let Some(first) = span.chars().next() {
            let skip = first.len_utf8();
            if let Some(idx) = span[skip..].find('`') {
                span = &span[..idx + skip];
            }
        }

        span
    }

    /// `#{1..6}` followed by exactly one space, anchored to line start.
    fn match_heading(&mut self) -> Option<Token> {
        let rest = self.rest();
        let hashes = rest.bytes().take_while(|&b| b == b'#').count();
        if !(1..=6).contains(&hashes) || rest.as_bytes().get(hashes) != Some(&b' ') {
            return None;
        }

        self.advance(hashes + 1);
        let text = self.scan_span();
        self.advance(text.len());
        // Run length is bounded by the 1..=6 check above.
        let level = hashes as u8;
        Some(Token::with_text(TokenKind::Heading, level, text))
    }

    /// `-`, `+` or `*` list markers at indent depths 0/2/4, each preceded
    /// by one extra space and followed by one space.
    fn match_bullet(&mut self) -> Option<Token> {
        let bytes = self.rest().as_bytes();
        for (level, pad) in [(1u8, 1usize), (2, 3), (3, 5)] {
            if bytes.len() < pad + 2 {
                continue;
            }
            if bytes[..pad].iter().all(|&b| b == b' ')
                && matches!(bytes[pad], b'-' | b'+' | b'*')
                && bytes[pad + 1] == b' '
            {
                self.advance(pad + 2);
                let text = self.scan_span();
                self.advance(text.len());
                return Some(Token::with_text(TokenKind::Bullet, level, text));
            }
        }
        None
    }

    /// `1.` markers at indent depths 0/2/4. The source always writes the
    /// literal digit 1; actual numbering is computed by the renderer.
    fn match_ordered_item(&mut self) -> Option<Token> {
        let bytes = self.rest().as_bytes();
        for (level, pad) in [(1u8, 1usize), (2, 3), (3, 5)] {
            if bytes.len() < pad + 3 {
                continue;
            }
            if bytes[..pad].iter().all(|&b| b == b' ')
                && &bytes[pad..pad + 3] == b"1. "
            {
                self.advance(pad + 3);
                let text = self.scan_span();
                self.advance(text.len());
                return Some(Token::with_text(TokenKind::OrderedItem, level, text));
            }
        }
        None
    }

    /// Fenced code block opened by 3 or 4 backticks. The closing line must
    /// match the opening fence exactly; an unterminated fence consumes to
    /// the end of input. The closing fence's newline is eaten as part of
    /// the block.
    fn match_code_fence(&mut self) -> Option<Token> {
        let rest = self.rest();
        let fence = if rest.starts_with("````") {
            "````"
        } else if rest.starts_with("```") {
            "```"
        } else {
            return None;
        };

        self.advance(fence.len());
        let language = self.line_rest().to_string();
        self.advance(language.len());
        if self.rest().starts_with('\n') {
            self.advance(1);
        }

        let mut body = String::new();
        while self.pos < self.source.len() {
            let line = self.line_rest();
            self.advance(line.len());
            if self.rest().starts_with('\n') {
                self.advance(1);
            }
            if line == fence {
                break;
            }
            body.push_str(line);
            body.push('\n');
        }

        if body.ends_with('\n') {
            body.pop();
        }

        Some(Token {
            kind: TokenKind::CodeBlock,
            level: 0,
            text: body,
            format: TextFormat::Plain,
            language,
        })
    }

    /// `[title](target)`: all three closing delimiters must appear, in that
    /// relative order, within the rest of the line. On match the link is
    /// appended to the registry and the token carries its decimal index.
    fn match_link(&mut self) -> Option<Token> {
        let line = self.line_rest();
        if !line.starts_with('[') {
            return None;
        }

        let close_bracket = line.find(']')?;
        let open_paren = close_bracket + line[close_bracket..].find('(')?;
        let close_paren = open_paren + line[open_paren..].find(')')?;

        let title = &line[1..close_bracket];
        let (kind, target) = classify_target(&line[open_paren + 1..close_paren]);

        let index = self.links.len();
        self.links.push(Link {
            kind,
            target,
            title: title.to_string(),
            index,
        });

        self.advance(close_paren + 1);
        Some(Token::with_text(TokenKind::Link, 0, index.to_string()))
    }

    /// Inline code span: a backtick with a matching closing backtick before
    /// the next inline trigger on the line.
    fn match_code_span(&mut self) -> Option<Token> {
        if !self.rest().starts_with('`') {
            return None;
        }

        // The boundary scan stops just short of the closing backtick, so
        // the span is confirmed by the character immediately after it.
        let span = self.scan_span();
        if self.source[self.pos + span.len()..].chars().next() != Some('`') {
            return None;
        }

        let text = span[1..].to_string();
        self.advance(span.len() + 1);
        Some(Token {
            kind: TokenKind::Text,
            level: 0,
            text,
            format: TextFormat::Code,
            language: String::new(),
        })
    }

    /// Fallback: consume the rest of the line up to the next inline
    /// trigger as plain text. Never yields an empty token.
    fn take_plain_text(&mut self) -> Token {
        let text = self.scan_span();
        self.advance(text.len());
        Token::with_text(TokenKind::Text, 0, text)
    }
}
