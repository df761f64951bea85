//! Token-to-styled-text rendering.
//!
//! [`TokenRenderer`] consumes the tokenizer one token at a time, tracking
//! ordered-list numbering and blank-line boundaries, and emits one styled
//! fragment per token. Rendering never fails: an unresolvable link index
//! degrades to an empty fragment.

mod style;

pub use style::{COLOR_RESET, REGION_CLOSE, STYLE_RESET, Theme};

use crate::document::{TextFormat, Token, TokenKind, Tokenizer};

/// Stateful renderer over one tokenizer.
///
/// Drive it with the pull loop the note viewer uses:
///
/// ```
/// use notemark::document::Tokenizer;
/// use notemark::render::TokenRenderer;
///
/// let mut renderer = TokenRenderer::new(Tokenizer::new("# Title\n"));
/// let mut out = String::new();
/// while !renderer.at_end() {
///     out.push_str(&renderer.parse_token());
/// }
/// assert!(out.contains("Title"));
/// ```
#[derive(Debug)]
pub struct TokenRenderer<'a> {
    tokenizer: Tokenizer<'a>,
    theme: Theme,
    at_end: bool,
    /// Running ordered-list counters for nesting levels 1-3.
    ordinals: [u32; 3],
    last_was_newline: bool,
}

impl<'a> TokenRenderer<'a> {
    /// Create a renderer over a tokenizer with the default theme.
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self::with_theme(tokenizer, Theme::default())
    }

    /// Create a renderer with an explicit theme.
    pub fn with_theme(tokenizer: Tokenizer<'a>, theme: Theme) -> Self {
        Self {
            tokenizer,
            theme,
            at_end: false,
            ordinals: [0; 3],
            last_was_newline: false,
        }
    }

    /// True once the end-of-stream token has been consumed.
    pub const fn at_end(&self) -> bool {
        self.at_end
    }

    /// Consume the renderer, yielding the tokenizer's link registry.
    pub fn into_links(self) -> Vec<crate::document::Link> {
        self.tokenizer.into_links()
    }

    /// Pull one token and return its styled fragment.
    pub fn parse_token(&mut self) -> String {
        let tok = self.tokenizer.next_token();
        let after_newline = self.last_was_newline;
        self.last_was_newline = tok.kind == TokenKind::Newline;

        match tok.kind {
            TokenKind::EndOfStream => {
                self.at_end = true;
                String::new()
            }

            TokenKind::Newline => {
                // A blank line ends any in-progress numbering run.
                if after_newline {
                    self.ordinals = [0; 3];
                }
                "\n".to_string()
            }

            TokenKind::Heading => self.theme.heading_line(&tok.text),

            TokenKind::Bullet => self.theme.bullet_item(tok.level, &tok.text),

            TokenKind::OrderedItem => self.ordered_item(&tok),

            TokenKind::Text => match tok.format {
                TextFormat::Plain if tok.text.is_empty() => {
                    // A degenerate empty emission means the tokenizer is
                    // stuck; stop pulling rather than loop forever.
                    self.at_end = true;
                    String::new()
                }
                TextFormat::Plain => tok.text,
                TextFormat::Code => self.theme.inline_code_span(&tok.text),
            },

            TokenKind::Link => self.link_region(&tok.text),

            TokenKind::CodeBlock => {
                let mut out = self.theme.code_block_body(&tok.text);
                out.push('\n');
                out
            }
        }
    }

    /// Number an ordered item, coercing missing parent levels to 1 so an
    /// orphaned sub-item still renders a full ordinal path.
    fn ordered_item(&mut self, tok: &Token) -> String {
        match tok.level {
            1 => {
                self.ordinals[0] += 1;
                self.ordinals[1] = 0;
                self.ordinals[2] = 0;
                format!(" {:02}) {}", self.ordinals[0], tok.text)
            }
            2 => {
                if self.ordinals[0] == 0 {
                    self.ordinals[0] = 1;
                }
                self.ordinals[1] += 1;
                self.ordinals[2] = 0;
                format!(
                    " {:02}.{:02}) {}",
                    self.ordinals[0], self.ordinals[1], tok.text
                )
            }
            3 => {
                if self.ordinals[0] == 0 {
                    self.ordinals[0] = 1;
                }
                if self.ordinals[1] == 0 {
                    self.ordinals[1] = 1;
                }
                self.ordinals[2] += 1;
                format!(
                    " {:02}.{:02}.{:02}) {}",
                    self.ordinals[0], self.ordinals[1], self.ordinals[2], tok.text
                )
            }
            _ => tok.text.clone(),
        }
    }

    /// Resolve a link token's registry index and render the addressable
    /// region. An index with no registry entry yields nothing.
    fn link_region(&self, index_text: &str) -> String {
        index_text
            .parse::<usize>()
            .ok()
            .and_then(|index| self.tokenizer.links().get(index))
            .map(|link| self.theme.link_region(link))
            .unwrap_or_default()
    }
}
