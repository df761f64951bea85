//! Core token and link types.

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Heading with level (1-6)
    Heading,
    /// Inline text, plain or code-formatted
    Text,
    /// Single line break
    Newline,
    /// End of input; repeats forever once reached
    EndOfStream,
    /// Bulleted list item with nesting level (1-3)
    Bullet,
    /// Ordered list item with nesting level (1-3)
    OrderedItem,
    /// Inline link; `text` holds the decimal registry index
    Link,
    /// Fenced code block
    CodeBlock,
}

/// Formatting applied to a `Text` token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// Unstyled text
    #[default]
    Plain,
    /// Inline code span
    Code,
}

/// One classified, positionally-consumed unit of the markdown input.
///
/// Tokens never span a line boundary, except `CodeBlock` which runs from
/// its opening fence to the matching closing fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Heading level 1-6, or list nesting level 1-3; 0 otherwise
    pub level: u8,
    /// Literal content; for `Link` the decimal string of the registry index
    pub text: String,
    /// Inline formatting, meaningful for `Text` only
    pub format: TextFormat,
    /// Fence language annotation, meaningful for `CodeBlock` only
    pub language: String,
}

impl Token {
    /// Create a token with no payload beyond its kind.
    pub fn bare(kind: TokenKind) -> Self {
        Self {
            kind,
            level: 0,
            text: String::new(),
            format: TextFormat::Plain,
            language: String::new(),
        }
    }

    /// Create a token carrying text and a level.
    pub fn with_text(kind: TokenKind, level: u8, text: impl Into<String>) -> Self {
        Self {
            kind,
            level,
            text: text.into(),
            format: TextFormat::Plain,
            language: String::new(),
        }
    }
}

/// Kind of an inline link, classified from its raw target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// External URL (no recognized scheme prefix)
    Url,
    /// `zk:<id>` reference to another note
    ZkNote,
    /// `zka:<filename>` reference to an attachment
    ZkAttachment,
    /// `rp:<name>` reference to a named report
    Report,
    /// Empty or whitespace-only target; rendered but inert
    Empty,
}

/// One `[title](target)` occurrence discovered during tokenization.
///
/// Indices are assigned in document order starting at 0, with no gaps,
/// independent of link kind. The token stream cross-references links by
/// this index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Link kind, classified from the raw target's scheme prefix
    pub kind: LinkKind,
    /// Raw target with the recognized scheme prefix stripped
    pub target: String,
    /// Literal text between the brackets, unprocessed
    pub title: String,
    /// Zero-based discovery-order identifier, stable within one parse
    pub index: usize,
}

/// Classify a raw link target into a kind and its scheme-stripped form.
///
/// An empty or whitespace-only target (after stripping) is `Empty`
/// regardless of prefix, and its target collapses to `""`.
pub fn classify_target(raw: &str) -> (LinkKind, String) {
    let (kind, stripped) = if let Some(rest) = raw.strip_prefix("zk:") {
        (LinkKind::ZkNote, rest)
    } else if let Some(rest) = raw.strip_prefix("zka:") {
        (LinkKind::ZkAttachment, rest)
    } else if let Some(rest) = raw.strip_prefix("rp:") {
        (LinkKind::Report, rest)
    } else {
        (LinkKind::Url, raw)
    };

    if stripped.trim().is_empty() {
        (LinkKind::Empty, String::new())
    } else {
        (kind, stripped.to_string())
    }
}
