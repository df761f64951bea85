//! Note-body markdown tokenizing and link extraction.
//!
//! This module handles:
//! - Scanning the restricted note-markdown dialect into a token stream
//! - Collecting inline links into an indexed registry
//! - Driving the renderer loop for whole note bodies

mod tokenizer;
mod types;

pub use tokenizer::Tokenizer;
pub use types::{Link, LinkKind, TextFormat, Token, TokenKind, classify_target};

use tracing::debug;

use crate::render::TokenRenderer;

/// A note body rendered to terminal markup, plus the links it contains.
///
/// The UI resolves link activation through `links`: each entry's kind and
/// target decide whether to open a URL, navigate to a note, open an
/// attachment, or open a named report. Entries line up with the `["id"]`
/// region markers embedded in `text`.
#[derive(Debug, Clone, Default)]
pub struct RenderedNote {
    /// Styled text in the terminal's inline markup convention
    pub text: String,
    /// Links in discovery order, indexed by the region ids in `text`
    pub links: Vec<Link>,
}

/// Render a note body to styled terminal markup.
///
/// A fresh tokenizer/renderer pair is constructed per call; no state is
/// shared across invocations. This never fails: malformed markdown
/// degrades to plain text.
///
/// # Example
///
/// ```
/// use notemark::document::render_note;
///
/// let note = render_note("# Inbox\n - review [draft](zk:204)\n");
/// assert!(note.text.contains("Inbox"));
/// assert_eq!(note.links.len(), 1);
/// assert_eq!(note.links[0].target, "204");
/// ```
pub fn render_note(source: &str) -> RenderedNote {
    let mut renderer = TokenRenderer::new(Tokenizer::new(source));
    let mut text = String::with_capacity(source.len());
    while !renderer.at_end() {
        text.push_str(&renderer.parse_token());
    }
    let links = renderer.into_links();

    debug!(
        source_bytes = source.len(),
        rendered_bytes = text.len(),
        links = links.len(),
        "rendered note body"
    );

    RenderedNote { text, links }
}
