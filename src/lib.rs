// module_name_repetitions is pure style preference (e.g. render::TokenRenderer)
#![allow(clippy::module_name_repetitions)]

//! # Notemark
//!
//! Markdown tokenizer and styled-text renderer for Zettelkasten-style
//! notes.
//!
//! Notemark scans a restricted markdown dialect (headings, bulleted and
//! ordered lists, fenced code blocks, inline code, and links with the
//! `zk:` / `zka:` / `rp:` schemes) into a token stream, then renders the
//! stream to text styled with the terminal UI's inline markup convention.
//! Links are collected into an indexed registry so the UI can make each
//! one an addressable, navigable region.
//!
//! Scanning is lenient by design: there are no parse errors, and
//! malformed input always degrades to plain text.
//!
//! ## Modules
//!
//! - [`document`]: tokenizer, token/link types, and the `render_note`
//!   facade the note viewer calls
//! - [`render`]: stateful token renderer and theme
//!
//! ## Example
//!
//! ```
//! use notemark::prelude::*;
//!
//! let note = render_note(" 1. first\n 1. second\n");
//! assert!(note.text.starts_with(" 01) first"));
//! ```

pub mod document;
pub mod render;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{Link, LinkKind, RenderedNote, Tokenizer, render_note};
    pub use crate::render::{Theme, TokenRenderer};
}
