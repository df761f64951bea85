//! Theming for rendered tokens.
//!
//! Output uses the inline markup convention understood by the terminal
//! collaborator: `[color::attribute]`...`[-:-:-]` for style spans and
//! `["id"]`...`[""]` for addressable link regions. Glyphs assume a
//! Nerd-Font-patched terminal font.

use crate::document::{Link, LinkKind};

/// Closes any open style span.
pub const STYLE_RESET: &str = "[-:-:-]";

/// Closes a color-only span.
pub const COLOR_RESET: &str = "[-]";

/// Closes an addressable link region.
pub const REGION_CLOSE: &str = "[\"\"]";

/// Visual configuration for the token renderer.
///
/// All headings share one uniform style regardless of level; levels are
/// preserved on the token for downstream consumers.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style opener for heading lines
    pub heading: &'static str,
    /// Glyph placed before heading text
    pub heading_glyph: char,
    /// Style opener for bullet glyphs
    pub bullet: &'static str,
    /// Bullet glyphs by nesting level (1-3)
    pub bullet_glyphs: [char; 3],
    /// Style opener for inline code spans
    pub inline_code: &'static str,
    /// Style opener for code block bodies
    pub code_block: &'static str,
    /// Style opener for link titles
    pub link: &'static str,
    /// Icon for external URLs
    pub icon_url: char,
    /// Icon for note references
    pub icon_note: char,
    /// Icon for attachment references
    pub icon_attachment: char,
    /// Icon for report references
    pub icon_report: char,
    /// Icon for empty (inert) links
    pub icon_empty: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: "[blue::b]",
            heading_glyph: '\u{f192}',
            bullet: "[green]",
            bullet_glyphs: ['\u{fc63}', '\u{fc64}', '\u{f444}'],
            inline_code: "[green:-:]",
            code_block: "[green:gray]",
            link: "[blue::u]",
            icon_url: '\u{f0c1}',
            icon_note: '\u{f249}',
            icon_attachment: '\u{f565}',
            icon_report: '\u{f013}',
            icon_empty: '\u{f839}',
        }
    }
}

impl Theme {
    /// Render a heading line. One uniform treatment for every level.
    pub fn heading_line(&self, text: &str) -> String {
        format!(
            "{}{} {text}{STYLE_RESET}",
            self.heading, self.heading_glyph
        )
    }

    /// Render a bullet item with its level-specific indent and glyph.
    ///
    /// Levels outside 1-3 degrade to the bare text.
    pub fn bullet_item(&self, level: u8, text: &str) -> String {
        let Some(glyph) = self.bullet_glyphs.get(level.wrapping_sub(1) as usize) else {
            return text.to_string();
        };
        let indent = " ".repeat(2 * level as usize - 1);
        format!("{indent}{}{glyph}{COLOR_RESET} {text}", self.bullet)
    }

    /// Render an inline code span.
    pub fn inline_code_span(&self, text: &str) -> String {
        format!("{}{text}{STYLE_RESET}", self.inline_code)
    }

    /// Render a fenced code block body. The caller appends the trailing
    /// line break.
    pub fn code_block_body(&self, text: &str) -> String {
        format!("{}{text}{STYLE_RESET}", self.code_block)
    }

    /// Render a link as an addressable region keyed by its registry index.
    pub fn link_region(&self, link: &Link) -> String {
        format!(
            "[\"{}\"]{}{}{}{STYLE_RESET}{REGION_CLOSE}",
            link.index,
            self.icon_for(link.kind),
            self.link,
            link.title
        )
    }

    /// Icon glyph for a link kind.
    pub const fn icon_for(&self, kind: LinkKind) -> char {
        match kind {
            LinkKind::Url => self.icon_url,
            LinkKind::ZkNote => self.icon_note,
            LinkKind::ZkAttachment => self.icon_attachment,
            LinkKind::Report => self.icon_report,
            LinkKind::Empty => self.icon_empty,
        }
    }
}
