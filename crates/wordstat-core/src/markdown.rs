//! Markdown to plain prose.
//!
//! Word counts over a markdown file should reflect what a reader sees, not
//! the markup. pulldown-cmark does the parsing; this module only decides which
//! events carry countable words.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extract countable prose from markdown.
///
/// Keeps paragraph, heading, list, blockquote, table and link text. Drops
/// code (fenced, indented and inline), raw HTML, image alt text and YAML
/// frontmatter. Block boundaries become single spaces so words on either side
/// never run together.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;

    let mut prose = String::with_capacity(text.len() / 2);
    let mut hidden: usize = 0;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::MetadataBlock(_) | Tag::Image { .. }) => {
                hidden += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::MetadataBlock(_) | TagEnd::Image) => {
                hidden = hidden.saturating_sub(1);
            }
            Event::Text(t) if hidden == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => prose.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableCell
                | TagEnd::BlockQuote(_),
            ) if hidden == 0 => prose.push(' '),
            _ => {}
        }
    }

    prose
}
