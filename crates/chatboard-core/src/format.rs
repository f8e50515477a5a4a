//! Message formatting — turns raw chat text into structured render blocks.
//!
//! Pure function, no platform dependencies. The UI layer decides how a
//! `ContentBlock` is drawn; this module only decides what the blocks are.

use chatboard_types::block::ContentBlock;

/// Bullet markers recognized at the start of a line.
const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];

/// Format raw message content into renderable blocks.
///
/// Paragraphs are separated by a blank line. A paragraph containing a
/// bulleted line becomes an intro paragraph (text before the first bullet)
/// followed by a list; any other paragraph keeps its single newlines as
/// line breaks. Empty or all-blank content falls back to one paragraph
/// wrapping the raw input.
pub fn format_message(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for para in content.split("\n\n") {
        if para.trim().is_empty() {
            continue;
        }

        if para.lines().any(|line| strip_bullet(line).is_some()) {
            format_bulleted(para, &mut blocks);
        } else {
            blocks.push(ContentBlock::paragraph(
                para.lines().map(String::from).collect(),
            ));
        }
    }

    if blocks.is_empty() {
        // Nothing survived the split; wrap the raw content as-is
        blocks.push(ContentBlock::paragraph(vec![content.to_string()]));
    }

    blocks
}

/// A mixed intro + list paragraph: lines before the first bullet line form
/// a single space-joined intro; bullet lines become items. Once a bullet
/// line is seen, no further intro text is collected.
fn format_bulleted(para: &str, blocks: &mut Vec<ContentBlock>) {
    let mut items: Vec<String> = Vec::new();
    let mut intro = String::new();

    for line in para.lines() {
        if let Some(item) = strip_bullet(line) {
            items.push(item.to_string());
        } else if items.is_empty() {
            if !intro.is_empty() {
                intro.push(' ');
            }
            intro.push_str(line);
        }
    }

    let intro = intro.trim();
    if !intro.is_empty() {
        blocks.push(ContentBlock::paragraph(vec![intro.to_string()]));
    }
    if !items.is_empty() {
        blocks.push(ContentBlock::list(items));
    }
}

/// If `line` starts with a bullet marker followed by whitespace, return the
/// rest of the line with marker and that whitespace character stripped.
fn strip_bullet(line: &str) -> Option<&str> {
    let mut chars = line.char_indices();
    let (_, marker) = chars.next()?;
    if !BULLET_MARKERS.contains(&marker) {
        return None;
    }
    let (idx, ws) = chars.next()?;
    if !ws.is_whitespace() {
        return None;
    }
    Some(&line[idx + ws.len_utf8()..])
}
