// src/assist/markdown.rs
// Line classifier for reply text. Each line is classified independently by
// prefix; no state is carried between lines, so there are no multi-line
// constructs (no list grouping, no code blocks, no tables). This is a
// display-time classifier, not a markdown parser.

use serde::{Deserialize, Serialize};

/// One classified unit of renderable output, derived from one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    BoldLabel(String),
    ListItem(String),
    Paragraph(String),
}

fn classify_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("## ") {
        Block::Heading(rest.to_string())
    } else if line.starts_with("**") && line.ends_with("**") {
        Block::BoldLabel(line.replace("**", ""))
    } else if let Some(rest) = line.strip_prefix("- ") {
        Block::ListItem(rest.to_string())
    } else {
        // Blank lines land here as empty paragraphs, preserving spacing.
        Block::Paragraph(line.to_string())
    }
}

/// Classify a raw reply into display blocks, one per line.
pub fn render_blocks(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_the_four_block_kinds_in_order() {
        let blocks = render_blocks("## Title\n**Label**\n- item\nplain text");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Title".to_string()),
                Block::BoldLabel("Label".to_string()),
                Block::ListItem("item".to_string()),
                Block::Paragraph("plain text".to_string()),
            ]
        );
    }

    #[test]
    fn blank_lines_become_empty_paragraphs() {
        let blocks = render_blocks("uno\n\ndos");
        assert_eq!(blocks[1], Block::Paragraph(String::new()));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn bold_label_requires_both_ends() {
        assert_eq!(
            render_blocks("**solo apertura"),
            vec![Block::Paragraph("**solo apertura".to_string())]
        );
        assert_eq!(
            render_blocks("**Anverso:** Concepto"),
            vec![Block::Paragraph("**Anverso:** Concepto".to_string())]
        );
    }

    #[test]
    fn heading_marker_needs_trailing_space() {
        assert_eq!(
            render_blocks("##Sin espacio"),
            vec![Block::Paragraph("##Sin espacio".to_string())]
        );
    }

    #[test]
    fn blocks_serialize_tagged() {
        let json = serde_json::to_value(Block::Heading("Título".to_string())).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["text"], "Título");
        let json = serde_json::to_value(Block::BoldLabel("Etiqueta".to_string())).unwrap();
        assert_eq!(json["type"], "bold_label");
    }
}
