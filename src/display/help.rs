//! Plain-text rendering of help content

use crate::actions::{HelpContent, HelpItem};

const RULE_WIDTH: usize = 60;

/// Render help items as lines of text
pub fn format_help(help: &HelpContent) -> String {
    let mut output = String::new();

    for item in help.items() {
        match item {
            HelpItem::Header(text) => {
                output.push_str(text);
                output.push('\n');
            }
            HelpItem::Rule(ch) => {
                output.extend(std::iter::repeat(*ch).take(RULE_WIDTH));
                output.push('\n');
            }
            HelpItem::Paragraph(text) => {
                output.push_str(text);
                output.push_str("\n\n");
            }
            HelpItem::List(entries) => {
                for entry in entries {
                    output.push_str(&format!("  • {}\n", entry));
                }
                output.push('\n');
            }
        }
    }

    output.trim_end().to_string()
}
