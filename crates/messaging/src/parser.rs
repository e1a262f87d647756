//! Message grammar: total, pure parsing of inbound text.

use crate::command::{Command, ParsedMessage};

/// Parse an inbound message.
///
/// A message is a command when its first non-whitespace token starts with `/`
/// and names one of the recognized commands (compared case-insensitively).
/// Everything after the first token is the argument, trimmed and with interior
/// whitespace runs collapsed to single spaces, case preserved.
///
/// Total by construction: any input that does not match the grammar, including
/// a bare `/` and unknown command names, is `FreeText`.
pub fn parse(text: &str) -> ParsedMessage {
    let trimmed = text.trim_start();
    let Some(token) = trimmed.split_whitespace().next() else {
        return free_text(text);
    };
    let Some(raw_name) = token.strip_prefix('/') else {
        return free_text(text);
    };
    if raw_name.is_empty() {
        return free_text(text);
    }

    let name = raw_name.to_lowercase();
    let argument = collapse_whitespace(&trimmed[token.len()..]);

    let command = match name.as_str() {
        "menu" => Command::Menu,
        "stock" => Command::Stock { query: argument },
        "reporte" => Command::Reporte { subtype: argument },
        "productos" => Command::Productos,
        _ => return free_text(text),
    };
    ParsedMessage::Command(command)
}

fn free_text(text: &str) -> ParsedMessage {
    ParsedMessage::FreeText {
        text: text.to_string(),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
