// src/formatter.rs

use once_cell::sync::Lazy;
use regex::Regex;

static DOUBLE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid double emphasis pattern"));
static SINGLE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid single emphasis pattern"));
static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[-•][ \t]+(.+)$").expect("valid bullet pattern"));

/// Escapes the characters that would otherwise let reply text smuggle in
/// its own markup.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Converts assistant text into display markup.
///
/// The output only contains `p`, `ul`, `li` and `strong` elements; anything
/// else in the input arrives escaped. Unbalanced asterisks are left as-is.
/// The input is expected to be raw reply text, not previous output.
pub fn format_message(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = escape_markup(raw);
    let text = DOUBLE_EMPHASIS.replace_all(&text, "<strong>$1</strong>");
    let text = SINGLE_EMPHASIS.replace_all(&text, "<strong>$1</strong>");
    let text = group_list_items(&text);

    text.split("\n\n").map(wrap_paragraph).collect()
}

/// A paragraph that is nothing but one list is emitted without the `<p>`.
fn wrap_paragraph(paragraph: &str) -> String {
    let only_list = paragraph.starts_with("<ul>")
        && paragraph.ends_with("</ul>")
        && paragraph.matches("<ul>").count() == 1;

    if only_list {
        paragraph.to_string()
    } else {
        format!("<p>{}</p>", paragraph)
    }
}

/// Turns bullet lines into list items, one `<ul>` per consecutive run.
fn group_list_items(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for line in text.split('\n') {
        match BULLET_LINE.captures(line) {
            Some(caps) => run.push(format!("<li>{}</li>", &caps[1])),
            None => {
                if !run.is_empty() {
                    lines.push(format!("<ul>{}</ul>", run.concat()));
                    run.clear();
                }
                lines.push(line.to_string());
            }
        }
    }
    if !run.is_empty() {
        lines.push(format!("<ul>{}</ul>", run.concat()));
    }

    lines.join("\n")
}
