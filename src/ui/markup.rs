use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Lays out formatter markup as terminal lines. Understands `p`, `ul`, `li`
/// and `strong`; any other tag is dropped.
pub fn markup_to_lines(markup: &str, base: Style) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut bold = false;
    let mut rest = markup;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('\n') {
            flush(&mut lines, &mut current);
            rest = after;
            continue;
        }

        if rest.starts_with('<') {
            if let Some(end) = rest.find('>') {
                match &rest[1..end] {
                    "strong" => bold = true,
                    "/strong" => bold = false,
                    "p" | "ul" | "/li" => flush(&mut lines, &mut current),
                    "/p" | "/ul" => {
                        flush(&mut lines, &mut current);
                        push_gap(&mut lines);
                    }
                    "li" => {
                        flush(&mut lines, &mut current);
                        current.push(Span::styled("  • ", base));
                    }
                    _ => {}
                }
                rest = &rest[end + 1..];
                continue;
            }
        }

        let stop = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '<' || *c == '\n')
            .map_or(rest.len(), |(i, _)| i);
        let style = if bold {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        current.push(Span::styled(unescape(&rest[..stop]), style));
        rest = &rest[stop..];
    }

    flush(&mut lines, &mut current);
    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }
    lines
}

fn flush(lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}

fn push_gap(lines: &mut Vec<Line<'static>>) {
    if lines.last().is_some_and(|line| !line.spans.is_empty()) {
        lines.push(Line::default());
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
