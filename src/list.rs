use crate::block::{ListKind, ListNode};

/// Parse raw list-block content into an ordered tree of leaves and nested
/// groups, scanning left to right over an index cursor.
pub fn parse_items(content: &str) -> Vec<ListNode> {
    let mut items = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < content.len() {
        let rest = &content[i..];
        if let Some((kind, consumed, inner)) = match_group(rest) {
            flush(&mut buf, &mut items);
            items.push(ListNode::Group {
                kind,
                children: parse_items(inner),
            });
            i += consumed;
        } else if let Some(consumed) = match_separator(rest) {
            flush(&mut buf, &mut items);
            i += consumed;
        } else if let Some(ch) = rest.chars().next() {
            buf.push(ch);
            i += ch.len_utf8();
        } else {
            break;
        }
    }

    flush(&mut buf, &mut items);
    items
}

/// Match a nested group opener (`ORDERED{` or `UNORDERED{`) and locate its
/// matching close brace by depth counting. An unterminated group consumes
/// the remainder of the content.
fn match_group(rest: &str) -> Option<(ListKind, usize, &str)> {
    let (kind, open) = if rest.starts_with("ORDERED{") {
        (ListKind::Ordered, "ORDERED{".len())
    } else if rest.starts_with("UNORDERED{") {
        (ListKind::Unordered, "UNORDERED{".len())
    } else {
        return None;
    };

    let mut depth = 1usize;
    for (pos, ch) in rest[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((kind, open + pos + 1, &rest[open..open + pos]));
                }
            }
            _ => {}
        }
    }
    Some((kind, rest.len(), &rest[open..]))
}

/// Match the item separator: a backslash whose following whitespace run
/// contains at least one newline. Everything through the last newline of
/// that run is consumed; the separator never reaches a leaf's text.
fn match_separator(rest: &str) -> Option<usize> {
    let tail = rest.strip_prefix('\\')?;
    let run = &tail[..tail.len() - tail.trim_start().len()];
    let last_newline = run.rfind('\n')?;
    Some(1 + last_newline + 1)
}

fn flush(buf: &mut String, items: &mut Vec<ListNode>) {
    let text = buf.trim();
    if !text.is_empty() && text != "\\" {
        items.push(ListNode::Leaf(text.to_string()));
    }
    buf.clear();
}
