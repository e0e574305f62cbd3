use crate::block::{Block, ListKind, ListNode};
use crate::diagnostic::Diagnostic;
use crate::{inline, list};

/// The ordered block stream plus any warnings recorded along the way.
#[derive(Debug)]
pub struct ParseOutcome {
    pub blocks: Vec<Block>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse SINT markup into a list of blocks
pub fn parse(source: &str) -> ParseOutcome {
    let mut blocks = Vec::new();
    let mut diagnostics = Vec::new();
    let mut cursor = 0;

    while let Some(scan) = next_block(source, cursor, &mut diagnostics) {
        cursor = scan.cursor;
        blocks.push(dispatch(&scan, &mut diagnostics));
    }

    ParseOutcome {
        blocks,
        diagnostics,
    }
}

/// One scanned block: the tag, its trimmed content, the byte offset of the
/// tag's backslash, and the cursor position just past the block.
struct Scan<'a> {
    tag: &'a str,
    content: &'a str,
    at: usize,
    cursor: usize,
}

/// Scan forward from `cursor` for the next `\TAG{...}` block.
///
/// A backslash starts a candidate; the tag name is the maximal run of word
/// characters after it, optionally separated from the opening brace by
/// whitespace. Content ends where brace depth returns to zero. Malformed
/// candidates (no opening brace, unterminated nesting) are recorded as
/// warnings and never abort the scan.
fn next_block<'a>(
    source: &'a str,
    mut cursor: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Scan<'a>> {
    while cursor < source.len() {
        let at = cursor + source[cursor..].find('\\')?;
        let mut i = at + 1;

        let tag_len: usize = source[i..]
            .chars()
            .take_while(|ch| ch.is_alphanumeric() || *ch == '_')
            .map(char::len_utf8)
            .sum();
        if tag_len == 0 {
            cursor = at + 1;
            continue;
        }
        let tag = &source[i..i + tag_len];
        i += tag_len;

        // Whitespace may separate the tag from its opening brace.
        i += source[i..].len() - source[i..].trim_start().len();
        if !source[i..].starts_with('{') {
            diagnostics.push(Diagnostic::at(
                at,
                format!("dropped `\\{tag}`: no opening brace after the tag"),
            ));
            cursor = i;
            continue;
        }
        i += 1;

        let content_start = i;
        let mut depth = 1usize;
        for (pos, ch) in source[content_start..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Scan {
                            tag,
                            content: source[content_start..content_start + pos].trim(),
                            at,
                            cursor: content_start + pos + 1,
                        });
                    }
                }
                _ => {}
            }
        }

        diagnostics.push(Diagnostic::at(
            at,
            format!("`\\{tag}` block is unterminated; content runs to end of input"),
        ));
        return Some(Scan {
            tag,
            content: source[content_start..].trim(),
            at,
            cursor: source.len(),
        });
    }
    None
}

/// Map a scanned tag onto its block kind. Tags are case-sensitive; anything
/// outside the closed set becomes `Unrecognized` with its raw text intact.
fn dispatch(scan: &Scan, diagnostics: &mut Vec<Diagnostic>) -> Block {
    let content = scan.content;
    match scan.tag {
        "TITLE" => Block::Title(inline::apply(content)),
        "AUTHOR" => Block::Author(inline::apply(content)),
        "DATE" => Block::Date(inline::apply(content)),
        "TOC" => Block::Toc,
        "H1" => heading(1, content),
        "H2" => heading(2, content),
        "H3" => heading(3, content),
        "H4" => heading(4, content),
        "H5" => heading(5, content),
        "H6" => heading(6, content),
        "BODY" => Block::Body(inline::apply(content)),
        "BLOCKQUOTE" => Block::Blockquote(inline::apply(content)),
        "CODE" => parse_code(content),
        "MATH" => Block::Math(content.to_string()),
        "HR" => Block::Hr,
        "PB" => Block::PageBreak,
        "ORDERED" => parse_list_block(ListKind::Ordered, content),
        "UNORDERED" => parse_list_block(ListKind::Unordered, content),
        "TABLE" => parse_table(content, scan.at, diagnostics),
        "IMAGE" => parse_image(content, scan.at, diagnostics),
        _ => Block::Unrecognized {
            tag: scan.tag.to_string(),
            content: content.to_string(),
        },
    }
}

fn heading(level: u8, content: &str) -> Block {
    Block::Heading {
        level,
        text: inline::apply(content),
    }
}

/// The first line of a code block declares its language; the rest is the
/// verbatim body (no inline rewriting).
fn parse_code(content: &str) -> Block {
    let (language, body) = match content.split_once('\n') {
        Some((language, body)) => (language, body),
        None => (content, ""),
    };
    Block::Code {
        language: language.to_string(),
        body: body.to_string(),
    }
}

fn parse_list_block(kind: ListKind, content: &str) -> Block {
    Block::List {
        kind,
        items: transform_leaves(list::parse_items(content)),
    }
}

fn transform_leaves(items: Vec<ListNode>) -> Vec<ListNode> {
    items
        .into_iter()
        .map(|node| match node {
            ListNode::Leaf(text) => ListNode::Leaf(inline::apply(&text)),
            ListNode::Group { kind, children } => ListNode::Group {
                kind,
                children: transform_leaves(children),
            },
        })
        .collect()
}

/// First non-blank line is the caption; later lines split on `|` into cells.
fn parse_table(content: &str, at: usize, diagnostics: &mut Vec<Diagnostic>) -> Block {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let Some(caption) = lines.next() else {
        diagnostics.push(Diagnostic::at(at, "empty \\TABLE block"));
        return Block::Table {
            caption: String::new(),
            rows: Vec::new(),
        };
    };

    let rows: Vec<Vec<String>> = lines
        .map(|line| {
            line.split('|')
                .map(|cell| inline::apply(cell.trim()))
                .collect()
        })
        .collect();
    if rows.is_empty() {
        diagnostics.push(Diagnostic::at(at, "\\TABLE block has a caption but no rows"));
    }

    Block::Table {
        caption: inline::apply(caption),
        rows,
    }
}

/// Image content is `path \ caption`.
fn parse_image(content: &str, at: usize, diagnostics: &mut Vec<Diagnostic>) -> Block {
    let (path, caption) = match content.split_once('\\') {
        Some((path, caption)) => (path.trim(), caption.trim()),
        None => {
            diagnostics.push(Diagnostic::at(
                at,
                "\\IMAGE block is missing the `\\` caption separator",
            ));
            (content, "")
        }
    };
    Block::Image {
        path: path.to_string(),
        caption: caption.to_string(),
    }
}
