use crate::block::{Block, ListKind, ListNode};
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::preamble::{Field, Preamble};

/// Fixed document header emitted verbatim ahead of the preamble fields:
/// class, packages, chapter styling, listing style, per-depth bullet
/// labels, the centered `Y` column type, and link colors.
const TEMPLATE: &str = "\\documentclass[12pt, letterpaper]{report}\n\
    \\usepackage{graphicx}\n\
    \\usepackage{titlesec}\n\
    \\usepackage[normalem]{ulem}\n\
    \\usepackage{amsmath}\n\
    \\usepackage{amssymb}\n\
    \\usepackage{listings}\n\
    \\usepackage{xcolor}\n\
    \\usepackage{enumitem}\n\
    \\usepackage{tabularx}\n\
    \\usepackage{array}\n\
    \\usepackage{hyperref}\n\
    \\hbadness=10000\n\
    \\setlength{\\parindent}{0pt}\n\
    \\titleformat{\\chapter}[display]\n\
    \t{\\normalfont\\huge\\bfseries}\n\
    \t{}\n\
    \t{0pt}\n\
    \t{\\huge}\n\
    \\titlespacing*{\\chapter}\n\
    \t{0pt}\n\
    \t{0pt}\n\
    \t{30pt}\n\
    \\lstset{\n\
    \tbasicstyle=\\ttfamily\\small,\n\
    \tkeywordstyle=\\color{violet},\n\
    \tcommentstyle=\\color{gray},\n\
    \tstringstyle=\\color{blue},\n\
    \tnumbers=left,\n\
    \tnumberstyle=\\tiny\\color{gray},\n\
    \tframe=single,\n\
    \tbreaklines=true,}\n\
    \\setlist[itemize,1]{label=$\\bullet$}\n\
    \\setlist[itemize,2]{label=$\\circ$}\n\
    \\setlist[itemize,3]{label=$\\cdot$}\n\
    \\setlist[itemize,4]{label=-}\n\
    \\newcolumntype{Y}{>{\\centering\\arraybackslash}X}\n\
    \\hypersetup{\n\
    \tcolorlinks=true,\n\
    \tlinkcolor=black,\n\
    \tfilecolor=blue,\n\
    \turlcolor=blue,}\n\
    \\graphicspath{ {./} }\n";

/// In-memory output document.
///
/// Body fragments accumulate in block order; preamble fields are held
/// separately and rendered once at [`Document::finish`], so the emitted
/// file is written in a single pass.
pub struct Document {
    preamble: Preamble,
    body: String,
    overwrite: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    pub fn new(config: &Config) -> Self {
        Self {
            preamble: Preamble::default(),
            body: String::new(),
            overwrite: config.preamble.overwrite,
            diagnostics: Vec::new(),
        }
    }

    /// Append rendered fragments for each block, in document order.
    pub fn append(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Title(value) => self.set_field(Field::Title, value),
                Block::Author(value) => self.set_field(Field::Author, value),
                Block::Date(value) => self.set_field(Field::Date, value),
                Block::Toc => self.preamble.set_toc(),
                _ => emit_block(block, &mut self.body),
            }
        }
    }

    fn set_field(&mut self, field: Field, value: &str) {
        if let Some(warning) = self.preamble.set(field, value.to_string(), self.overwrite) {
            self.diagnostics.push(warning);
        }
    }

    /// Assemble the final LaTeX source and hand back any warnings recorded
    /// while appending.
    pub fn finish(self) -> (String, Vec<Diagnostic>) {
        let mut out = String::with_capacity(TEMPLATE.len() + self.body.len() + 128);
        out.push_str(TEMPLATE);
        out.push_str(&self.preamble.render());
        out.push_str(&self.body);
        out.push_str("\n\\end{document}");
        (out, self.diagnostics)
    }
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("\\{}{{{text}}}\n", heading_command(*level)));
        }
        Block::Body(text) => {
            out.push_str(&format!("{text}\\newline\n\n"));
        }
        Block::Blockquote(text) => {
            out.push_str(&format!(
                "\\begin{{quote}}\n{text}\\newline\n\n\\end{{quote}}\n"
            ));
        }
        Block::Code { language, body } => emit_code(language, body, out),
        Block::Math(text) => {
            out.push_str(&format!(
                "\\begin{{align*}}\n{text}\n\\end{{align*}}\n\n\\vspace{{2em}}\n\n"
            ));
        }
        Block::Hr => out.push_str("\\hrule\n\\vspace{1em}\n"),
        Block::PageBreak => out.push_str("\\newpage\n"),
        Block::List { kind, items } => emit_list(items, *kind, 0, out),
        Block::Table { caption, rows } => emit_table(caption, rows, out),
        Block::Image { path, caption } => {
            out.push_str(&format!(
                "\\begin{{figure}}[h]\n\\caption{{{caption}}}\n\\centering\n\\includegraphics[width=0.667\\textwidth]{{{path}}}\n\\end{{figure}}\n"
            ));
        }
        Block::Unrecognized { tag, content } => {
            out.push_str("\\newpage\n");
            out.push_str(&format!(
                "\\textbf{{INVALID KEYWORD:}} {tag} \\\\\n\\textbf{{TEXT:}} {content}\n"
            ));
            out.push_str("\\newpage\n");
        }
        // Routed to the preamble model by Document::append.
        Block::Title(_) | Block::Author(_) | Block::Date(_) | Block::Toc => {}
    }
}

fn heading_command(level: u8) -> &'static str {
    match level {
        1 => "chapter",
        2 => "section",
        3 => "subsection",
        4 => "subsubsection",
        5 => "paragraph",
        _ => "subparagraph",
    }
}

/// Dedent the body, then re-indent every line after the first by one tab
/// so the listing hangs under its opening line.
fn emit_code(language: &str, body: &str, out: &mut String) {
    let cleaned = dedent(body);
    let mut code = String::with_capacity(cleaned.len());
    for (idx, line) in cleaned.lines().enumerate() {
        if idx > 0 {
            code.push('\n');
            code.push('\t');
        }
        code.push_str(line);
    }
    out.push_str(&format!(
        "\\begin{{lstlisting}}[language={language}]\n{code}\n\\end{{lstlisting}}\n\n\\vspace{{1em}}\n\n"
    ));
}

/// Strip blank edge lines, left-trim the first line, and remove the common
/// leading-whitespace margin from the remaining lines.
fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|ch| ch.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                line.trim_start()
            } else if line.trim().is_empty() {
                ""
            } else {
                strip_margin(line, margin)
            }
        })
        .collect();
    while cleaned.first().is_some_and(|line| line.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|line| line.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}

fn strip_margin(line: &str, margin: usize) -> &str {
    let mut rest = line;
    for _ in 0..margin {
        match rest.chars().next() {
            Some(ch) if ch.is_whitespace() => rest = &rest[ch.len_utf8()..],
            _ => break,
        }
    }
    rest
}

/// Depth-first list rendering. Each level indents two spaces; ordered lists
/// number plainly at the top level and with compound labels below it.
/// Nested groups sit directly inside the parent environment.
fn emit_list(items: &[ListNode], kind: ListKind, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);
    match kind {
        ListKind::Unordered => out.push_str(&format!("{indent}\\begin{{itemize}}\n")),
        ListKind::Ordered => {
            let label = if level == 0 {
                "[label=\\arabic*.]"
            } else {
                "[label*=\\arabic*.]"
            };
            out.push_str(&format!("{indent}\\begin{{enumerate}}{label}\n"));
        }
    }
    for node in items {
        match node {
            ListNode::Leaf(text) => out.push_str(&format!("{indent}  \\item {text}\n")),
            ListNode::Group { kind, children } => emit_list(children, *kind, level + 1, out),
        }
    }
    match kind {
        ListKind::Unordered => out.push_str(&format!("{indent}\\end{{itemize}}\n\n")),
        ListKind::Ordered => out.push_str(&format!("{indent}\\end{{enumerate}}\n\n")),
    }
}

/// Column count is the widest row; short rows pad with empty cells. A
/// caption with no rows emits nothing.
fn emit_table(caption: &str, rows: &[Vec<String>], out: &mut String) {
    let Some(columns) = rows.iter().map(Vec::len).max() else {
        return;
    };
    let format_spec = format!("|{}|", vec!["Y"; columns].join("|"));

    out.push_str(&format!(
        "\\begin{{table}}[h]\n  \\centering\n  \\caption{{{caption}}}\n  \\vspace{{0.5em}}\n  \\begin{{tabularx}}{{\\linewidth}}{{{format_spec}}}\n    \\hline\n"
    ));
    for row in rows {
        let mut padded = row.clone();
        padded.resize(columns, String::new());
        out.push_str(&format!("    {} \\\\\n    \\hline\n", padded.join(" & ")));
    }
    out.push_str("  \\end{tabularx}\n\\end{table}\n\n");
}
