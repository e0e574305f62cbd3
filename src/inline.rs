use once_cell::sync::Lazy;
use regex::Regex;

/// A style span: backslash, one or more style letters, and a brace-delimited
/// payload. Payload matching is non-nested, so a literal `}` ends the span.
static SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([BIUS^_CML]+)\{([^}]*)\}").unwrap());

/// Rewrite every style span in `content` into its LaTeX form.
///
/// Matches are collected against the incoming text, then each match's
/// literal source text is replaced everywhere it occurs — replacement is
/// by text, not by position, so identical spans rewrite identically.
pub fn apply(content: &str) -> String {
    let mut out = content.to_string();
    for caps in SPAN_RE.captures_iter(content) {
        let rewritten = rewrite(&caps[1], &caps[2]);
        out = out.replace(&caps[0], &rewritten);
    }
    out
}

fn rewrite(letters: &str, payload: &str) -> String {
    if letters.len() == 1 {
        return match letters {
            "B" => format!("\\textbf{{{payload}}}"),
            "I" => format!("\\textit{{{payload}}}"),
            "U" => format!("\\underline{{{payload}}}"),
            "S" => format!("\\sout{{{payload}}}"),
            "^" => format!("$^{{{payload}}}$"),
            "_" => format!("$_{{{payload}}}$"),
            "C" => format!("\\texttt{{{payload}}}"),
            "M" => format!("${payload}$"),
            "L" => rewrite_link(payload),
            // The pattern admits no other single letters; leave the span as-is.
            _ => format!("\\{letters}{{{payload}}}"),
        };
    }

    // Combined letters: only B/I/U/S contribute a wrapper, first letter
    // outermost, closed by one generic `}` per opener.
    let mut openers = String::new();
    let mut count = 0;
    for letter in letters.chars() {
        let wrapper = match letter {
            'B' => "\\textbf{",
            'I' => "\\textit{",
            'U' => "\\underline{",
            'S' => "\\sout{",
            _ => continue,
        };
        openers.push_str(wrapper);
        count += 1;
    }
    format!("{openers}{payload}{}", "}".repeat(count))
}

/// Links carry `display \ target` in the payload.
fn rewrite_link(payload: &str) -> String {
    let (display, target) = match payload.split_once('\\') {
        Some((display, target)) => (display.trim(), target.trim()),
        None => (payload.trim(), ""),
    };
    format!("\\href{{{target}}}{{{display}}}")
}

#[cfg(test)]
mod tests {
    use super::apply;
    use rstest::rstest;

    #[rstest]
    #[case("B", "\\textbf{x}")]
    #[case("I", "\\textit{x}")]
    #[case("U", "\\underline{x}")]
    #[case("S", "\\sout{x}")]
    #[case("C", "\\texttt{x}")]
    #[case("M", "$x$")]
    #[case("^", "$^{x}$")]
    #[case("_", "$_{x}$")]
    fn single_letter(#[case] letter: &str, #[case] expected: &str) {
        assert_eq!(apply(&format!("\\{letter}{{x}}")), expected);
    }

    #[test]
    fn link_splits_display_and_target() {
        assert_eq!(
            apply("\\L{Example \\ https://example.com}"),
            "\\href{https://example.com}{Example}"
        );
    }

    #[test]
    fn link_without_target() {
        assert_eq!(apply("\\L{Example}"), "\\href{}{Example}");
    }

    #[test]
    fn combined_letters_nest_left_to_right() {
        assert_eq!(apply("\\BI{hello}"), "\\textbf{\\textit{hello}}");
        assert_eq!(apply("\\IB{hello}"), "\\textit{\\textbf{hello}}");
        assert_eq!(apply("\\BIU{x}"), "\\textbf{\\textit{\\underline{x}}}");
    }

    #[test]
    fn combined_letters_skip_non_wrapping_styles() {
        // M contributes nothing in a combination; only B opens a wrapper.
        assert_eq!(apply("\\BM{hello}"), "\\textbf{hello}");
    }

    #[test]
    fn spans_inside_running_text() {
        assert_eq!(
            apply("see \\B{this} and \\I{that}."),
            "see \\textbf{this} and \\textit{that}."
        );
    }

    #[test]
    fn duplicate_spans_rewrite_everywhere() {
        assert_eq!(
            apply("\\B{x} then \\B{x}"),
            "\\textbf{x} then \\textbf{x}"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        let text = "no spans here, just braces {ok} and a \\chapter{h}";
        assert_eq!(apply(text), text);
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = apply("\\BI{hello} and \\^{2}");
        assert_eq!(apply(&once), once);
    }
}
