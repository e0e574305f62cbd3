use crate::diagnostic::Diagnostic;

/// A title-page metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Date,
}

impl Field {
    fn command(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Date => "date",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Field::Title => "TITLE",
            Field::Author => "AUTHOR",
            Field::Date => "DATE",
        }
    }
}

/// Document header state, collected from preamble-field blocks wherever they
/// appear in the source and rendered exactly once at finalization.
#[derive(Debug, Default)]
pub struct Preamble {
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    toc: bool,
}

impl Preamble {
    /// Record a field value. Returns a warning when a duplicate is ignored
    /// under the first-wins policy.
    pub fn set(&mut self, field: Field, value: String, overwrite: bool) -> Option<Diagnostic> {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Date => &mut self.date,
        };
        if slot.is_some() && !overwrite {
            return Some(Diagnostic::new(format!(
                "duplicate \\{} ignored; keeping the first value",
                field.tag()
            )));
        }
        *slot = Some(value);
        None
    }

    pub fn set_toc(&mut self) {
        self.toc = true;
    }

    /// Render the field lines, the `\begin{document}` anchor, and the
    /// title-page directives that follow it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (field, value) in [
            (Field::Title, &self.title),
            (Field::Author, &self.author),
            (Field::Date, &self.date),
        ] {
            if let Some(value) = value {
                out.push_str(&format!("\\{}{{{value}}}\n", field.command()));
            }
        }
        out.push_str("\\begin{document}\n");
        if self.title.is_some() || self.author.is_some() || self.date.is_some() || self.toc {
            out.push_str("\\maketitle\n");
        }
        if self.toc {
            out.push_str("\\tableofcontents\n\\newpage\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, Preamble};

    #[test]
    fn empty_preamble_is_just_the_anchor() {
        assert_eq!(Preamble::default().render(), "\\begin{document}\n");
    }

    #[test]
    fn fields_render_in_fixed_order_before_the_anchor() {
        let mut preamble = Preamble::default();
        // Source order is irrelevant to the rendered order.
        preamble.set(Field::Date, "2024".to_string(), true);
        preamble.set(Field::Title, "T".to_string(), true);
        assert_eq!(
            preamble.render(),
            "\\title{T}\n\\date{2024}\n\\begin{document}\n\\maketitle\n"
        );
    }

    #[test]
    fn any_field_triggers_maketitle() {
        let mut preamble = Preamble::default();
        preamble.set(Field::Author, "A".to_string(), true);
        assert!(preamble.render().contains("\\maketitle\n"));
    }

    #[test]
    fn toc_renders_after_maketitle_with_a_page_break() {
        let mut preamble = Preamble::default();
        preamble.set(Field::Title, "T".to_string(), true);
        preamble.set_toc();
        assert_eq!(
            preamble.render(),
            "\\title{T}\n\\begin{document}\n\\maketitle\n\\tableofcontents\n\\newpage\n"
        );
    }

    #[test]
    fn toc_alone_still_makes_a_title_page() {
        let mut preamble = Preamble::default();
        preamble.set_toc();
        assert_eq!(
            preamble.render(),
            "\\begin{document}\n\\maketitle\n\\tableofcontents\n\\newpage\n"
        );
    }

    #[test]
    fn overwrite_policy_takes_the_later_value() {
        let mut preamble = Preamble::default();
        assert!(preamble.set(Field::Title, "first".to_string(), true).is_none());
        assert!(preamble.set(Field::Title, "second".to_string(), true).is_none());
        assert!(preamble.render().contains("\\title{second}\n"));
    }

    #[test]
    fn first_wins_policy_warns_and_keeps_the_first() {
        let mut preamble = Preamble::default();
        assert!(preamble.set(Field::Title, "first".to_string(), false).is_none());
        let warning = preamble.set(Field::Title, "second".to_string(), false);
        assert!(warning.is_some());
        assert!(preamble.render().contains("\\title{first}\n"));
    }
}
