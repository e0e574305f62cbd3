mod block;
mod config;
mod diagnostic;
mod inline;
mod latex;
mod list;
mod parser;
mod preamble;

pub use block::{Block, ListKind, ListNode};
pub use config::Config;
pub use diagnostic::Diagnostic;
pub use latex::Document;
pub use parser::ParseOutcome;

/// Parse SINT markup into a block stream plus recorded warnings.
pub fn parse(source: &str) -> ParseOutcome {
    parser::parse(source)
}

/// Convert SINT markup to a complete LaTeX document using default config.
pub fn sint_to_latex(source: &str) -> (String, Vec<Diagnostic>) {
    sint_to_latex_with_config(source, &Config::default())
}

/// Convert SINT markup to a complete LaTeX document with custom config.
///
/// The returned warnings cover malformed blocks the scanner had to drop or
/// repair and preamble fields ignored under the first-wins policy; the
/// transform itself never fails.
pub fn sint_to_latex_with_config(source: &str, config: &Config) -> (String, Vec<Diagnostic>) {
    let ParseOutcome {
        blocks,
        mut diagnostics,
    } = parser::parse(source);

    let mut doc = Document::new(config);
    doc.append(&blocks);
    let (latex, render_diagnostics) = doc.finish();
    diagnostics.extend(render_diagnostics);
    (latex, diagnostics)
}
