/// Whether a list group numbers its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A node in a list tree: a leaf item, or a nested group carrying its own
/// kind. Groups exclusively own their children; depth is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub enum ListNode {
    Leaf(String),
    Group {
        kind: ListKind,
        children: Vec<ListNode>,
    },
}

/// Block-level elements scanned from SINT markup
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Author(String),
    Date(String),
    Toc,
    Heading {
        level: u8,
        text: String,
    },
    Body(String),
    Blockquote(String),
    Code {
        language: String,
        body: String,
    },
    Math(String),
    Hr,
    PageBreak,
    List {
        kind: ListKind,
        items: Vec<ListNode>,
    },
    Table {
        caption: String,
        rows: Vec<Vec<String>>,
    },
    Image {
        path: String,
        caption: String,
    },
    /// Fallback for tags outside the closed set; carries the raw tag name
    /// and raw content so the output can flag them visibly.
    Unrecognized {
        tag: String,
        content: String,
    },
}
