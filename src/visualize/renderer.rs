//! ASCII rendering for visualization diagrams.
//!
//! Pure functions mapping a labeled tree or a text string to fixed-width
//! ASCII art. No I/O and no failure modes; output is fully determined by
//! the input.

/// A node in a rendered tree. Children render in the order given.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node with the given label.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

/// Render a single-line text inside a box.
///
/// `width` sets a floor on the box width; text longer than the floor is
/// never truncated, the box grows instead.
pub fn render_box(text: &str, width: usize) -> String {
    let content_width = text.chars().count().max(width.saturating_sub(4));
    let padded = format!("{:<content_width$}", text);

    let top = format!("┌{}┐", "─".repeat(content_width + 2));
    let middle = format!("│ {} │", padded);
    let bottom = format!("└{}┘", "─".repeat(content_width + 2));

    [top, middle, bottom].join("\n")
}

/// Render a tree as indented ASCII with box-drawing connectors.
///
/// The root label appears on its own line without a prefix. Last children
/// get `└── `, others `├── `; the prefix below a non-last ancestor keeps a
/// `│` guide line running.
pub fn render_tree(node: &TreeNode) -> String {
    let mut out = String::new();
    render_node(node, None, true, &mut out);
    out.trim_end().to_string()
}

fn render_node(node: &TreeNode, prefix: Option<&str>, is_last: bool, out: &mut String) {
    match prefix {
        None => {
            out.push_str(&node.label);
            out.push('\n');
        }
        Some(prefix) => {
            let connector = if is_last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&node.label);
            out.push('\n');
        }
    }

    if node.children.is_empty() {
        return;
    }

    let child_prefix = match prefix {
        None => String::new(),
        Some(prefix) => format!("{}{}", prefix, if is_last { "    " } else { "│   " }),
    };
    let last = node.children.len() - 1;
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, Some(&child_prefix), i == last, out);
    }
}
