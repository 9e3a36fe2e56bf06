//! Typed CST node wrappers for JavaScript/JSX syntax trees.
//!
//! Provides read-only access to tree-sitter nodes while preserving the
//! source positions needed for fixes.

use text_size::{TextRange, TextSize};
use tree_sitter::Node;

fn node_range(node: &Node) -> TextRange {
    let start = TextSize::from(node.start_byte() as u32);
    let end = TextSize::from(node.end_byte() as u32);
    TextRange::new(start, end)
}

/// Wrapper for traversing CST nodes.
#[derive(Debug, Clone, Copy)]
pub struct CstNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CstNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn range(&self) -> TextRange {
        node_range(&self.node)
    }

    pub fn text(&self) -> &'a str {
        self.node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn is_named(&self) -> bool {
        self.node.is_named()
    }

    pub fn parent(&self) -> Option<CstNode<'a>> {
        self.node.parent().map(|n| CstNode::new(n, self.source))
    }

    fn children(&self) -> impl Iterator<Item = CstNode<'a>> + 'a {
        let source = self.source;
        let count = self.node.child_count();
        let node = self.node;
        (0..count).filter_map(move |i| node.child(i as u32).map(|child| CstNode::new(child, source)))
    }

    pub fn child_by_field_name(&self, name: &str) -> Option<CstNode<'a>> {
        self.node
            .child_by_field_name(name)
            .map(|n| CstNode::new(n, self.source))
    }

    pub fn named_children(&self) -> impl Iterator<Item = CstNode<'a>> + 'a {
        self.children().filter(CstNode::is_named)
    }

    /// First named child that is not a comment.
    pub fn first_named_child(&self) -> Option<CstNode<'a>> {
        self.named_children().find(|c| c.kind() != "comment")
    }
}

/// Iterator for walking all nodes in a tree (pre-order traversal).
pub struct TreeWalker<'a> {
    cursor: tree_sitter::TreeCursor<'a>,
    source: &'a str,
    done: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: Node<'a>, source: &'a str) -> Self {
        Self {
            cursor: root.walk(),
            source,
            done: false,
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = CstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = CstNode::new(self.cursor.node(), self.source);

        if self.cursor.goto_first_child() {
            return Some(node);
        }

        if self.cursor.goto_next_sibling() {
            return Some(node);
        }

        // Climb until a sibling exists or the walk is back at the root.
        loop {
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }
        }
    }
}

/// The node kind tree-sitter uses for both `//` and `/* */` comments.
pub const COMMENT_KIND: &str = "comment";

/// Delimiter style of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A comment token from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentToken<'a> {
    /// The full token text, delimiters included.
    text: &'a str,
    range: TextRange,
}

impl<'a> CommentToken<'a> {
    /// Wrap a comment node. Returns `None` for any other node kind.
    pub fn from_node(node: &CstNode<'a>) -> Option<Self> {
        (node.kind() == COMMENT_KIND).then(|| Self {
            text: node.text(),
            range: node.range(),
        })
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn kind(&self) -> CommentKind {
        if self.text.starts_with("/*") {
            CommentKind::Block
        } else {
            CommentKind::Line
        }
    }

    /// The comment body without its delimiters.
    pub fn value(&self) -> &'a str {
        match self.kind() {
            CommentKind::Line => self.text.strip_prefix("//").unwrap_or(self.text),
            CommentKind::Block => {
                let body = &self.text[2..];
                body.strip_suffix("*/").unwrap_or(body)
            }
        }
    }
}

/// All comments under `root`, in source order.
pub fn comments<'a>(root: Node<'a>, source: &'a str) -> impl Iterator<Item = CommentToken<'a>> {
    TreeWalker::new(root, source).filter_map(|node| CommentToken::from_node(&node))
}
