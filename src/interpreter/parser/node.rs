/// A half-open byte range `[start, end)` into the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

impl Span {
    /// Creates a span from its bounds.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `position`.
    #[must_use]
    pub const fn empty(position: usize) -> Self {
        Self { start: position,
               end:   position, }
    }
}

/// A node of the syntax tree produced by a successful match.
///
/// Every node carries the name of the grammar rule that produced it. The
/// variant mirrors the kind of matcher:
/// - `Terminal` holds the matched slice of the source and has no children.
/// - `Sequence` holds one child per step of the sequence, in order.
/// - `Alternative` wraps the single branch that matched.
///
/// Nodes are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'src> {
    /// A matched lexeme.
    Terminal {
        /// The rule name.
        name: &'static str,
        /// The matched byte range.
        span: Span,
        /// The matched source text.
        text: &'src str,
    },
    /// A matched sequence of rules.
    Sequence {
        /// The rule name.
        name:     &'static str,
        /// From the first child's start to the last child's end.
        span:     Span,
        /// The matched steps, in order.
        children: Vec<Self>,
    },
    /// The branch that matched an ordered alternative.
    Alternative {
        /// The rule name.
        name:  &'static str,
        /// The matched branch.
        child: Box<Self>,
    },
}

impl<'src> Node<'src> {
    /// Builds a sequence node, deriving its span from the children.
    ///
    /// A sequence without children gets an empty span at `start`.
    #[must_use]
    pub fn sequence(name: &'static str, start: usize, children: Vec<Self>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span().start, last.span().end),
            _ => Span::empty(start),
        };
        Self::Sequence { name,
                         span,
                         children }
    }

    /// Returns the name of the rule that produced this node.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Terminal { name, .. }
            | Self::Sequence { name, .. }
            | Self::Alternative { name, .. } => *name,
        }
    }

    /// Returns the source range covered by this node.
    ///
    /// An alternative covers exactly the range of the branch it matched.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Terminal { span, .. } | Self::Sequence { span, .. } => *span,
            Self::Alternative { child, .. } => child.span(),
        }
    }

    /// Returns the ordered children of this node; empty for terminals.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Terminal { .. } => &[],
            Self::Sequence { children, .. } => children,
            Self::Alternative { child, .. } => std::slice::from_ref(child.as_ref()),
        }
    }

    /// Returns the matched text of a terminal, or `None` for composite nodes.
    #[must_use]
    pub const fn text(&self) -> Option<&'src str> {
        match self {
            Self::Terminal { text, .. } => Some(*text),
            _ => None,
        }
    }

    /// Detaches the matched branch of an alternative, leaving an empty
    /// terminal in its place. Returns `None` for other nodes.
    pub(crate) fn take_branch(&mut self) -> Option<Self> {
        match self {
            Self::Alternative { child, .. } => Some(std::mem::replace(child.as_mut(), Self::blank())),
            _ => None,
        }
    }

    fn take_children(&mut self) -> Vec<Self> {
        match self {
            Self::Sequence { children, .. } => std::mem::take(children),
            _ => self.take_branch().into_iter().collect(),
        }
    }

    const fn blank() -> Self {
        Self::Terminal { name: "",
                         span: Span::empty(0),
                         text: "" }
    }

    /// Returns a lazy pre-order traversal over this node and its descendants.
    ///
    /// A node is yielded before its children; children are visited left to
    /// right, depth first. Wrapper nodes are yielded as well as terminals.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::parser::node::{Node, Span};
    ///
    /// let leaf = |name, start, text| Node::Terminal { name,
    ///                                                 span: Span::new(start, start + 1),
    ///                                                 text };
    /// let tree = Node::sequence("Pair", 0, vec![leaf("A", 0, "a"), leaf("B", 1, "b")]);
    ///
    /// let names: Vec<_> = tree.preorder().map(Node::name).collect();
    /// assert_eq!(names, ["Pair", "A", "B"]);
    /// assert_eq!(tree.span(), Span::new(0, 2));
    /// ```
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_, 'src> {
        Preorder { pending: vec![self] }
    }
}

/// Pre-order iterator over a syntax tree.
///
/// Holds the nodes still to visit; the next node is on top.
pub struct Preorder<'a, 'src> {
    pending: Vec<&'a Node<'src>>,
}

impl<'a, 'src> Iterator for Preorder<'a, 'src> {
    type Item = &'a Node<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().iter().rev());
        Some(node)
    }
}

// Tearing down a right-nested chain recursively would use one stack frame
// per level.
impl Drop for Node<'_> {
    fn drop(&mut self) {
        if let Self::Terminal { .. } = self {
            return;
        }

        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            if !matches!(node, Self::Terminal { .. }) {
                pending.append(&mut node.take_children());
            }
        }
    }
}
