//! Method-body syntax arena.
//!
//! Hosts lower each method declaration into a small statement/expression
//! tree. Only the shapes the analyzer distinguishes get their own kind
//! (`Return`, `Invocation`); everything else is kept as a generic node so
//! that `return` statements nested anywhere (branches, loops, lambdas, local
//! functions) are still reachable by a descendant walk.

use resplint_common::SourceSpan;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Index of a node in a `SyntaxArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// `{ ... }`
    Block { statements: Vec<NodeIndex> },
    /// `return;` or `return expr;`
    Return { expression: Option<NodeIndex> },
    /// `if (cond) then else otherwise`
    If {
        condition: NodeIndex,
        then_branch: NodeIndex,
        else_branch: Option<NodeIndex>,
    },
    /// `expr;`
    ExpressionStatement { expression: NodeIndex },
    /// `var name = init;`
    LocalDeclaration {
        name: String,
        initializer: Option<NodeIndex>,
    },
    /// `callee(args)`
    Invocation {
        callee: String,
        arguments: Vec<NodeIndex>,
    },
    /// `new T(args) { initializers }`
    ObjectCreation {
        type_name: String,
        arguments: Vec<NodeIndex>,
        initializers: Vec<NodeIndex>,
    },
    /// `await expr`
    Await { expression: NodeIndex },
    /// Lambda or local function body.
    Lambda { body: NodeIndex },
    Literal { text: String },
    Identifier { name: String },
    /// Any other statement or expression, kept for its children.
    Other {
        label: String,
        children: Vec<NodeIndex>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Option<SourceSpan>,
}

impl Node {
    pub fn is_return(&self) -> bool {
        matches!(self.kind, NodeKind::Return { .. })
    }

    /// Direct children in source order.
    pub fn children(&self) -> SmallVec<[NodeIndex; 4]> {
        let mut out = SmallVec::new();
        match &self.kind {
            NodeKind::Block { statements } => out.extend(statements.iter().copied()),
            NodeKind::Return { expression } => out.extend(*expression),
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(*condition);
                out.push(*then_branch);
                out.extend(*else_branch);
            }
            NodeKind::ExpressionStatement { expression } | NodeKind::Await { expression } => {
                out.push(*expression)
            }
            NodeKind::LocalDeclaration { initializer, .. } => out.extend(*initializer),
            NodeKind::Invocation { arguments, .. } => out.extend(arguments.iter().copied()),
            NodeKind::ObjectCreation {
                arguments,
                initializers,
                ..
            } => {
                out.extend(arguments.iter().copied());
                out.extend(initializers.iter().copied());
            }
            NodeKind::Lambda { body } => out.push(*body),
            NodeKind::Literal { .. } | NodeKind::Identifier { .. } => {}
            NodeKind::Other { children, .. } => out.extend(children.iter().copied()),
        }
        out
    }
}

#[derive(Clone, Debug, Default)]
pub struct SyntaxArena {
    nodes: Vec<Node>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add(&mut self, kind: NodeKind) -> NodeIndex {
        self.add_with_span(kind, None)
    }

    pub fn add_with_span(&mut self, kind: NodeKind, span: Option<SourceSpan>) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { kind, span });
        index
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0 as usize)
    }

    /// Pre-order walk of `root` and everything below it.
    ///
    /// Uses an explicit stack; an index that is out of range or already
    /// visited (a malformed, cyclic tree) is skipped. The visited set only
    /// grows with the walked subtree, not with the arena.
    pub fn descendants(&self, root: NodeIndex) -> Descendants<'_> {
        Descendants {
            arena: self,
            stack: vec![root],
            visited: FxHashSet::default(),
        }
    }

    // Convenience constructors used by hosts and tests.

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Block { statements })
    }

    pub fn ret(&mut self, expression: Option<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Return { expression })
    }

    pub fn invocation(&mut self, callee: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Invocation {
            callee: callee.to_string(),
            arguments,
        })
    }

    pub fn literal(&mut self, text: &str) -> NodeIndex {
        self.add(NodeKind::Literal {
            text: text.to_string(),
        })
    }

    pub fn identifier(&mut self, name: &str) -> NodeIndex {
        self.add(NodeKind::Identifier {
            name: name.to_string(),
        })
    }
}

pub struct Descendants<'a> {
    arena: &'a SyntaxArena,
    stack: Vec<NodeIndex>,
    visited: FxHashSet<NodeIndex>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.stack.pop() {
            let Some(node) = self.arena.get(index) else {
                continue;
            };
            if !self.visited.insert(index) {
                continue;
            }
            // Push in reverse so children come out in source order.
            self.stack.extend(node.children().into_iter().rev());
            return Some((index, node));
        }
        None
    }
}
