//! Walking the tree after a parse.
//!
//! Node ids are pre-order positions: the first top-level block is id 0 and
//! ids increase in the order [`Document::iter`] yields nodes.

use std::slice;

use crate::ast::{Document, Node};

/// Depth-first, pre-order iterator. Parents are yielded before their
/// children, siblings in document order.
///
/// Iterative, so arbitrarily deep trees do not grow the call stack.
#[derive(Debug, Clone)]
pub struct Descendants<'t, 'a> {
    stack: Vec<slice::Iter<'t, Node<'a>>>,
}

impl<'t, 'a> Descendants<'t, 'a> {
    fn new(nodes: &'t [Node<'a>]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'t, 'a> Iterator for Descendants<'t, 'a> {
    type Item = &'t Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    let children = node.children();
                    if !children.is_empty() {
                        self.stack.push(children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a> Document<'a> {
    /// Every node in the document, pre-order.
    #[inline]
    pub fn iter(&self) -> Descendants<'_, 'a> {
        Descendants::new(&self.nodes)
    }

    /// Number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated `Plain`, `Code` and `CodeBlock` content and `Link`
    /// targets, pre-order.
    pub fn leaf_text(&self) -> String {
        let mut out = String::new();
        for node in self.iter() {
            out.push_str(node.text());
        }
        out
    }
}

impl<'t, 'a> IntoIterator for &'t Document<'a> {
    type Item = &'t Node<'a>;
    type IntoIter = Descendants<'t, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Node<'a> {
    /// This node's strict descendants, pre-order.
    #[inline]
    pub fn descendants(&self) -> Descendants<'_, 'a> {
        Descendants::new(self.children())
    }
}

/// Upward lookup built after parsing: node id to parent id.
///
/// Top-level blocks have no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentIndex {
    parents: Vec<Option<usize>>,
}

impl ParentIndex {
    pub fn build(doc: &Document<'_>) -> Self {
        let mut parents = Vec::with_capacity(doc.nodes.len() * 4);
        // (parent id, remaining children) per open level
        let mut stack: Vec<(Option<usize>, slice::Iter<'_, Node<'_>>)> =
            vec![(None, doc.nodes.iter())];

        while let Some((parent, iter)) = stack.last_mut() {
            let parent = *parent;
            match iter.next() {
                Some(node) => {
                    let id = parents.len();
                    parents.push(parent);
                    let children = node.children();
                    if !children.is_empty() {
                        stack.push((Some(id), children.iter()));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        Self { parents }
    }

    /// Parent of node `id`; `None` for top-level blocks and unknown ids.
    #[inline]
    pub fn parent(&self, id: usize) -> Option<usize> {
        self.parents.get(id).copied().flatten()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
