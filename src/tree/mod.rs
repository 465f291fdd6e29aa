//
// This file is part of tree_search.
//
// tree_search is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tree_search is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tree_search. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! The game tree.
//!
//! A tree is built from `Node`s and then validated into a `Tree`, which is the only
//! thing the searches accept.  Every node owns its children, so a tree can be
//! neither cyclic nor share a subtree between two parents.

use std::cmp;
use std::fmt;

use crate::analysis::Evaluation;
use crate::error::Error;

/// The identity of a node within a `Tree`.
///
/// Identities are assigned in preorder when the tree is validated, so the root is
/// always `NodeId(0)` and the first child of a node is always the next identity.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position in the game tree.
///
/// The order of `children` is significant: searches visit children left to right,
/// which decides both where alpha-beta prunes and which of several equal children
/// is reported as the best.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<E = f64> where
    E: Evaluation {
    id: NodeId,
    value: Option<E>,
    children: Vec<Node<E>>,
}

impl<E> Node<E> where
    E: Evaluation {
    pub fn new(value: Option<E>, children: Vec<Node<E>>) -> Node<E> {
        Node {
            id: NodeId::default(),
            value: value,
            children: children,
        }
    }

    /// Creates a terminal node.
    pub fn leaf(value: E) -> Node<E> {
        Node::new(Some(value), Vec::new())
    }

    /// Creates an internal node whose value is not yet known.
    pub fn branch(children: Vec<Node<E>>) -> Node<E> {
        Node::new(None, children)
    }

    /// The identity assigned by `Tree::new`.  Nodes that have not been placed in a
    /// tree all report `NodeId(0)`.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> Option<E> {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: E) {
        self.value = Some(value);
    }

    pub fn children(&self) -> &[Node<E>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node<E>] {
        &mut self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    fn fmt_level(&self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        for _ in 0..level {
            write!(f, "\t")?;
        }
        match self.value {
            Some(value) => writeln!(f, "Value: {}", value)?,
            None => writeln!(f, "Value: -")?,
        }
        for child in &self.children {
            child.fmt_level(f, level + 1)?;
        }
        Ok(())
    }
}

impl<E> fmt::Display for Node<E> where
    E: Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_level(f, 0)
    }
}

/// A validated game tree.
///
/// Every terminal node holds a value and no node holds a value that cannot be
/// compared.
///
/// # Example
///
/// ```rust
/// use tree_search::tree::{Node, NodeId, Tree};
///
/// let tree = Tree::new(Node::branch(vec![
///     Node::leaf(3.0),
///     Node::leaf(5.0),
/// ])).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.get(NodeId(2)).and_then(|node| node.value()), Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<E = f64> where
    E: Evaluation {
    root: Node<E>,
    len: usize,
    height: usize,
}

impl<E> Tree<E> where
    E: Evaluation {
    /// Validates `root` and assigns every node its identity.
    pub fn new(mut root: Node<E>) -> Result<Tree<E>, Error> {
        let mut len = 0;
        let mut height = 0;
        prepare(&mut root, 0, &mut len, &mut height)?;

        Ok(Tree {
            root: root,
            len: len,
            height: height,
        })
    }

    pub fn root(&self) -> &Node<E> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node<E> {
        &mut self.root
    }

    pub fn into_root(self) -> Node<E> {
        self.root
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of plies between the root and its deepest terminal node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the node with identity `id`, if there is one.
    pub fn get(&self, id: NodeId) -> Option<&Node<E>> {
        if id.0 >= self.len {
            return None;
        }

        let mut node = &self.root;
        while node.id != id {
            // Preorder identities: the wanted node lives under the last child that starts at or before it.
            node = node.children.iter().take_while(|child| child.id <= id).last()?;
        }
        Some(node)
    }
}

impl<E> fmt::Display for Tree<E> where
    E: Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.fmt(f)
    }
}

fn prepare<E>(node: &mut Node<E>, ply: usize, len: &mut usize, height: &mut usize) -> Result<(), Error> where
    E: Evaluation {
    node.id = NodeId(*len);
    *len += 1;
    *height = cmp::max(*height, ply);

    match node.value {
        Some(value) if !value.is_valid() => return Err(Error::InvalidValue { node: node.id }),
        None if node.children.is_empty() => return Err(Error::UnvaluedLeaf { node: node.id }),
        _ => (),
    }

    for child in &mut node.children {
        prepare(child, ply + 1, len, height)?;
    }
    Ok(())
}


pub mod description;
