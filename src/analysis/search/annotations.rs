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

use std::collections::HashMap;
use std::collections::hash_map::Iter;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::analysis::Evaluation;
use crate::tree::{Node, NodeId, Tree};

/// The backed-up values a search computed, keyed by node identity.
///
/// Only internal nodes the search actually expanded are recorded.  Terminal nodes,
/// nodes at the search horizon, and siblings skipped by a cutoff keep whatever value
/// the tree already holds for them.
#[derive(Clone, Debug, Default)]
pub struct Annotations<E> where
    E: Evaluation {
    map: HashMap<NodeId, E, BuildHasherDefault<FnvHasher>>,
}

impl<E> Annotations<E> where
    E: Evaluation {
    pub fn new() -> Annotations<E> {
        Annotations {
            map: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<E> {
        self.map.get(&id).cloned()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.map.contains_key(&id)
    }

    pub(crate) fn insert(&mut self, id: NodeId, value: E) -> Option<E> {
        self.map.insert(id, value)
    }

    pub fn iter(&self) -> Iter<'_, NodeId, E> {
        self.map.iter()
    }

    /// The value of `node` as seen after the search: its backed-up value if it was
    /// expanded, its stored value otherwise.
    pub fn value_of(&self, node: &Node<E>) -> Option<E> {
        self.get(node.id()).or(node.value())
    }

    /// Stores every annotation into the matching node of `tree`, leaving the tree as
    /// an in-place search would have.
    ///
    /// `tree` must be the tree that was searched.
    pub fn write_back(&self, tree: &mut Tree<E>) {
        if !self.is_empty() {
            self.write_back_node(tree.root_mut());
        }
    }

    fn write_back_node(&self, node: &mut Node<E>) {
        if let Some(value) = self.get(node.id()) {
            node.set_value(value);

            for child in node.children_mut() {
                self.write_back_node(child);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::tree::{Node, NodeId, Tree};
    use super::Annotations;

    #[test]
    fn test_write_back() {
        let mut tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(4), Node::leaf(6)]),
            Node::branch(vec![Node::leaf(1), Node::leaf(2)]),
        ])).unwrap();

        let mut annotations = Annotations::new();
        annotations.insert(NodeId(0), 4);
        annotations.insert(NodeId(1), 4);

        assert_eq!(annotations.value_of(tree.get(NodeId(4)).unwrap()), None);
        assert_eq!(annotations.value_of(tree.get(NodeId(2)).unwrap()), Some(4));

        annotations.write_back(&mut tree);

        assert_eq!(tree.root().value(), Some(4));
        assert_eq!(tree.get(NodeId(1)).unwrap().value(), Some(4));
        assert_eq!(tree.get(NodeId(4)).unwrap().value(), None);
        assert_eq!(tree.get(NodeId(5)).unwrap().value(), Some(1));
    }
}
