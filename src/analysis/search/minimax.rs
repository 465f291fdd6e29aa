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

//! Full-width minimax

use std::time::Instant;

use tracing::debug;

use crate::analysis::Evaluation;
use crate::error::Error;
use crate::tree::{Node, Tree};
use super::{is_better, stored_value, worst, Analysis, Annotations, Search, Statistics};

/// A `Search` that expands every child of every node down to its depth limit.
///
/// # Example
///
/// ```rust
/// use tree_search::analysis::search::{MinimaxSearch, Search};
/// use tree_search::tree::{Node, Tree};
///
/// let tree = Tree::new(Node::branch(vec![Node::leaf(3.0), Node::leaf(5.0)])).unwrap();
///
/// let analysis = MinimaxSearch::with_depth(2).search(&tree).unwrap();
/// assert_eq!(analysis.evaluation, 5.0);
/// assert_eq!(analysis.principal_variation, vec![1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MinimaxSearch {
    depth: Option<u8>,
    maximizing: bool,
}

impl MinimaxSearch {
    /// Creates a `MinimaxSearch` for the maximizing player without a depth limit.
    pub fn new() -> MinimaxSearch {
        MinimaxSearch {
            depth: None,
            maximizing: true,
        }
    }

    /// Creates a `MinimaxSearch` that will search to a maximum depth of `depth`.
    /// A depth of 0 reports the stored value of the root.
    pub fn with_depth(depth: u8) -> MinimaxSearch {
        let mut search = MinimaxSearch::new();
        search.depth = Some(depth);
        search
    }

    /// Searches with the root player minimizing instead.
    pub fn minimizing(mut self) -> MinimaxSearch {
        self.maximizing = false;
        self
    }

    fn minimax<E>(
        &self,
        node: &Node<E>,
        principal_variation: &mut Vec<usize>,
        depth: Option<u8>,
        ply: usize,
        maximizing: bool,
        annotations: &mut Annotations<E>,
        statistics: &mut Statistics,
    ) -> Result<E, Error> where
        E: Evaluation {
        if depth == Some(0) || node.is_terminal() {
            statistics.level_mut(ply).evaluated += 1;
            principal_variation.clear();
            return stored_value(node);
        }

        statistics.level_mut(ply).visited += 1;

        let mut best = worst(maximizing);
        let mut best_child = None;
        let mut next_principal_variation = Vec::new();

        for (index, child) in node.children().iter().enumerate() {
            let value = self.minimax(
                child, &mut next_principal_variation, depth.map(|depth| depth - 1), ply + 1,
                !maximizing,
                annotations,
                statistics,
            )?;

            if best_child.is_none() || is_better(value, best, maximizing) {
                best = value;
                best_child = Some(index);

                principal_variation.clear();
                principal_variation.push(index);
                principal_variation.extend_from_slice(&next_principal_variation);
            }
        }

        annotations.insert(node.id(), best);
        Ok(best)
    }
}

impl Default for MinimaxSearch {
    fn default() -> MinimaxSearch {
        MinimaxSearch::new()
    }
}

impl<E> Search<E> for MinimaxSearch where
    E: Evaluation {
    fn search(&mut self, tree: &Tree<E>) -> Result<Analysis<E>, Error> {
        let mut principal_variation = Vec::new();
        let mut annotations = Annotations::new();
        let mut statistics = Statistics::new();

        debug!(depth = ?self.depth, maximizing = self.maximizing, nodes = tree.len(), "starting minimax search");

        let start_search = Instant::now();

        let evaluation = self.minimax(
            tree.root(),
            &mut principal_variation,
            self.depth, 0,
            self.maximizing,
            &mut annotations,
            &mut statistics,
        )?;

        statistics.time = start_search.elapsed().as_secs_f32();

        debug!(evaluation = %evaluation, nodes = statistics.nodes(), "minimax search complete");

        Ok(Analysis {
            evaluation: evaluation,
            principal_variation: principal_variation,
            annotations: annotations,
            statistics: statistics,
        })
    }
}
