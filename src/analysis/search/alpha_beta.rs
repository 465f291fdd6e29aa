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

//! Minimax with alpha-beta pruning

use std::time::Instant;

use tracing::{debug, trace};

use crate::analysis::Evaluation;
use crate::error::Error;
use crate::tree::{Node, Tree};
use super::{is_better, stored_value, worst, Analysis, Annotations, Search, Statistics};

/// A `Search` that stops expanding a node's children as soon as the remaining
/// siblings can no longer change the result.
///
/// The root value always matches `MinimaxSearch` for the same depth and player.
/// Only the nodes actually expanded are annotated; siblings skipped by a cutoff
/// are neither annotated nor counted as visited.
///
/// # Example
///
/// ```rust
/// use tree_search::analysis::search::{AlphaBetaSearch, Search};
/// use tree_search::tree::{Node, Tree};
///
/// let tree = Tree::new(Node::branch(vec![
///     Node::branch(vec![Node::leaf(3), Node::leaf(5)]),
///     Node::branch(vec![Node::leaf(2), Node::leaf(9)]),
/// ])).unwrap();
///
/// let analysis = AlphaBetaSearch::with_depth(2).search(&tree).unwrap();
/// assert_eq!(analysis.evaluation, 3);
/// assert_eq!(analysis.statistics.totals().pruned, 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AlphaBetaSearch<E> where
    E: Evaluation {
    depth: Option<u8>,
    maximizing: bool,
    alpha: E,
    beta: E,
}

impl<E> AlphaBetaSearch<E> where
    E: Evaluation {
    /// Creates an `AlphaBetaSearch` for the maximizing player without a depth limit,
    /// starting from the full window `E::min()..=E::max()`.
    pub fn new() -> AlphaBetaSearch<E> {
        AlphaBetaSearch {
            depth: None,
            maximizing: true,
            alpha: E::min(),
            beta: E::max(),
        }
    }

    /// Creates an `AlphaBetaSearch` that will search to a maximum depth of `depth`.
    pub fn with_depth(depth: u8) -> AlphaBetaSearch<E> {
        let mut search = AlphaBetaSearch::new();
        search.depth = Some(depth);
        search
    }

    /// Starts the search from the window `alpha..=beta` instead of the full window.
    /// The search fails if `alpha > beta`.
    pub fn with_window(mut self, alpha: E, beta: E) -> AlphaBetaSearch<E> {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Searches with the root player minimizing instead.
    pub fn minimizing(mut self) -> AlphaBetaSearch<E> {
        self.maximizing = false;
        self
    }

    fn alpha_beta(
        &self,
        node: &Node<E>,
        principal_variation: &mut Vec<usize>,
        depth: Option<u8>,
        ply: usize,
        mut alpha: E,
        mut beta: E,
        maximizing: bool,
        annotations: &mut Annotations<E>,
        statistics: &mut Statistics,
    ) -> Result<E, Error> {
        if depth == Some(0) || node.is_terminal() {
            statistics.level_mut(ply).evaluated += 1;
            principal_variation.clear();
            return stored_value(node);
        }

        statistics.level_mut(ply).visited += 1;

        let mut best = worst(maximizing);
        let mut best_child = None;
        let mut next_principal_variation = Vec::new();

        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            let value = self.alpha_beta(
                child, &mut next_principal_variation, depth.map(|depth| depth - 1), ply + 1,
                alpha, beta,
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

            if maximizing {
                if value > alpha {
                    alpha = value;
                }
            } else if value < beta {
                beta = value;
            }

            // Checked only after a child has been searched, so at least one child is always visited.
            if beta <= alpha {
                let skipped = children.len() - index - 1;

                let level = statistics.level_mut(ply);
                level.cutoffs += 1;
                level.pruned += skipped as u32;

                trace!(node = %node.id(), alpha = %alpha, beta = %beta, skipped, "cutoff");
                break;
            }
        }

        annotations.insert(node.id(), best);
        Ok(best)
    }
}

impl<E> Default for AlphaBetaSearch<E> where
    E: Evaluation {
    fn default() -> AlphaBetaSearch<E> {
        AlphaBetaSearch::new()
    }
}

impl<E> Search<E> for AlphaBetaSearch<E> where
    E: Evaluation {
    fn search(&mut self, tree: &Tree<E>) -> Result<Analysis<E>, Error> {
        // Also rejects a bound that cannot be ordered at all.
        if !(self.alpha <= self.beta) {
            return Err(Error::InvalidWindow {
                alpha: self.alpha.to_string(),
                beta: self.beta.to_string(),
            });
        }

        let mut principal_variation = Vec::new();
        let mut annotations = Annotations::new();
        let mut statistics = Statistics::new();

        debug!(
            depth = ?self.depth, maximizing = self.maximizing, alpha = %self.alpha, beta = %self.beta, nodes = tree.len(),
            "starting alpha-beta search"
        );

        let start_search = Instant::now();

        let evaluation = self.alpha_beta(
            tree.root(),
            &mut principal_variation,
            self.depth, 0,
            self.alpha, self.beta,
            self.maximizing,
            &mut annotations,
            &mut statistics,
        )?;

        statistics.time = start_search.elapsed().as_secs_f32();

        let totals = statistics.totals();
        debug!(
            evaluation = %evaluation, nodes = statistics.nodes(), cutoffs = totals.cutoffs, pruned = totals.pruned,
            "alpha-beta search complete"
        );

        Ok(Analysis {
            evaluation: evaluation,
            principal_variation: principal_variation,
            annotations: annotations,
            statistics: statistics,
        })
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::analysis::search::fixtures;
    use crate::analysis::search::{alpha_beta, minimax, AlphaBetaSearch, MinimaxSearch, Search};
    use crate::error::Error;
    use crate::tree::{Node, NodeId, Tree};

    #[test]
    fn test_two_ply() {
        let tree = Tree::new(Node::branch(vec![Node::leaf(3.0), Node::leaf(5.0)])).unwrap();

        assert_eq!(alpha_beta(&tree, 2, -f64::INFINITY, f64::INFINITY, true).unwrap(), 5.0);
        assert_eq!(alpha_beta(&tree, 2, -f64::INFINITY, f64::INFINITY, false).unwrap(), 3.0);
    }

    #[test]
    fn test_third_child_still_searched() {
        // After the second child alpha is 5, but beta is still infinite, so nothing is pruned.
        let tree = Tree::new(Node::branch(vec![
            Node::leaf(3.0),
            Node::leaf(5.0),
            Node::leaf(2.0),
        ])).unwrap();

        let analysis = AlphaBetaSearch::with_depth(2).search(&tree).unwrap();

        assert_eq!(analysis.evaluation, 5.0);
        assert_eq!(analysis.principal_variation, vec![1]);
        assert_eq!(analysis.statistics.plies[1].evaluated, 3);
        assert_eq!(analysis.statistics.totals().cutoffs, 0);
        assert_eq!(analysis.statistics.totals().pruned, 0);
    }

    #[test]
    fn test_pruning_reduces_visits() {
        let tree = fixtures::prunable();

        let full = MinimaxSearch::with_depth(2).search(&tree).unwrap();
        let pruned = AlphaBetaSearch::with_depth(2).search(&tree).unwrap();

        assert_eq!(full.evaluation, 3);
        assert_eq!(pruned.evaluation, 3);
        assert_eq!(pruned.principal_variation, full.principal_variation);

        assert_eq!(full.statistics.nodes(), 7);
        assert_eq!(pruned.statistics.nodes(), 6);
        assert_eq!(pruned.statistics.plies[1].cutoffs, 1);
        assert_eq!(pruned.statistics.plies[1].pruned, 1);

        // The second reply is abandoned after the leaf 2, and records that value.
        assert_eq!(pruned.annotations.get(NodeId(4)), Some(2));
        assert_eq!(full.annotations.get(NodeId(4)), Some(2));
    }

    #[test]
    fn test_pruned_nodes_are_not_annotated() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(3), Node::leaf(5)]),
            Node::branch(vec![
                Node::leaf(2),
                Node::branch(vec![Node::leaf(8), Node::leaf(9)]),
            ]),
        ])).unwrap();

        let pruned = AlphaBetaSearch::with_depth(3).search(&tree).unwrap();
        assert_eq!(pruned.evaluation, 3);
        assert!(!pruned.annotations.contains(NodeId(6)));
        assert_eq!(pruned.annotations.value_of(tree.get(NodeId(6)).unwrap()), None);

        let full = MinimaxSearch::with_depth(3).search(&tree).unwrap();
        assert_eq!(full.annotations.get(NodeId(6)), Some(9));

        let mut written = tree.clone();
        pruned.annotations.write_back(&mut written);
        assert_eq!(written.root().value(), Some(3));
        assert_eq!(written.get(NodeId(6)).unwrap().value(), None);
    }

    #[test]
    fn test_four_ply() {
        let tree = fixtures::four_ply();

        let full = MinimaxSearch::with_depth(4).search(&tree).unwrap();
        let pruned = AlphaBetaSearch::with_depth(4).search(&tree).unwrap();

        assert_eq!(pruned.evaluation, 4.0);
        assert_eq!(pruned.principal_variation, vec![1, 0, 0, 0]);
        assert!(pruned.statistics.nodes() < full.statistics.nodes());
        assert!(pruned.statistics.totals().cutoffs > 0);
    }

    #[test]
    fn test_tie_keeps_leftmost() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(4), Node::leaf(6)]),
            Node::branch(vec![Node::leaf(7), Node::leaf(4)]),
            Node::branch(vec![Node::leaf(4)]),
        ])).unwrap();

        let analysis = AlphaBetaSearch::new().search(&tree).unwrap();
        assert_eq!(analysis.evaluation, 4);
        assert_eq!(analysis.principal_variation, vec![0, 0]);
    }

    #[test]
    fn test_closed_window_visits_first_child() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(1), Node::leaf(2)]),
            Node::branch(vec![Node::leaf(3), Node::leaf(4)]),
        ])).unwrap();

        let analysis = AlphaBetaSearch::with_depth(2).with_window(0, 0).search(&tree).unwrap();

        assert_eq!(analysis.evaluation, 1);
        assert_eq!(analysis.statistics.plies[0].visited, 1);
        assert_eq!(analysis.statistics.plies[1].visited, 1);
        assert_eq!(analysis.statistics.plies[2].evaluated, 1);
        assert_eq!(analysis.statistics.totals().pruned, 2);
    }

    #[test]
    fn test_invalid_window() {
        let tree = fixtures::prunable();

        match alpha_beta(&tree, 2, 5, 4, true) {
            Err(Error::InvalidWindow { alpha, beta }) => {
                assert_eq!(alpha, "5");
                assert_eq!(beta, "4");
            },
            other => panic!("unexpected result: {:?}", other),
        }

        let tree = fixtures::four_ply();
        match alpha_beta(&tree, 4, f64::NAN, f64::INFINITY, true) {
            Err(Error::InvalidWindow { .. }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_tree_is_not_modified() {
        let tree = fixtures::four_ply();
        let before = tree.clone();

        AlphaBetaSearch::new().search(&tree).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_matches_minimax() {
        let mut rng = StdRng::seed_from_u64(0x7a3e_55c1);

        for _ in 0..300 {
            let tree = fixtures::random(&mut rng, 6);

            for depth in 0..8 {
                for &maximizing in &[true, false] {
                    let full = minimax(&tree, depth, maximizing).unwrap();
                    let pruned = alpha_beta(&tree, depth, -i32::MAX, i32::MAX, maximizing).unwrap();
                    assert_eq!(pruned, full, "depth {} maximizing {}\n{}", depth, maximizing, tree);
                }
            }
        }
    }

    #[test]
    fn test_matches_minimax_at_root_choice() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..300 {
            let tree = fixtures::random(&mut rng, 5);

            let full = MinimaxSearch::new().search(&tree).unwrap();
            let pruned = AlphaBetaSearch::new().search(&tree).unwrap();

            assert_eq!(pruned.evaluation, full.evaluation);
            assert_eq!(pruned.principal_variation.first(), full.principal_variation.first());
            assert!(pruned.statistics.nodes() <= full.statistics.nodes());
        }
    }

    #[test]
    fn test_unlimited_depth_reaches_deep_leaves() {
        let tree = fixtures::chain(300, -3);

        let analysis = AlphaBetaSearch::new().minimizing().search(&tree).unwrap();
        assert_eq!(analysis.evaluation, -3);
        assert_eq!(analysis.principal_variation.len(), 300);
        assert_eq!(analysis.statistics.plies.len(), 301);
        assert_eq!(analysis.statistics.plies[300].evaluated, 1);
    }
}
