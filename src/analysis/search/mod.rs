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

//! Tools for searching the game tree.
//!
//! Both searches walk the tree depth-first, visiting children left to right, and
//! never modify the tree they are given.  The value computed for every expanded node
//! is returned in the `Analysis` instead; see `Annotations::write_back` to store it
//! into the tree.
//!
//! # Example
//!
//! ```rust
//! use tree_search::analysis::search::{alpha_beta, minimax};
//! use tree_search::tree::{Node, Tree};
//!
//! let tree = Tree::new(Node::branch(vec![
//!     Node::branch(vec![Node::leaf(3.0), Node::leaf(5.0)]),
//!     Node::branch(vec![Node::leaf(2.0), Node::leaf(9.0)]),
//! ])).unwrap();
//!
//! assert_eq!(minimax(&tree, 2, true).unwrap(), 3.0);
//! assert_eq!(alpha_beta(&tree, 2, -f64::INFINITY, f64::INFINITY, true).unwrap(), 3.0);
//! ```

use std::fmt;

use crate::analysis::Evaluation;
use crate::error::Error;
use crate::tree::{Node, Tree};

/// The results of a search.
#[derive(Clone, Debug)]
pub struct Analysis<E> where
    E: Evaluation {
    /// The backed-up value of the root.
    pub evaluation: E,
    /// The child index chosen at each ply, starting at the root.  Among equal
    /// children the leftmost is chosen.
    pub principal_variation: Vec<usize>,
    /// The backed-up value of every internal node the search expanded.
    pub annotations: Annotations<E>,
    /// Statistics from the search.
    pub statistics: Statistics,
}

/// Provides search capabilities.
pub trait Search<E> where
    E: Evaluation {
    /// Generates an analysis of `tree`.
    fn search(&mut self, tree: &Tree<E>) -> Result<Analysis<E>, Error>;
}

/// Returns the minimax value of `tree`, searching `depth` plies with the root player
/// maximizing if `maximizing` is `true`.
pub fn minimax<E>(tree: &Tree<E>, depth: u8, maximizing: bool) -> Result<E, Error> where
    E: Evaluation {
    let mut search = MinimaxSearch::with_depth(depth);
    if !maximizing {
        search = search.minimizing();
    }
    Ok(search.search(tree)?.evaluation)
}

/// Returns the minimax value of `tree` as found by alpha-beta search within the
/// window `alpha..=beta`.  A full search is seeded with `E::min()` and `E::max()`.
pub fn alpha_beta<E>(tree: &Tree<E>, depth: u8, alpha: E, beta: E, maximizing: bool) -> Result<E, Error> where
    E: Evaluation {
    let mut search = AlphaBetaSearch::with_depth(depth).with_window(alpha, beta);
    if !maximizing {
        search = search.minimizing();
    }
    Ok(search.search(tree)?.evaluation)
}

/// The value a node reports without being expanded.
fn stored_value<E>(node: &Node<E>) -> Result<E, Error> where
    E: Evaluation {
    node.value().ok_or(Error::UnvaluedHorizon { node: node.id() })
}

/// The starting point of a running extremum, which every child improves upon.
fn worst<E>(maximizing: bool) -> E where
    E: Evaluation {
    if maximizing {
        E::min()
    } else {
        E::max()
    }
}

/// Strict comparison, so that a later child equal to the current best never replaces it.
fn is_better<E>(new: E, old: E, maximizing: bool) -> bool where
    E: Evaluation {
    if maximizing {
        new > old
    } else {
        new < old
    }
}

impl<E> fmt::Display for Analysis<E> where
    E: Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Evaluation: {}", self.evaluation)?;
        write!(f, "Principal Variation:")?;
        if self.principal_variation.is_empty() {
            write!(f, " -")?;
        }
        for index in &self.principal_variation {
            write!(f, " {}", index)?;
        }
        write!(f, "\nStatistics:\n{}", self.statistics)
    }
}

pub use self::alpha_beta::AlphaBetaSearch;
pub use self::annotations::Annotations;
pub use self::minimax::MinimaxSearch;
pub use self::statistics::{Statistics, StatisticsLevel};

mod alpha_beta;
mod annotations;
mod minimax;
mod statistics;


#[cfg(test)]
mod test {
    use crate::tree::description::load_trees;
    use super::{alpha_beta, minimax, MinimaxSearch, Search};

    fn demo(name: &str) -> String {
        format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn test_demo_two_ply() {
        let trees = load_trees::<f64, _>(demo("two_ply_tree_structure.json")).unwrap();
        assert_eq!(trees.len(), 1);

        assert_eq!(minimax(&trees[0], 2, true).unwrap(), 5.0);
        assert_eq!(alpha_beta(&trees[0], 2, -f64::INFINITY, f64::INFINITY, true).unwrap(), 5.0);
    }

    #[test]
    fn test_demo_four_ply() {
        let trees = load_trees::<f64, _>(demo("four_ply_tree_structures.json")).unwrap();
        let expected = [4.0, 1.0];
        assert_eq!(trees.len(), expected.len());

        for (tree, &value) in trees.iter().zip(&expected) {
            assert_eq!(tree.height(), 4);
            assert_eq!(minimax(tree, 4, true).unwrap(), value);
            assert_eq!(alpha_beta(tree, 4, -f64::INFINITY, f64::INFINITY, true).unwrap(), value);
        }
    }

    #[test]
    fn test_analysis_display() {
        let trees = load_trees::<f64, _>(demo("two_ply_tree_structure.json")).unwrap();
        let analysis = MinimaxSearch::new().search(&trees[0]).unwrap();

        let text = format!("{}", analysis);
        assert!(text.starts_with("Evaluation: 5\nPrincipal Variation: 1\nStatistics:\n"));
        assert!(text.contains("Evaluated:"));
    }
}
