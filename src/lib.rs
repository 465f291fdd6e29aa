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

//! Minimax and alpha-beta evaluation of pre-built game trees.
//!
//! This crate evaluates a fixed game tree for the player to move, either with a
//! full-width minimax search or with alpha-beta pruning.  Both searches return the
//! same value for the same tree, depth, and starting player; alpha-beta only visits
//! fewer nodes.
//!
//! # Usage
//!
//! Build a `tree::Tree` from `tree::Node`s, or load one from a JSON description with
//! `tree::description::load_trees`, then run a search from `analysis::search`:
//!
//! ```rust
//! use tree_search::analysis::search::{AlphaBetaSearch, MinimaxSearch, Search};
//! use tree_search::tree::Tree;
//!
//! let tree = Tree::<f64>::from_json(r#"{ "children": [
//!     { "children": [ { "value": 3 }, { "value": 5 } ] },
//!     { "children": [ { "value": 2 }, { "value": 9 } ] }
//! ] }"#).unwrap();
//!
//! let full = MinimaxSearch::new().search(&tree).unwrap();
//! let pruned = AlphaBetaSearch::new().search(&tree).unwrap();
//!
//! assert_eq!(full.evaluation, 3.0);
//! assert_eq!(pruned.evaluation, 3.0);
//! assert!(pruned.statistics.nodes() < full.statistics.nodes());
//! ```
//!
//! # Implementation
//!
//! Node values are any `analysis::Evaluation`, which is implemented for the signed
//! primitive numbers.  Searches never modify the tree; the value backed up into each
//! expanded node is returned as `analysis::search::Annotations`.

pub use self::error::Error;

pub mod analysis;
pub mod tree;

mod error;
