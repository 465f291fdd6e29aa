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

use std::io;

use thiserror::Error;

use crate::tree::NodeId;

/// Everything that can go wrong while building or searching a tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A terminal node was supplied without a value.
    #[error("terminal node {node} has no value")]
    UnvaluedLeaf { node: NodeId },

    /// A node holds a value that cannot be ordered against other values, i.e. NaN.
    #[error("node {node} holds a value that cannot be compared")]
    InvalidValue { node: NodeId },

    /// The search horizon fell on an internal node that has no stored value.
    #[error("node {node} reached the search horizon without a stored value")]
    UnvaluedHorizon { node: NodeId },

    /// The initial alpha-beta window is empty or unordered.
    #[error("invalid search window: alpha {alpha} is not at most beta {beta}")]
    InvalidWindow { alpha: String, beta: String },

    #[error("malformed tree description: {0}")]
    Description(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
