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

//! Building trees from JSON descriptions.
//!
//! A description is one object per node:
//!
//! ```json
//! { "value": 3, "children": [ { "value": 5 }, { "children": [ { "value": 1 } ] } ] }
//! ```
//!
//! `children` may be omitted on terminal nodes, and `value` may be omitted (or
//! `null`) on internal nodes.  A document holds either one tree object or a list of
//! them.

use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{self, DeserializeOwned, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::analysis::Evaluation;
use crate::error::Error;
use super::{Node, Tree};

/// One node of a description.  Only JSON objects are accepted; an array in place of
/// a node is an error, not a node read field by field.
#[derive(Debug)]
struct NodeDescription<E> {
    value: Option<E>,
    children: Vec<NodeDescription<E>>,
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Value,
    Children,
    #[serde(other)]
    Other,
}

impl<E> NodeDescription<E> where
    E: DeserializeOwned {
    fn from_map<'de, A>(mut map: A) -> Result<NodeDescription<E>, A::Error> where
        A: MapAccess<'de> {
        let mut value = None;
        let mut children = None;

        while let Some(field) = map.next_key()? {
            match field {
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value::<Option<E>>()?);
                },
                Field::Children => {
                    if children.is_some() {
                        return Err(de::Error::duplicate_field("children"));
                    }
                    children = Some(map.next_value::<Vec<NodeDescription<E>>>()?);
                },
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                },
            }
        }

        Ok(NodeDescription {
            value: value.flatten(),
            children: children.unwrap_or_default(),
        })
    }
}

struct NodeVisitor<E>(PhantomData<E>);

impl<'de, E> Visitor<'de> for NodeVisitor<E> where
    E: DeserializeOwned {
    type Value = NodeDescription<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a node object")
    }

    fn visit_map<A>(self, map: A) -> Result<NodeDescription<E>, A::Error> where
        A: MapAccess<'de> {
        NodeDescription::from_map(map)
    }
}

impl<'de, E> Deserialize<'de> for NodeDescription<E> where
    E: DeserializeOwned {
    fn deserialize<D>(deserializer: D) -> Result<NodeDescription<E>, D::Error> where
        D: Deserializer<'de> {
        deserializer.deserialize_map(NodeVisitor(PhantomData))
    }
}

/// A whole document: one node object, or a list of them.
struct Document<E>(Vec<NodeDescription<E>>);

struct DocumentVisitor<E>(PhantomData<E>);

impl<'de, E> Visitor<'de> for DocumentVisitor<E> where
    E: DeserializeOwned {
    type Value = Document<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a node object or a list of node objects")
    }

    fn visit_map<A>(self, map: A) -> Result<Document<E>, A::Error> where
        A: MapAccess<'de> {
        Ok(Document(vec![NodeDescription::from_map(map)?]))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Document<E>, A::Error> where
        A: SeqAccess<'de> {
        let mut descriptions = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(description) = seq.next_element()? {
            descriptions.push(description);
        }
        Ok(Document(descriptions))
    }
}

impl<'de, E> Deserialize<'de> for Document<E> where
    E: DeserializeOwned {
    fn deserialize<D>(deserializer: D) -> Result<Document<E>, D::Error> where
        D: Deserializer<'de> {
        deserializer.deserialize_any(DocumentVisitor(PhantomData))
    }
}

impl<E> NodeDescription<E> where
    E: Evaluation {
    fn into_node(self) -> Node<E> {
        Node::new(
            self.value,
            self.children.into_iter().map(NodeDescription::into_node).collect(),
        )
    }
}

impl<E> Tree<E> where
    E: Evaluation + DeserializeOwned {
    /// Builds a single tree from a JSON object.
    pub fn from_json(json: &str) -> Result<Tree<E>, Error> {
        let description: NodeDescription<E> = serde_json::from_str(json)?;
        Tree::new(description.into_node())
    }
}

/// Builds every tree in `json`, which holds either one tree object or a list of them.
pub fn parse_trees<E>(json: &str) -> Result<Vec<Tree<E>>, Error> where
    E: Evaluation + DeserializeOwned {
    let Document(descriptions) = serde_json::from_str::<Document<E>>(json)?;

    descriptions.into_iter()
        .map(|description| Tree::new(description.into_node()))
        .collect()
}

/// Reads `path` and builds every tree it describes.
pub fn load_trees<E, P>(path: P) -> Result<Vec<Tree<E>>, Error> where
    E: Evaluation + DeserializeOwned,
    P: AsRef<Path> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|error| Error::Io {
        path: path.display().to_string(),
        source: error,
    })?;

    let trees = parse_trees(&json)?;
    debug!(path = %path.display(), trees = trees.len(), "loaded tree description");
    Ok(trees)
}
