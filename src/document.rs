// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Generic document tree handed between the loader, the templatizer and the emitter.

mod emitter;
mod loader;


use hashlink::LinkedHashMap;

pub use emitter::yaml_emit_to_string;
pub use loader::{load_single_document, parse_yaml_str, scalar_from_plain_str};

pub type Mapping = LinkedHashMap<String, Node>;

#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Scalar(Scalar),
    Null,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Scalar {
    String(String),
    Integer(i64),
    // Numbers that don't fit in an i64 (e.g. floating point). Kept as written in the source.
    Real(String),
    Boolean(bool),
}

impl Scalar {
    pub fn to_text(&self) -> String {
        match self {
            Scalar::String(value) | Scalar::Real(value) => value.clone(),
            Scalar::Integer(value) => value.to_string(),
            Scalar::Boolean(value) => value.to_string(),
        }
    }
}

impl Node {
    pub fn string(value: impl Into<String>) -> Node {
        Node::Scalar(Scalar::String(value.into()))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }
}
