// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use anyhow::Error;
use hashlink::LinkedHashMap;
use saphyr::{Yaml, YamlEmitter};

use super::{Node, Scalar};

pub fn yaml_emit_to_string(docs: &[Node]) -> Result<String, Error> {
    let mut out_str = String::new();
    for doc in docs {
        // The emitter does not terminate a document, so each one gets its own buffer.
        let mut doc_str = String::new();
        {
            let mut emitter = YamlEmitter::new(&mut doc_str);
            emitter.dump(&to_yaml(doc))?;
        }
        out_str.push_str(&doc_str);
        out_str.push('\n');
    }
    Ok(out_str)
}

fn to_yaml(node: &Node) -> Yaml {
    match node {
        Node::Mapping(map) => {
            let mut hash = LinkedHashMap::new();
            for (key, value) in map {
                hash.insert(Yaml::String(key.clone()), to_yaml(value));
            }
            Yaml::Hash(hash)
        }
        Node::Sequence(values) => Yaml::Array(values.iter().map(to_yaml).collect()),
        Node::Scalar(Scalar::String(value)) => Yaml::String(value.clone()),
        Node::Scalar(Scalar::Integer(value)) => Yaml::Integer(*value),
        Node::Scalar(Scalar::Real(value)) => Yaml::Real(value.clone()),
        Node::Scalar(Scalar::Boolean(value)) => Yaml::Boolean(*value),
        Node::Null => Yaml::Null,
    }
}
