// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use anyhow::{anyhow, Error};
use hashlink::LinkedHashMap;
use saphyr::{Yaml, YamlLoader};

use super::{Node, Scalar};

pub fn parse_yaml_str(input: &str) -> Result<Vec<Node>, Error> {
    let docs = YamlLoader::load_from_str(input)?;

    let mut nodes = Vec::with_capacity(docs.len());
    for doc in docs {
        nodes.push(convert_node(doc)?);
    }
    Ok(nodes)
}

pub fn load_single_document(input: &str) -> Result<Node, Error> {
    let mut docs = parse_yaml_str(input)?;
    match docs.len() {
        0 => Ok(Node::Null),
        1 => Ok(docs.remove(0)),
        count => Err(anyhow!("input yaml must only have a single document (found {})", count)),
    }
}

/// Types a plain (unquoted) scalar the way the YAML loader would. An empty string is null.
///
/// The typed value is only kept when its text form is exactly `value`, so spellings such as
/// `01234`, `0x1F`, `+1` or `~` stay strings.
pub fn scalar_from_plain_str(value: &str) -> Node {
    if value.is_empty() {
        return Node::Null;
    }

    let scalar = match Yaml::from_str(value) {
        Yaml::Real(value) => Scalar::Real(value),
        Yaml::Integer(value) => Scalar::Integer(value),
        Yaml::Boolean(value) => Scalar::Boolean(value),
        _ => return Node::string(value),
    };
    if scalar.to_text() == value {
        Node::Scalar(scalar)
    } else {
        Node::string(value)
    }
}

fn convert_node(yaml: Yaml) -> Result<Node, Error> {
    let node = match yaml {
        Yaml::Hash(hash) => {
            let mut map = LinkedHashMap::new();
            for (key, value) in hash {
                let key = convert_key(key)?;
                let value = convert_node(value)?;
                map.insert(key, value);
            }
            Node::Mapping(map)
        }
        Yaml::Array(values) => {
            let values = values.into_iter().map(convert_node).collect::<Result<Vec<_>, _>>()?;
            Node::Sequence(values)
        }
        Yaml::Real(value) => Node::Scalar(Scalar::Real(value)),
        Yaml::Integer(value) => Node::Scalar(Scalar::Integer(value)),
        Yaml::String(value) => Node::string(value),
        Yaml::Boolean(value) => Node::Scalar(Scalar::Boolean(value)),
        Yaml::Null => Node::Null,
        // Anything else is kept as text rather than rejected.
        Yaml::Alias(index) => Node::string(format!("*{}", index)),
        Yaml::BadValue => Node::string(String::new()),
    };
    Ok(node)
}

fn convert_key(key: Yaml) -> Result<String, Error> {
    match key {
        Yaml::String(value) | Yaml::Real(value) => Ok(value),
        Yaml::Integer(value) => Ok(value.to_string()),
        Yaml::Boolean(value) => Ok(value.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Hash(_) | Yaml::Array(_) => Err(anyhow!("complex mapping keys are not supported")),
        Yaml::Alias(_) | Yaml::BadValue => Err(anyhow!("unresolvable mapping key")),
    }
}
