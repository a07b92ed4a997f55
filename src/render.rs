// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    document::{scalar_from_plain_str, Mapping, Node, Scalar},
    error::RenderError,
    params::ParameterTable,
    sanitize::placeholder_identifier,
};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").unwrap());

/// Fills a template's placeholder tokens from `params`.
///
/// A value that is exactly one token takes the parameter's plain-scalar type, so `8080` comes
/// back as an integer and an empty parameter comes back as null. Tokens inside longer strings
/// and inside mapping keys are substituted as text.
pub fn render(template: &Node, params: &ParameterTable) -> Result<Node, RenderError> {
    match template {
        Node::Mapping(map) => {
            let mut rendered = Mapping::with_capacity(map.len());
            for (key, value) in map {
                let key = substitute_text(key, params)?;
                let value = render(value, params)?;
                rendered.insert(key, value);
            }
            Ok(Node::Mapping(rendered))
        }
        Node::Sequence(values) => {
            let values = values.iter().map(|value| render(value, params)).collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Sequence(values))
        }
        Node::Scalar(Scalar::String(value)) => match placeholder_identifier(value) {
            Some(identifier) => Ok(scalar_from_plain_str(lookup(params, identifier)?)),
            None => Ok(Node::string(substitute_text(value, params)?)),
        },
        Node::Scalar(_) | Node::Null => Ok(template.clone()),
    }
}

fn substitute_text(text: &str, params: &ParameterTable) -> Result<String, RenderError> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in TOKEN_RE.captures_iter(text) {
        let (Some(token), Some(identifier)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&text[last..token.start()]);
        out.push_str(lookup(params, identifier.as_str())?);
        last = token.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

fn lookup<'a>(params: &'a ParameterTable, identifier: &str) -> Result<&'a str, RenderError> {
    params
        .get(identifier)
        .ok_or_else(|| RenderError::UnknownParameter(identifier.to_string()))
}
