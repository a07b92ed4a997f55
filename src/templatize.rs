// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod templatize_run;


use crate::{
    document::Node,
    error::TemplatizeError,
    params::{CollisionPolicy, ParameterTable},
};

use templatize_run::TemplatizeRun;

pub const DEFAULT_SITES_KEY: &str = "sites";
pub const DEFAULT_ELEMENTS_KEY: &str = "elements";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplatizeOptions {
    /// Null leaves become empty strings with no placeholder and no parameter.
    pub ignore_nulls: bool,
    pub on_collision: CollisionPolicy,
    pub sites_key: String,
    pub elements_key: String,
}

impl Default for TemplatizeOptions {
    fn default() -> Self {
        TemplatizeOptions {
            ignore_nulls: false,
            on_collision: CollisionPolicy::default(),
            sites_key: DEFAULT_SITES_KEY.to_string(),
            elements_key: DEFAULT_ELEMENTS_KEY.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Templatized {
    pub document: Node,
    pub params: ParameterTable,
}

/// Builds a template of `doc` plus the parameters that re-create it. `doc` is not modified.
pub fn templatize(doc: &Node, options: &TemplatizeOptions) -> Result<Templatized, TemplatizeError> {
    let mut run = TemplatizeRun::new(options);
    let renamed = run.rename_sites(doc)?;
    let document = run.templatize_node(renamed, "")?;
    let params = run.into_params();
    Ok(Templatized { document, params })
}
