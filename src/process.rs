// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use anyhow::{anyhow, Error};

use crate::{
    document::{load_single_document, yaml_emit_to_string},
    params::ParameterTable,
    render::render,
    templatize::{templatize, TemplatizeOptions},
};

pub struct TemplatizedOutput {
    pub template_yaml: String,
    pub params_csv: String,
    pub param_count: usize,
}

pub fn templatize_yaml_str(input: &str, options: &TemplatizeOptions) -> Result<TemplatizedOutput, Error> {
    let doc = load_single_document(input)?;
    let templatized = templatize(&doc, options)?;

    let template_yaml = yaml_emit_to_string(&[templatized.document])?;
    let params_csv = templatized.params.to_csv_string()?;
    Ok(TemplatizedOutput {
        template_yaml,
        params_csv,
        param_count: templatized.params.len(),
    })
}

/// Renders the template once per parameter row, one document each.
pub fn render_yaml_str(template_string: &str, params_csv: &str) -> Result<String, Error> {
    let template = load_single_document(template_string)?;
    let tables = ParameterTable::read_csv(params_csv.as_bytes())?;
    if tables.is_empty() {
        return Err(anyhow!("parameter table has no data rows"));
    }

    let mut docs = Vec::with_capacity(tables.len());
    for (index, params) in tables.iter().enumerate() {
        let doc = render(&template, params).map_err(|err| anyhow!("row {}: {}", index + 1, err))?;
        docs.push(doc);
    }

    let out_str = yaml_emit_to_string(&docs)?;
    Ok(out_str)
}
