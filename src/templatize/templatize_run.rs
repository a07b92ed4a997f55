// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use tracing::debug;

use crate::{
    document::{Mapping, Node},
    error::TemplatizeError,
    params::ParameterTable,
    sanitize::{placeholder, placeholder_identifier, sanitize_identifier},
};

use super::TemplatizeOptions;

pub struct TemplatizeRun<'a> {
    options: &'a TemplatizeOptions,
    params: ParameterTable,
}

impl TemplatizeRun<'_> {
    pub fn new<'a>(options: &'a TemplatizeOptions) -> TemplatizeRun<'a> {
        TemplatizeRun {
            options,
            params: ParameterTable::new(),
        }
    }

    pub fn into_params(self) -> ParameterTable {
        self.params
    }

    /// Replaces every site key, and every element key below it, with a positional alias.
    pub fn rename_sites(&mut self, doc: &Node) -> Result<Node, TemplatizeError> {
        let options = self.options;
        let sites_key = &options.sites_key;
        let Some(root) = doc.as_mapping() else {
            return Err(TemplatizeError::MissingSites(sites_key.clone()));
        };
        let sites = match root.get(sites_key) {
            Some(Node::Mapping(sites)) => sites,
            Some(_) => return Err(TemplatizeError::SitesNotMapping(sites_key.clone())),
            None => return Err(TemplatizeError::MissingSites(sites_key.clone())),
        };

        let mut renamed_sites = Mapping::new();
        for (index, (site_name, site)) in sites.iter().enumerate() {
            let site_token = placeholder(&format!("site_{}", index + 1));
            let site_alias = self.identifier(&site_token);
            debug!(site = %site_name, alias = %site_alias, "renaming site");
            self.record(site_alias.clone(), site_name.clone(), &site_token)?;

            let site = self.rename_elements(&site_alias, site)?;
            renamed_sites.insert(site_token, site);
        }

        let mut renamed_root = root.clone();
        if let Some(slot) = renamed_root.get_mut(sites_key) {
            *slot = Node::Mapping(renamed_sites);
        }
        Ok(Node::Mapping(renamed_root))
    }

    fn rename_elements(&mut self, site_alias: &str, site: &Node) -> Result<Node, TemplatizeError> {
        let options = self.options;
        let elements_key = &options.elements_key;
        let Some(site_map) = site.as_mapping() else {
            return Ok(site.clone());
        };
        let elements = match site_map.get(elements_key) {
            Some(Node::Mapping(elements)) => elements,
            Some(_) => {
                debug!(site = %site_alias, "elements collection is not a mapping, leaving it unrenamed");
                return Ok(site.clone());
            }
            None => return Ok(site.clone()),
        };

        let mut renamed_elements = Mapping::new();
        for (index, (element_name, element)) in elements.iter().enumerate() {
            let element_token = placeholder(&format!("{}_element_{}", site_alias, index + 1));
            let element_alias = self.identifier(&element_token);
            debug!(element = %element_name, alias = %element_alias, "renaming element");
            self.record(element_alias, element_name.clone(), &element_token)?;

            renamed_elements.insert(element_token, element.clone());
        }

        let mut renamed_site = site_map.clone();
        if let Some(slot) = renamed_site.get_mut(elements_key) {
            *slot = Node::Mapping(renamed_elements);
        }
        Ok(Node::Mapping(renamed_site))
    }

    /// Depth-first walk replacing each leaf with a placeholder token.
    pub fn templatize_node(&mut self, node: Node, path: &str) -> Result<Node, TemplatizeError> {
        match node {
            Node::Mapping(map) => {
                let mut templ_map = Mapping::with_capacity(map.len());
                for (key, value) in map {
                    // An alias is a complete address of its own.
                    let child_path = match placeholder_identifier(&key) {
                        Some(_) => key.clone(),
                        None => format!("{}.{}", path, key),
                    };
                    let value = self.templatize_node(value, &child_path)?;
                    templ_map.insert(key, value);
                }
                Ok(Node::Mapping(templ_map))
            }
            Node::Sequence(values) => {
                let mut templ_values = Vec::with_capacity(values.len());
                for (index, value) in values.into_iter().enumerate() {
                    let child_path = format!("{}.{}", path, index);
                    templ_values.push(self.templatize_node(value, &child_path)?);
                }
                Ok(Node::Sequence(templ_values))
            }
            Node::Null if self.options.ignore_nulls => Ok(Node::string("")),
            Node::Null => self.templatize_leaf(path, String::new()),
            Node::Scalar(scalar) => self.templatize_leaf(path, scalar.to_text()),
        }
    }

    fn templatize_leaf(&mut self, path: &str, value: String) -> Result<Node, TemplatizeError> {
        let identifier = self.identifier(path);
        let token = placeholder(&identifier);
        self.record(identifier, value, path)?;
        Ok(Node::string(token))
    }

    fn identifier(&self, path: &str) -> String {
        let identifier = sanitize_identifier(path, &self.options.sites_key);
        match identifier.strip_prefix('_') {
            Some(stripped) => stripped.to_string(),
            None => identifier,
        }
    }

    fn record(&mut self, identifier: String, value: String, path: &str) -> Result<(), TemplatizeError> {
        self.params.record(identifier, value, path, self.options.on_collision)
    }
}
