// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplatizeError {
    #[error("document has no top-level `{0}` mapping")]
    MissingSites(String),

    #[error("`{0}` must be a mapping of site names to sites")]
    SitesNotMapping(String),

    #[error("identifier `{identifier}` is produced by more than one path (last at `{path}`)")]
    IdentifierCollision { identifier: String, path: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("template references unknown parameter `{0}`")]
    UnknownParameter(String),
}
