// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

#[cfg(test)]
mod tests;

use std::io;

use anyhow::{Context, Error};
use hashlink::LinkedHashMap;
use tracing::warn;

use crate::error::TemplatizeError;

/// What to do when two paths sanitize to the same identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Keep the first entry's position but take the later value.
    #[default]
    Overwrite,
    Fail,
}

/// Identifier to original value, in first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterTable {
    entries: LinkedHashMap<String, String>,
}

impl ParameterTable {
    pub fn new() -> ParameterTable {
        ParameterTable::default()
    }

    pub fn record(
        &mut self,
        identifier: String,
        value: String,
        path: &str,
        policy: CollisionPolicy,
    ) -> Result<(), TemplatizeError> {
        match self.entries.get_mut(&identifier) {
            None => {
                self.entries.insert(identifier, value);
            }
            Some(existing) => match policy {
                CollisionPolicy::Overwrite => {
                    warn!(identifier = %identifier, path, previous = %existing, "identifier collision, overwriting");
                    *existing = value;
                }
                CollisionPolicy::Fail => {
                    return Err(TemplatizeError::IdentifierCollision {
                        identifier,
                        path: path.to_string(),
                    })
                }
            },
        }
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Writes a header row of identifiers followed by one row of values. An empty table writes nothing.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Ok(());
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.iter().map(|(identifier, _)| identifier))?;
        csv_writer.write_record(self.iter().map(|(_, value)| value))?;
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        let out_str = String::from_utf8(buf).context("parameter table is not valid utf-8")?;
        Ok(out_str)
    }

    /// Reads one table per data row.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ParameterTable>, Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut tables = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record.with_context(|| format!("failed to read parameter row {}", index + 1))?;

            let mut table = ParameterTable::new();
            for (identifier, value) in headers.iter().zip(record.iter()) {
                table.entries.insert(identifier.to_string(), value.to_string());
            }
            tables.push(table);
        }
        Ok(tables)
    }
}

impl FromIterator<(String, String)> for ParameterTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        ParameterTable {
            entries: iter.into_iter().collect(),
        }
    }
}
