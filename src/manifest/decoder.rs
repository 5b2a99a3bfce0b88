// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lazy decoder for YAML/JSON manifest streams.
//!
//! Documents are separated by `---` lines (a `...` line also ends a document).
//! Each document is decoded on demand, so an error in document N still leaves
//! documents 0..N usable by the caller.

use crate::error::{Result, SeedError};
use serde_json::Value;

/// One Kubernetes object taken from a manifest stream
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    /// Zero-based position among the objects of the stream
    pub index: usize,
    /// Source text of the document
    pub raw: String,
    /// Decoded object
    pub object: Value,
    pub api_version: String,
    pub kind: String,
}

impl ManifestDocument {
    /// API group of the object, empty for the core group
    pub fn group(&self) -> &str {
        split_api_version(&self.api_version).0
    }

    pub fn version(&self) -> &str {
        split_api_version(&self.api_version).1
    }

    pub fn name(&self) -> Option<&str> {
        self.object.pointer("/metadata/name").and_then(Value::as_str)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.object
            .pointer("/metadata/namespace")
            .and_then(Value::as_str)
            .filter(|ns| !ns.is_empty())
    }
}

/// Split an apiVersion into (group, version)
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

/// Iterator over the objects of a manifest stream.
///
/// Yields `None` once the input is exhausted, and stops after the first error.
pub struct ManifestStream<'a> {
    rest: &'a str,
    next_index: usize,
    failed: bool,
}

/// Decode a multi-document YAML/JSON manifest stream
pub fn decode_manifests(input: &str) -> ManifestStream<'_> {
    ManifestStream {
        rest: input,
        next_index: 0,
        failed: false,
    }
}

impl Iterator for ManifestStream<'_> {
    type Item = Result<ManifestDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && !self.rest.is_empty() {
            let (chunk, rest) = next_document(self.rest);
            self.rest = rest;

            if is_blank(chunk) {
                continue;
            }

            match decode_document(self.next_index, chunk) {
                Ok(Some(doc)) => {
                    self.next_index += 1;
                    return Some(Ok(doc));
                }
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for ManifestStream<'_> {}

fn decode_document(index: usize, chunk: &str) -> Result<Option<ManifestDocument>> {
    let object: Value =
        serde_yaml::from_str(chunk).map_err(|source| SeedError::Decode { index, source })?;

    if object.is_null() {
        return Ok(None);
    }
    if !object.is_object() {
        return Err(SeedError::InvalidDocument {
            index,
            reason: "document is not a mapping".to_string(),
        });
    }

    let api_version = required_string(&object, "apiVersion", index)?;
    let kind = required_string(&object, "kind", index)?;

    Ok(Some(ManifestDocument {
        index,
        raw: chunk.to_string(),
        object,
        api_version,
        kind,
    }))
}

fn required_string(object: &Value, field: &str, index: usize) -> Result<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SeedError::InvalidDocument {
            index,
            reason: format!("missing '{}'", field),
        })
}

/// Split off the first document. Returns (document text, remaining input).
fn next_document(input: &str) -> (&str, &str) {
    let mut start = 0;
    let mut offset = 0;

    for (i, line) in input.split_inclusive('\n').enumerate() {
        if let Some(marker_len) = separator_len(line) {
            if i > 0 {
                return (&input[start..offset], &input[offset..]);
            }
            // Leading marker opens this document; inline content after `---` is kept
            start = marker_len;
        }
        offset += line.len();
    }

    (&input[start..], "")
}

/// Length of the document marker at the start of `line`, if it is one
fn separator_len(line: &str) -> Option<usize> {
    let trimmed = line.trim_end();
    if trimmed == "..." {
        return Some(line.len());
    }
    let rest = trimmed.strip_prefix("---")?;
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(3)
    } else {
        None
    }
}

fn is_blank(chunk: &str) -> bool {
    chunk.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
