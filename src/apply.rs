// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolves a document's REST location and creates it.

use crate::error::{Result, SeedError};
use crate::kubernetes::{ObjectCreator, RestMapper};
use crate::manifest::ManifestDocument;
use kube::api::{DynamicObject, GroupVersionKind};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

/// Create one document against the cluster.
///
/// Namespaced objects without a namespace are created in `fallback_namespace`.
/// Cluster-scoped objects are created without a namespace, whatever the
/// document says.
#[instrument(skip_all, fields(index = doc.index, kind = %doc.kind))]
pub async fn apply_document<M, C>(
    doc: ManifestDocument,
    mapper: &mut M,
    creator: &C,
    fallback_namespace: &str,
) -> Result<()>
where
    M: RestMapper,
    C: ObjectCreator,
{
    let gvk = GroupVersionKind::gvk(doc.group(), doc.version(), &doc.kind);
    let Some(mapping) = mapper.rest_mapping(&gvk).await? else {
        return Err(SeedError::MappingNotFound {
            index: doc.index,
            api_version: doc.api_version,
            kind: doc.kind,
        });
    };

    let requested_namespace = doc.namespace().map(str::to_string);
    let ManifestDocument {
        index,
        kind,
        mut object,
        ..
    } = doc;

    let meta = metadata_mut(&mut object).ok_or_else(|| SeedError::InvalidDocument {
        index,
        reason: "metadata is not a mapping".to_string(),
    })?;
    let namespace = if mapping.is_namespaced() {
        let ns = requested_namespace.unwrap_or_else(|| fallback_namespace.to_string());
        meta.insert("namespace".to_string(), Value::String(ns.clone()));
        Some(ns)
    } else {
        meta.remove("namespace");
        None
    };

    let object: DynamicObject =
        serde_json::from_value(object).map_err(|source| SeedError::Conversion {
            index,
            kind: kind.clone(),
            source,
        })?;
    let name = object
        .metadata
        .name
        .clone()
        .or_else(|| object.metadata.generate_name.clone())
        .unwrap_or_default();

    debug!(
        "Creating {} '{}' as {} in {:?}",
        kind, name, mapping.resource.plural, namespace
    );

    creator
        .create(&mapping, namespace.as_deref(), &object)
        .await
        .map_err(|source| SeedError::Create {
            index,
            kind: kind.clone(),
            name: name.clone(),
            source,
        })?;

    match &namespace {
        Some(ns) => info!("Created {} {}/{}", kind, ns, name),
        None => info!("Created {} {}", kind, name),
    }
    Ok(())
}

/// The object's metadata map, created when missing or null.
/// `None` when metadata holds anything other than a map.
fn metadata_mut(object: &mut Value) -> Option<&mut Map<String, Value>> {
    let root = object.as_object_mut()?;
    let meta = root
        .entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()));
    if meta.is_null() {
        *meta = Value::Object(Map::new());
    }
    meta.as_object_mut()
}
