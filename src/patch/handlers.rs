// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-kind patch handlers.
//!
//! StorageClass, Secret and PersistentVolumeClaim are rewritten as whole objects
//! through their `k8s-openapi` types, which drops any field those types do not
//! model. The remaining kinds only rewrite `spec`; the rest of the object is
//! left as decoded.

use crate::constants::volumes::SECRET_VOLUMES;
use crate::overrides::{
    ClusterOverride, InfraClusterOverride, KindOverride, MetadataOverride,
    PersistentVolumeClaimOverride, SecretOverride, StorageClassOverride, WorkloadOverride,
};
use crate::patch::prune::prune_value;
use crate::types::{ClusterSpec, OpenStackClusterSpec};
use k8s_openapi::api::apps::v1::{DaemonSetSpec, DeploymentSpec};
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, PodSpec, Secret};
use k8s_openapi::api::storage::v1::StorageClass;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Apply one kind's override to a decoded object
pub(crate) fn apply_override(
    object: &mut Value,
    kind_override: KindOverride<'_>,
) -> serde_json::Result<()> {
    match kind_override {
        KindOverride::StorageClass(o) => rewrite_object(object, |sc: &mut StorageClass| {
            patch_storage_class(sc, o)
        }),
        KindOverride::Secret(o) => rewrite_object(object, |secret: &mut Secret| patch_secret(secret, o)),
        KindOverride::PersistentVolumeClaim(o) => {
            rewrite_object(object, |pvc: &mut PersistentVolumeClaim| {
                patch_persistent_volume_claim(pvc, o)
            })?;
            if let Some(spec) = object.get_mut("spec") {
                prune_value(spec);
            }
            Ok(())
        }
        KindOverride::InfraCluster(o) => rewrite_spec(object, |spec: &mut OpenStackClusterSpec| {
            patch_infra_cluster(spec, o)
        }),
        KindOverride::Cluster(o) => rewrite_spec(object, |spec: &mut ClusterSpec| patch_cluster(spec, o)),
        KindOverride::DaemonSet(o) => rewrite_spec(object, |spec: &mut DaemonSetSpec| {
            rewrite_volume_secrets(spec.template.spec.as_mut(), o)
        }),
        KindOverride::Deployment(o) => rewrite_spec(object, |spec: &mut DeploymentSpec| {
            rewrite_volume_secrets(spec.template.spec.as_mut(), o)
        }),
    }
}

/// Convert the whole object to `T`, patch it and replace the object with the result.
///
/// `apiVersion` and `kind` bypass the typed shape, which only accepts its own
/// compiled-in version, and are restored as the document had them.
fn rewrite_object<T, F>(object: &mut Value, patch: F) -> serde_json::Result<()>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(&mut T),
{
    let type_meta: Vec<(String, Value)> = object
        .as_object_mut()
        .map(|map| {
            TYPE_META_KEYS
                .iter()
                .filter_map(|key| map.remove_entry(*key))
                .collect()
        })
        .unwrap_or_default();

    let mut typed = T::deserialize(&*object)?;
    patch(&mut typed);
    *object = serde_json::to_value(&typed)?;

    if let Some(map) = object.as_object_mut() {
        map.extend(type_meta);
    }
    Ok(())
}

const TYPE_META_KEYS: [&str; 2] = ["apiVersion", "kind"];

/// Convert `spec` to `T`, patch it, prune it and splice it back in
fn rewrite_spec<T, F>(object: &mut Value, patch: F) -> serde_json::Result<()>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(&mut T),
{
    let mut typed = match object.get("spec") {
        Some(spec) => T::deserialize(spec)?,
        None => T::deserialize(&Value::Object(Map::new()))?,
    };
    patch(&mut typed);

    let mut spec = serde_json::to_value(&typed)?;
    prune_value(&mut spec);
    if let Some(map) = object.as_object_mut() {
        map.insert("spec".to_string(), spec);
    }
    Ok(())
}

fn patch_storage_class(sc: &mut StorageClass, o: &StorageClassOverride) {
    if !o.parameters.is_empty() {
        sc.parameters = Some(o.parameters.clone());
    }
}

fn patch_secret(secret: &mut Secret, o: &SecretOverride) {
    if !o.data.is_empty() {
        secret.data = Some(o.data.clone());
    }
    patch_metadata(&mut secret.metadata, &o.metadata);
}

fn patch_persistent_volume_claim(
    pvc: &mut PersistentVolumeClaim,
    o: &PersistentVolumeClaimOverride,
) {
    patch_metadata(&mut pvc.metadata, &o.metadata);

    if o.storage.is_empty() && o.storage_class_name.is_empty() && o.volume_mode.is_empty() {
        return;
    }
    let spec = pvc.spec.get_or_insert_with(Default::default);

    if !o.storage.is_empty() {
        spec.resources
            .get_or_insert_with(Default::default)
            .requests
            .get_or_insert_with(Default::default)
            .insert("storage".to_string(), Quantity(o.storage.clone()));
    }
    if !o.storage_class_name.is_empty() {
        spec.storage_class_name = Some(o.storage_class_name.clone());
    }
    if !o.volume_mode.is_empty() {
        spec.volume_mode = Some(o.volume_mode.clone());
    }
}

fn patch_metadata(meta: &mut ObjectMeta, o: &MetadataOverride) {
    if !o.name.is_empty() {
        meta.name = Some(o.name.clone());
    }
    if !o.namespace.is_empty() {
        meta.namespace = Some(o.namespace.clone());
    }
    if !o.labels.is_empty() {
        meta.labels = Some(o.labels.clone());
    }
    if !o.annotations.is_empty() {
        meta.annotations = Some(o.annotations.clone());
    }
}

fn patch_infra_cluster(spec: &mut OpenStackClusterSpec, o: &InfraClusterOverride) {
    if !o.node_cidr.is_empty() {
        spec.node_cidr = Some(o.node_cidr.clone());
    }
    spec.allow_all_in_cluster_traffic = Some(o.allow_all_in_cluster_traffic);
}

fn patch_cluster(spec: &mut ClusterSpec, o: &ClusterOverride) {
    if !o.pod_cidr_blocks.is_empty() {
        debug!(
            "Replacing pod CIDR blocks {:?} with {:?}",
            spec.pod_cidr_blocks(),
            o.pod_cidr_blocks
        );
        spec.set_pod_cidr_blocks(o.pod_cidr_blocks.clone());
    }
}

/// Point the cloud-config and Cinder plugin volumes at the override secret
fn rewrite_volume_secrets(pod: Option<&mut PodSpec>, o: &WorkloadOverride) {
    if o.volume_secret_name.is_empty() {
        return;
    }
    let Some(volumes) = pod.and_then(|p| p.volumes.as_mut()) else {
        return;
    };

    for volume in volumes
        .iter_mut()
        .filter(|v| SECRET_VOLUMES.contains(&v.name.as_str()))
    {
        if let Some(secret) = volume.secret.as_mut() {
            debug!(
                "Rewriting secret of volume {} to {}",
                volume.name, o.volume_secret_name
            );
            secret.secret_name = Some(o.volume_secret_name.clone());
        }
    }
}
