// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Caller supplied overrides for the well-known manifest kinds.
//!
//! A zero value (empty string, empty map or list) means "leave the field as it is",
//! so an override can never force a field back to empty.

use crate::constants::kinds;
use crate::manifest::decoder::split_api_version;
use k8s_openapi::ByteString;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Overrides for every kind the patch engine knows about
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideSet {
    pub storage_class: Option<StorageClassOverride>,
    pub secret: Option<SecretOverride>,
    pub persistent_volume_claim: Option<PersistentVolumeClaimOverride>,
    pub infra_cluster: Option<InfraClusterOverride>,
    pub cluster: Option<ClusterOverride>,
    pub daemon_set: Option<WorkloadOverride>,
    pub deployment: Option<WorkloadOverride>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageClassOverride {
    /// Provisioner parameters
    pub parameters: BTreeMap<String, String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretOverride {
    /// Raw secret values. The patched object carries them base64 encoded,
    /// so an override of `b"b"` shows up as `"Yg=="` in `data`.
    pub data: BTreeMap<String, ByteString>,
    pub metadata: MetadataOverride,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimOverride {
    pub metadata: MetadataOverride,
    /// Requested storage quantity, e.g. `10Gi`
    pub storage: String,
    pub storage_class_name: String,
    pub volume_mode: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InfraClusterOverride {
    pub node_cidr: String,
    /// Always written when the override is present
    pub allow_all_in_cluster_traffic: bool,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterOverride {
    pub pod_cidr_blocks: Vec<String>,
}

/// Override shared by DaemonSets and Deployments
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadOverride {
    /// Secret mounted by the cloud-config and Cinder plugin volumes
    pub volume_secret_name: String,
}

/// Object metadata fields that may be replaced
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataOverride {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

/// The override matching one document, tagged by kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KindOverride<'a> {
    StorageClass(&'a StorageClassOverride),
    Secret(&'a SecretOverride),
    PersistentVolumeClaim(&'a PersistentVolumeClaimOverride),
    InfraCluster(&'a InfraClusterOverride),
    Cluster(&'a ClusterOverride),
    DaemonSet(&'a WorkloadOverride),
    Deployment(&'a WorkloadOverride),
}

/// API group a rule matches against
#[derive(Clone, Copy, Debug)]
enum GroupMatch {
    Any,
    Group(&'static str),
}

struct KindRule {
    group: GroupMatch,
    kind: &'static str,
    select: for<'a> fn(&'a OverrideSet) -> Option<KindOverride<'a>>,
}

const RULES: &[KindRule] = &[
    KindRule {
        group: GroupMatch::Group(kinds::STORAGE_GROUP),
        kind: kinds::STORAGE_CLASS,
        select: |o| o.storage_class.as_ref().map(KindOverride::StorageClass),
    },
    KindRule {
        group: GroupMatch::Any,
        kind: kinds::SECRET,
        select: |o| o.secret.as_ref().map(KindOverride::Secret),
    },
    KindRule {
        group: GroupMatch::Any,
        kind: kinds::PERSISTENT_VOLUME_CLAIM,
        select: |o| {
            o.persistent_volume_claim
                .as_ref()
                .map(KindOverride::PersistentVolumeClaim)
        },
    },
    KindRule {
        group: GroupMatch::Group(kinds::INFRASTRUCTURE_GROUP),
        kind: kinds::INFRA_CLUSTER,
        select: |o| o.infra_cluster.as_ref().map(KindOverride::InfraCluster),
    },
    KindRule {
        group: GroupMatch::Group(kinds::CLUSTER_API_GROUP),
        kind: kinds::CLUSTER,
        select: |o| o.cluster.as_ref().map(KindOverride::Cluster),
    },
    KindRule {
        group: GroupMatch::Group(kinds::APPS_GROUP),
        kind: kinds::DAEMON_SET,
        select: |o| o.daemon_set.as_ref().map(KindOverride::DaemonSet),
    },
    KindRule {
        group: GroupMatch::Group(kinds::APPS_GROUP),
        kind: kinds::DEPLOYMENT,
        select: |o| o.deployment.as_ref().map(KindOverride::Deployment),
    },
];

impl GroupMatch {
    fn matches(self, api_version: &str) -> bool {
        match self {
            GroupMatch::Any => true,
            // Whole group only, so "apps.example.io/v1" is not "apps"
            GroupMatch::Group(group) => split_api_version(api_version).0 == group,
        }
    }
}

impl OverrideSet {
    /// Whether `(api_version, kind)` has a patch handler at all
    pub fn is_known_kind(api_version: &str, kind: &str) -> bool {
        RULES
            .iter()
            .any(|rule| rule.kind == kind && rule.group.matches(api_version))
    }

    /// The override supplied for this kind, if any
    pub fn lookup(&self, api_version: &str, kind: &str) -> Option<KindOverride<'_>> {
        RULES
            .iter()
            .find(|rule| rule.kind == kind && rule.group.matches(api_version))
            .and_then(|rule| (rule.select)(self))
    }
}
