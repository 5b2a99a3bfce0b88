// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Cluster API `Cluster`. Only the pod network is modelled; every other spec
/// field is carried through `extra` untouched.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "cluster.x-k8s.io", version = "v1beta1", kind = "Cluster")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_network: Option<ClusterNetwork>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pods: Option<NetworkRanges>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRanges {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cidr_blocks: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ClusterSpec {
    /// CIDR blocks assigned to pods, empty when the spec has none
    pub fn pod_cidr_blocks(&self) -> &[String] {
        self.cluster_network
            .as_ref()
            .and_then(|n| n.pods.as_ref())
            .map(|p| p.cidr_blocks.as_slice())
            .unwrap_or_default()
    }

    /// Replace the pod CIDR blocks, creating `clusterNetwork.pods` when missing
    pub fn set_pod_cidr_blocks(&mut self, blocks: Vec<String>) {
        self.cluster_network
            .get_or_insert_with(ClusterNetwork::default)
            .pods
            .get_or_insert_with(NetworkRanges::default)
            .cidr_blocks = blocks;
    }
}
