// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Cluster API OpenStack infrastructure cluster
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha7",
    kind = "OpenStackCluster"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_all_in_cluster_traffic: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
