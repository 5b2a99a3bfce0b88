// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace used for namespaced objects that do not name one
pub const DEFAULT_FALLBACK_NAMESPACE: &str = "default";

/// Volumes whose secret reference is rewritten by the workload overrides
pub mod volumes {
    /// Cloud provider configuration mounted by the cloud controller manager
    pub const CLOUD_CONFIG: &str = "cloud-config-volume";
    /// Credentials mounted by the Cinder CSI plugin
    pub const CINDER_PLUGIN_SECRET: &str = "secret-cinderplugin";

    pub const SECRET_VOLUMES: [&str; 2] = [CLOUD_CONFIG, CINDER_PLUGIN_SECRET];
}

/// API groups and kinds with a patch handler
pub mod kinds {
    pub const STORAGE_GROUP: &str = "storage.k8s.io";
    pub const INFRASTRUCTURE_GROUP: &str = "infrastructure.cluster.x-k8s.io";
    pub const CLUSTER_API_GROUP: &str = "cluster.x-k8s.io";
    pub const APPS_GROUP: &str = "apps";

    pub const STORAGE_CLASS: &str = "StorageClass";
    pub const SECRET: &str = "Secret";
    pub const PERSISTENT_VOLUME_CLAIM: &str = "PersistentVolumeClaim";
    pub const INFRA_CLUSTER: &str = "OpenStackCluster";
    pub const CLUSTER: &str = "Cluster";
    pub const DAEMON_SET: &str = "DaemonSet";
    pub const DEPLOYMENT: &str = "Deployment";
}
