// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed shapes for the Cluster API kinds the patch engine rewrites.

pub mod cluster;
pub mod openstack;

pub use cluster::{Cluster, ClusterSpec};
pub use openstack::{OpenStackCluster, OpenStackClusterSpec};
