// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes seams: REST mapping via discovery and dynamic object creation.

pub mod creator;
pub mod mapper;

pub use creator::{KubeObjectCreator, ObjectCreator};
pub use mapper::{DiscoveryRestMapper, RestMapper, RestMapping, RestMappingTable};
