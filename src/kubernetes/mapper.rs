// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! REST mappings derived from API discovery

use crate::error::{Result, SeedError};
use kube::{
    api::GroupVersionKind,
    discovery::{ApiResource, Discovery, Scope},
    Client,
};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Where a kind is served and whether it lives in a namespace
#[derive(Clone, Debug)]
pub struct RestMapping {
    pub resource: ApiResource,
    pub scope: Scope,
}

impl RestMapping {
    pub fn is_namespaced(&self) -> bool {
        matches!(self.scope, Scope::Namespaced)
    }
}

/// Resolves a group/version/kind to its REST mapping
#[allow(async_fn_in_trait)]
pub trait RestMapper {
    /// `Ok(None)` when the cluster does not serve `gvk`
    async fn rest_mapping(&mut self, gvk: &GroupVersionKind) -> Result<Option<RestMapping>>;
}

/// REST mappings for every served group/version/kind
#[derive(Clone, Debug, Default)]
pub struct RestMappingTable {
    mappings: HashMap<GroupVersionKind, RestMapping>,
}

impl RestMappingTable {
    /// Run discovery against the cluster and index the result
    #[instrument(skip(client))]
    pub async fn discover(client: &Client) -> Result<Self> {
        let discovery = Discovery::new(client.clone())
            .run()
            .await
            .map_err(SeedError::Discovery)?;

        let table = Self::from_discovery(&discovery);
        info!("Discovered {} API resources", table.len());
        Ok(table)
    }

    /// Index all versions of every group, not only the preferred one
    pub fn from_discovery(discovery: &Discovery) -> Self {
        let mut table = Self::default();
        for group in discovery.groups() {
            for version in group.versions() {
                for (resource, caps) in group.versioned_resources(version) {
                    table.insert(resource, caps.scope);
                }
            }
        }
        table
    }

    pub fn insert(&mut self, resource: ApiResource, scope: Scope) {
        let gvk = GroupVersionKind::gvk(&resource.group, &resource.version, &resource.kind);
        self.mappings.insert(gvk, RestMapping { resource, scope });
    }

    pub fn get(&self, gvk: &GroupVersionKind) -> Option<&RestMapping> {
        self.mappings.get(gvk)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl RestMapper for RestMappingTable {
    async fn rest_mapping(&mut self, gvk: &GroupVersionKind) -> Result<Option<RestMapping>> {
        Ok(self.get(gvk).cloned())
    }
}

/// Mapper backed by live discovery, run once on first use
pub struct DiscoveryRestMapper {
    client: Client,
    table: Option<RestMappingTable>,
}

impl DiscoveryRestMapper {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            table: None,
        }
    }
}

impl RestMapper for DiscoveryRestMapper {
    async fn rest_mapping(&mut self, gvk: &GroupVersionKind) -> Result<Option<RestMapping>> {
        if self.table.is_none() {
            self.table = Some(RestMappingTable::discover(&self.client).await?);
        }

        let mapping = self.table.as_ref().and_then(|t| t.get(gvk)).cloned();
        debug!(
            "Resolved {}/{}/{} to {:?}",
            gvk.group,
            gvk.version,
            gvk.kind,
            mapping.as_ref().map(|m| &m.resource.plural)
        );
        Ok(mapping)
    }
}
