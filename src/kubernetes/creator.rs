// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Object creation through the dynamic API

use crate::kubernetes::mapper::RestMapping;
use kube::{
    api::{DynamicObject, PostParams},
    Api, Client,
};

/// Creates arbitrary objects against a cluster
#[allow(async_fn_in_trait)]
pub trait ObjectCreator {
    /// Create `object` at `mapping`, inside `namespace` when one is given
    async fn create(
        &self,
        mapping: &RestMapping,
        namespace: Option<&str>,
        object: &DynamicObject,
    ) -> kube::Result<DynamicObject>;
}

/// `ObjectCreator` backed by a kube client
#[derive(Clone)]
pub struct KubeObjectCreator {
    client: Client,
}

impl KubeObjectCreator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ObjectCreator for KubeObjectCreator {
    async fn create(
        &self,
        mapping: &RestMapping,
        namespace: Option<&str>,
        object: &DynamicObject,
    ) -> kube::Result<DynamicObject> {
        let api: Api<DynamicObject> = match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &mapping.resource),
            None => Api::all_with(self.client.clone(), &mapping.resource),
        };

        api.create(&PostParams::default(), object).await
    }
}
