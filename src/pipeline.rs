// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decode, patch and create a whole manifest stream.

use crate::apply::apply_document;
use crate::constants::DEFAULT_FALLBACK_NAMESPACE;
use crate::error::Result;
use crate::kubernetes::{DiscoveryRestMapper, KubeObjectCreator, ObjectCreator, RestMapper};
use crate::manifest::{decode_manifests, ManifestDocument};
use crate::overrides::OverrideSet;
use crate::patch::patch_document;
use kube::Client;
use tracing::{error, info, instrument};

/// Drives a manifest stream through decode, patch and create.
///
/// Documents are handled one at a time in stream order. The first error of
/// any stage stops the run; objects created before it are left in place.
pub struct Bootstrapper<M, C> {
    mapper: M,
    creator: C,
    overrides: OverrideSet,
    fallback_namespace: String,
}

impl Bootstrapper<DiscoveryRestMapper, KubeObjectCreator> {
    /// Bootstrapper resolving mappings through live discovery on `client`
    pub fn for_client(client: Client, overrides: OverrideSet) -> Self {
        Self::new(
            DiscoveryRestMapper::new(client.clone()),
            KubeObjectCreator::new(client),
            overrides,
        )
    }
}

impl<M, C> Bootstrapper<M, C>
where
    M: RestMapper,
    C: ObjectCreator,
{
    pub fn new(mapper: M, creator: C, overrides: OverrideSet) -> Self {
        Self {
            mapper,
            creator,
            overrides,
            fallback_namespace: DEFAULT_FALLBACK_NAMESPACE.to_string(),
        }
    }

    pub fn with_fallback_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.fallback_namespace = namespace.into();
        self
    }

    /// Create every object of `manifests`, returning how many were created
    #[instrument(skip_all)]
    pub async fn run(&mut self, manifests: &str) -> Result<usize> {
        let mut created = 0;

        for doc in decode_manifests(manifests) {
            if let Err(e) = self.process(doc).await {
                error!("Stopping after {} created objects: {}", created, e);
                return Err(e);
            }
            created += 1;
        }

        info!("Manifest stream complete, {} objects created", created);
        Ok(created)
    }

    async fn process(&mut self, doc: Result<ManifestDocument>) -> Result<()> {
        let doc = patch_document(doc?, &self.overrides)?;
        apply_document(doc, &mut self.mapper, &self.creator, &self.fallback_namespace).await
    }
}
