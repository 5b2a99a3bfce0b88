// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Override patching and normalisation of decoded manifests.

mod handlers;
pub mod prune;

pub use prune::prune_empty;

use crate::error::{Result, SeedError};
use crate::manifest::ManifestDocument;
use crate::overrides::OverrideSet;
use tracing::{debug, instrument};

/// Apply the matching override to a document.
///
/// Documents without a supplied override (including unknown kinds) are
/// returned unchanged. Pure transformation, no I/O.
#[instrument(skip_all, fields(index = doc.index, kind = %doc.kind))]
pub fn patch_document(
    mut doc: ManifestDocument,
    overrides: &OverrideSet,
) -> Result<ManifestDocument> {
    let Some(kind_override) = overrides.lookup(&doc.api_version, &doc.kind) else {
        if OverrideSet::is_known_kind(&doc.api_version, &doc.kind) {
            debug!("No override supplied for {}, leaving it unchanged", doc.kind);
        }
        return Ok(doc);
    };

    debug!("Patching {} {:?}", doc.kind, doc.name());

    handlers::apply_override(&mut doc.object, kind_override).map_err(|source| {
        SeedError::Conversion {
            index: doc.index,
            kind: doc.kind.clone(),
            source,
        }
    })?;

    Ok(doc)
}
