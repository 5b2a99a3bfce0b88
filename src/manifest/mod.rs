// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Multi-document manifest decoding.

pub mod decoder;

pub use decoder::{decode_manifests, ManifestDocument, ManifestStream};
