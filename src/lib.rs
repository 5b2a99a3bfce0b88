// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod apply;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod manifest;
pub mod overrides;
pub mod patch;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub mod test_utils;
