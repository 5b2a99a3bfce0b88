// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::info;

use clusterseed::config::Config;
use clusterseed::pipeline::Bootstrapper;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: fallback_namespace={}",
        config.fallback_namespace
    );

    let manifests = config.read_manifests()?;
    let overrides = config.load_overrides()?;

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let mut bootstrapper = Bootstrapper::for_client(client, overrides)
        .with_fallback_namespace(config.fallback_namespace.clone());

    let created = bootstrapper
        .run(&manifests)
        .await
        .context("Failed to bootstrap cluster manifests")?;

    info!("Bootstrap complete, {} objects created", created);
    Ok(())
}
