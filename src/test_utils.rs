// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::kubernetes::{ObjectCreator, RestMapping};
use http::{Request, Response};
use kube::api::DynamicObject;
use kube::client::Body;
use kube::discovery::{ApiResource, Scope};
use kube::Client;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All (method, path) pairs received so far, in order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for (method, path)
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json(&path)));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Mock serving discovery for the core group (Namespace, ConfigMap, Secret)
/// and apps/v1 (Deployment, DaemonSet)
pub fn discovery_service() -> MockService {
    let api_versions = serde_json::json!({
        "kind": "APIVersions",
        "apiVersion": "v1",
        "versions": ["v1"],
        "serverAddressByClientCIDRs": []
    });
    let core_resources = serde_json::json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "v1",
        "resources": [
            api_resource_json("namespaces", "Namespace", false),
            api_resource_json("configmaps", "ConfigMap", true),
            api_resource_json("secrets", "Secret", true)
        ]
    });
    let api_groups = serde_json::json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": [{
            "name": "apps",
            "versions": [{"groupVersion": "apps/v1", "version": "v1"}],
            "preferredVersion": {"groupVersion": "apps/v1", "version": "v1"}
        }]
    });
    let apps_resources = serde_json::json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "apps/v1",
        "resources": [
            api_resource_json("deployments", "Deployment", true),
            api_resource_json("daemonsets", "DaemonSet", true)
        ]
    });

    MockService::new()
        .on_get("/api", 200, &api_versions.to_string())
        .on_get("/api/v1", 200, &core_resources.to_string())
        .on_get("/apis", 200, &api_groups.to_string())
        .on_get("/apis/apps/v1", 200, &apps_resources.to_string())
}

fn api_resource_json(plural: &str, kind: &str, namespaced: bool) -> serde_json::Value {
    serde_json::json!({
        "name": plural,
        "singularName": kind.to_lowercase(),
        "namespaced": namespaced,
        "kind": kind,
        "verbs": ["create", "delete", "get", "list", "patch", "update", "watch"]
    })
}

/// Build a REST mapping by hand
pub fn mapping(api_version: &str, kind: &str, plural: &str, scope: Scope) -> RestMapping {
    let (group, version) = match api_version.split_once('/') {
        Some((g, v)) => (g.to_string(), v.to_string()),
        None => (String::new(), api_version.to_string()),
    };
    RestMapping {
        resource: ApiResource {
            group,
            version,
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            plural: plural.to_string(),
        },
        scope,
    }
}

/// Create a 404 not found response
pub fn not_found_json(path: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} not found", path),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" already exists", resource, name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

/// One create call seen by `FakeCreator`
#[derive(Clone, Debug)]
pub struct CreateCall {
    pub plural: String,
    pub namespace: Option<String>,
    pub object: DynamicObject,
}

/// Records create calls; rejects objects whose name was registered with `fail_on`
#[derive(Clone, Default)]
pub struct FakeCreator {
    calls: Arc<Mutex<Vec<CreateCall>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl FakeCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(self, name: &str) -> Self {
        self.failing.lock().unwrap().insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CreateCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| c.object.metadata.name.unwrap_or_default())
            .collect()
    }
}

impl ObjectCreator for FakeCreator {
    async fn create(
        &self,
        mapping: &RestMapping,
        namespace: Option<&str>,
        object: &DynamicObject,
    ) -> kube::Result<DynamicObject> {
        self.calls.lock().unwrap().push(CreateCall {
            plural: mapping.resource.plural.clone(),
            namespace: namespace.map(str::to_string),
            object: object.clone(),
        });

        let name = object.metadata.name.clone().unwrap_or_default();
        if self.failing.lock().unwrap().contains(&name) {
            return Err(kube::Error::Api(kube::error::ErrorResponse {
                status: "Failure".to_string(),
                message: format!("{} \"{}\" already exists", mapping.resource.plural, name),
                reason: "AlreadyExists".to_string(),
                code: 409,
            }));
        }
        Ok(object.clone())
    }
}
