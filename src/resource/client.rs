// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Template-backed client for a single namespaced resource type

use super::observer::{RequestObserver, TracingObserver};
use super::selector::{is_owned_by, owner_field_selector, OwnerMatch};
use crate::error::{ResourceError, Result};
use crate::reify::Reifier;
use http::StatusCode;
use http_body_util::BodyExt;
use kube::{
    api::{DeleteParams, ListParams, ObjectList, PostParams},
    client::Body,
    core::{ErrorResponse, GroupVersionKind, Request},
    Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Creates, deletes and lists objects of type `K` whose bodies come from a template.
///
/// The client is stateless between calls and only shares the underlying
/// [`Client`], so it can be used concurrently.
pub struct ResourceClient<K> {
    client: Client,
    plural: String,
    template: String,
    api_base: String,
    reifier: Arc<dyn Reifier>,
    observer: Arc<dyn RequestObserver>,
    owner_match: OwnerMatch,
    _resource: PhantomData<fn() -> K>,
}

impl<K> ResourceClient<K>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    /// Bind a client to a resource collection and the template used to create its objects.
    pub fn new(
        client: Client,
        plural: impl Into<String>,
        template: impl Into<String>,
        reifier: Arc<dyn Reifier>,
    ) -> Result<Self> {
        let plural = plural.into();
        let template = template.into();

        if plural.is_empty() || plural.contains('/') {
            return Err(ResourceError::ConfigError(format!(
                "invalid plural resource name '{}'",
                plural
            )));
        }
        if template.is_empty() {
            return Err(ResourceError::ConfigError(
                "template identifier must not be empty".to_string(),
            ));
        }

        let dt = K::DynamicType::default();
        let group = K::group(&dt);
        let version = K::version(&dt);
        let api_base = if group.is_empty() {
            format!("/api/{}", version)
        } else {
            format!("/apis/{}/{}", group, version)
        };

        Ok(Self {
            client,
            plural,
            template,
            api_base,
            reifier,
            observer: Arc::new(TracingObserver),
            owner_match: OwnerMatch::default(),
            _resource: PhantomData,
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_owner_match(mut self, owner_match: OwnerMatch) -> Self {
        self.owner_match = owner_match;
        self
    }

    /// Plural name of the bound resource, as given at construction
    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn owner_match(&self) -> OwnerMatch {
        self.owner_match
    }

    fn collection_path(&self, namespace: &str) -> Result<String> {
        path_segment("namespace", namespace)?;
        Ok(format!("{}/namespaces/{}/{}", self.api_base, namespace, self.plural))
    }

    /// Create a new object from the bound template, expanded with `template_data`.
    ///
    /// The data is handed to the reifier as-is. A reification failure is
    /// returned before anything is sent. Only HTTP 200 and 201 count as success.
    #[instrument(skip(self, template_data), fields(plural = %self.plural))]
    pub async fn create<T: Serialize>(&self, namespace: &str, template_data: &T) -> Result<()> {
        let path = self.collection_path(namespace)?;
        let data = serde_json::to_value(template_data)
            .map_err(|e| ResourceError::reify(&self.template, e))?;
        let body = self.reifier.reify(&self.template, &data)?;

        let request = Request::new(path)
            .create(&PostParams::default(), body)
            .map_err(kube::Error::BuildRequest)?;
        self.observer.on_request("create", &request.uri().to_string());

        let response = self.client.send(request.map(Body::from)).await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| ResourceError::ResponseBodyError(e.to_string()))?
                .to_bytes();
            return Err(api_error(status, &body).into());
        }

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(ResourceError::UnexpectedStatus(status.as_u16()));
        }

        debug!("Created {} in namespace {}", self.plural, namespace);
        Ok(())
    }

    /// Delete the named object. Not-found and other API errors are returned as reported.
    #[instrument(skip(self), fields(plural = %self.plural))]
    pub async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        path_segment("name", name)?;
        let request = Request::new(self.collection_path(namespace)?)
            .delete(name, &DeleteParams::default())
            .map_err(kube::Error::BuildRequest)?;
        self.observer.on_request("delete", &request.uri().to_string());

        self.client.request_text(request).await?;

        debug!("Deleted {} {}/{}", self.plural, namespace, name);
        Ok(())
    }

    /// List objects in `namespace` owned by an object of kind `gvk`.
    ///
    /// With [`OwnerMatch::FirstOnly`] only the first owner reference is
    /// compared, through a field selector evaluated by the API server.
    #[instrument(skip(self, gvk), fields(plural = %self.plural, owner_kind = %gvk.kind))]
    pub async fn list(&self, namespace: &str, gvk: &GroupVersionKind) -> Result<ObjectList<K>> {
        let lp = match self.owner_match {
            OwnerMatch::FirstOnly => ListParams::default().fields(&owner_field_selector(gvk)),
            OwnerMatch::Any => ListParams::default(),
        };

        let request = Request::new(self.collection_path(namespace)?)
            .list(&lp)
            .map_err(kube::Error::BuildRequest)?;
        self.observer.on_request("list", &request.uri().to_string());

        let mut list: ObjectList<K> = self.client.request(request).await?;

        if self.owner_match == OwnerMatch::Any {
            list.items
                .retain(|o| is_owned_by(o.owner_references(), gvk, OwnerMatch::Any));
        }

        debug!("Listed {} {} in namespace {}", list.items.len(), self.plural, namespace);
        Ok(list)
    }
}

/// Namespaces and names are sent as single path segments. Values that would
/// change the target URL are rejected instead of being sent.
fn path_segment(kind: &str, value: &str) -> Result<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '?', '#', '%']);
    if invalid {
        return Err(ResourceError::InvalidArgument(format!("invalid {} '{}'", kind, value)));
    }
    Ok(())
}

/// Turn an error response into the same error the kube client reports for it
fn api_error(status: StatusCode, body: &[u8]) -> kube::Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(response) => kube::Error::Api(response),
        Err(_) => kube::Error::Api(ErrorResponse {
            status: status.to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
            reason: "Failed to parse error data".to_string(),
            code: status.as_u16(),
        }),
    }
}
