//! Call-Site Table - every youtubePartner v1 method and the typed hub over it
//!
//! Descriptors are `pub const`s generated into `methods.rs`; the hub
//! exposes one accessor per resource group and one async method per API
//! method. Required parameters are positional, everything else travels in
//! [`CallParams`].

use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::client::{ApiError, CallParams, Executor, MethodDescriptor};

const CONTENT_OWNER_PARAM: &str = "onBehalfOfContentOwner";

/// Expands the method table into descriptor consts, `ALL_METHODS` and the
/// typed resource wrappers.
macro_rules! api_methods {
    ($(
        $resource:ident => $accessor:ident {
            $(
                $(#[$doc:meta])*
                $method:ident => $konst:ident {
                    id: $id:literal,
                    http: $verb:ident,
                    path: $path:literal,
                    required: [$($arg:ident = $req:literal),* $(,)?],
                    path_params: [$($pp:literal),* $(,)?],
                    upload: $upload:expr $(,)?
                }
            ),* $(,)?
        }
    ),* $(,)?) => {
        $($(
            $(#[$doc])*
            pub const $konst: $crate::client::MethodDescriptor = $crate::client::MethodDescriptor {
                id: $id,
                http_method: $crate::client::HttpMethod::$verb,
                url_template: $path,
                required_params: &[$($req),*],
                path_params: &[$($pp),*],
                media_upload_path: $upload,
            };
        )*)*

        /// Every method of the API, grouped by resource.
        pub static ALL_METHODS: &[&$crate::client::MethodDescriptor] = &[$($(&$konst),*),*];

        impl $crate::api::YouTubePartner {
            $(
                pub fn $accessor(&self) -> $resource<'_> {
                    $resource { hub: self }
                }
            )*
        }

        $(
            pub struct $resource<'a> {
                hub: &'a $crate::api::YouTubePartner,
            }

            impl $resource<'_> {
                $(
                    $(#[$doc])*
                    pub async fn $method(
                        &self,
                        $($arg: &str,)*
                        params: $crate::client::CallParams,
                    ) -> Result<serde_json::Value, $crate::client::ApiError> {
                        self.hub.call(&$konst, params$(.with($req, $arg))*).await
                    }
                )*
            }
        )*
    };
}

mod methods;

pub use methods::*;

/// Look a method up by its dotted id, e.g. `youtubePartner.claims.get`.
pub fn find_method(id: &str) -> Option<&'static MethodDescriptor> {
    ALL_METHODS.iter().copied().find(|m| m.id == id)
}

/// Token for the next page of a list response, if there is one.
pub fn next_page_token(response: &Value) -> Option<String> {
    response
        .get("nextPageToken")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}

/// Entry point for typed calls against the youtubePartner API.
#[derive(Clone)]
pub struct YouTubePartner {
    executor: Arc<Executor>,
    content_owner: Option<String>,
}

impl YouTubePartner {
    pub fn new(executor: Arc<Executor>) -> Self {
        Self {
            executor,
            content_owner: None,
        }
    }

    /// Act for `owner` on every call that does not name a content owner itself.
    pub fn with_content_owner(mut self, owner: impl Into<String>) -> Self {
        self.content_owner = Some(owner.into()).filter(|o| !o.is_empty());
        self
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn content_owner(&self) -> Option<&str> {
        self.content_owner.as_deref()
    }

    /// Invoke any method by descriptor.
    pub async fn call(
        &self,
        descriptor: &MethodDescriptor,
        params: CallParams,
    ) -> Result<Value, ApiError> {
        self.call_with_cancel(descriptor, params, &CancellationToken::new())
            .await
    }

    pub async fn call_with_cancel(
        &self,
        descriptor: &MethodDescriptor,
        mut params: CallParams,
        cancel: &CancellationToken,
    ) -> Result<Value, ApiError> {
        if let Some(owner) = &self.content_owner {
            params.set_default(CONTENT_OWNER_PARAM, owner.as_str());
        }
        self.executor
            .invoke_with_cancel(descriptor, params, cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::{HttpRequest, HttpResponse, Transport, TransportError};
    use crate::client::{HttpMethod, RetryPolicy, StaticToken};
    use async_trait::async_trait;
    use bytes::Bytes;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct RecordingTransport {
        body: &'static str,
        sent: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    fn hub(body: &'static str) -> (YouTubePartner, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            body,
            sent: Mutex::new(Vec::new()),
        });
        let executor = Executor::new(transport.clone(), Arc::new(StaticToken::new("tok")))
            .with_retry_policy(RetryPolicy::no_retry());
        (YouTubePartner::new(Arc::new(executor)), transport)
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        assert_eq!(ALL_METHODS.len(), 72);
        let ids: HashSet<_> = ALL_METHODS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), ALL_METHODS.len());

        let resources: HashSet<_> = ALL_METHODS.iter().map(|m| m.resource()).collect();
        assert_eq!(resources.len(), 26);
    }

    #[test]
    fn test_path_params_are_required_and_templated() {
        for method in ALL_METHODS {
            for name in method.path_params {
                assert!(
                    method.required_params.contains(name),
                    "{} path param {} not required",
                    method.id,
                    name
                );
                assert!(
                    method.url_template.contains(&format!("{{{}}}", name)),
                    "{} template lacks {}",
                    method.id,
                    name
                );
            }
        }
    }

    #[test]
    fn test_only_references_insert_uploads_media() {
        let uploads: Vec<_> = ALL_METHODS
            .iter()
            .filter(|m| m.supports_media_upload())
            .map(|m| m.id)
            .collect();
        assert_eq!(uploads, vec!["youtubePartner.references.insert"]);
    }

    #[test]
    fn test_find_method() {
        let m = find_method("youtubePartner.assetMatchPolicy.patch").unwrap();
        assert_eq!(m.http_method, HttpMethod::Patch);
        assert_eq!(m.url_template, "assets/{assetId}/matchPolicy");
        assert_eq!(
            find_method("youtubePartner.liveCuepoints.insert")
                .unwrap()
                .required_params,
            &["channelId"]
        );
        assert!(find_method("youtubePartner.claims.explode").is_none());
    }

    #[test]
    fn test_next_page_token() {
        let page = serde_json::json!({"items": [], "nextPageToken": "CAUQAA"});
        assert_eq!(next_page_token(&page).as_deref(), Some("CAUQAA"));
        assert_eq!(next_page_token(&serde_json::json!({"nextPageToken": ""})), None);
        assert_eq!(next_page_token(&serde_json::json!({"items": []})), None);
    }

    #[tokio::test]
    async fn test_typed_call_binds_positional_and_owner() {
        let (hub, transport) = hub(r#"{"id":"C1","status":"active"}"#);
        let hub = hub.with_content_owner("owner-1");

        let claim = hub.claims().get("C1", CallParams::new()).await.unwrap();
        assert_eq!(claim["status"], "active");

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(
            sent[0].url,
            "https://www.googleapis.com/youtube/partner/v1/claims/C1?onBehalfOfContentOwner=owner-1"
        );
    }

    #[tokio::test]
    async fn test_explicit_owner_wins_over_default() {
        let (hub, transport) = hub("{}");
        let hub = hub.with_content_owner("default-owner");

        hub.asset_match_policy()
            .get("A1", CallParams::new().with("onBehalfOfContentOwner", "other"))
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(
            sent[0].url,
            "https://www.googleapis.com/youtube/partner/v1/assets/A1/matchPolicy?onBehalfOfContentOwner=other"
        );
    }

    #[tokio::test]
    async fn test_list_call_with_query_params() {
        let (hub, transport) = hub(r#"{"items":[],"nextPageToken":"next"}"#);

        let page = hub
            .asset_relationships()
            .list("A1", CallParams::new().with("pageToken", "p2"))
            .await
            .unwrap();
        assert_eq!(next_page_token(&page).as_deref(), Some("next"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(
            sent[0].url,
            "https://www.googleapis.com/youtube/partner/v1/assetRelationships?assetId=A1&pageToken=p2"
        );
    }
}
