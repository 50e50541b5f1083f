//! Request executor - turns a descriptor plus parameters into an
//! authenticated HTTP call
//!
//! A call moves through `Pending -> Sending -> (Success | Retrying -> Sending
//! | Failed)`. Only rate limiting, server errors and network failures enter
//! `Retrying`, bounded by the [`RetryPolicy`].

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use super::descriptor::{HttpMethod, MethodDescriptor};
use super::error::ApiError;
use super::params::{bind, CallParams, Media, ParamValue};
use super::retry::{classify, Backoff, RetryPolicy};
use super::token_manager::TokenProvider;
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::upload::{multipart_body, ResumableSession, UploadOptions, UploadProtocol};
use super::url_template::{encode_query, expand, join_url};

pub const DEFAULT_ROOT_URL: &str = "https://www.googleapis.com/";
pub const DEFAULT_SERVICE_PATH: &str = "youtube/partner/v1/";

const UPLOAD_TYPE_PARAM: &str = "uploadType";

/// Base URLs for regular and upload calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub upload_base_url: String,
}

impl Endpoints {
    pub fn new(root_url: &str, service_path: &str) -> Self {
        let root = format!("{}/", root_url.trim_end_matches('/'));
        let service = service_path.trim_matches('/');
        Self {
            base_url: format!("{}{}/", root, service),
            upload_base_url: format!("{}upload/{}/", root, service),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_URL, DEFAULT_SERVICE_PATH)
    }
}

/// A request derived from a descriptor and call parameters, minus auth.
///
/// For resumable uploads this is the session-initiation request and `upload`
/// holds the media to stream once the session URI is known.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub upload: Option<Media>,
}

impl ResolvedRequest {
    fn to_http(&self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallState {
    Pending,
    Sending { attempt: u32 },
    Retrying { attempt: u32, delay: Duration },
    Success,
    Failed,
}

pub struct Executor {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenProvider>,
    endpoints: Endpoints,
    retry: RetryPolicy,
    upload: UploadOptions,
    timeout: Duration,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            transport,
            tokens,
            endpoints: Endpoints::default(),
            retry: RetryPolicy::default(),
            upload: UploadOptions::default(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_upload_options(mut self, upload: UploadOptions) -> Self {
        self.upload = upload;
        self
    }

    /// Per-request timeout applied on top of the transport's own.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn upload_options(&self) -> &UploadOptions {
        &self.upload
    }

    /// Bind and template a call without sending it.
    pub fn resolve(
        &self,
        descriptor: &MethodDescriptor,
        params: CallParams,
    ) -> Result<ResolvedRequest, ApiError> {
        bind(descriptor, &params)?;

        let (mut values, resource, media) = params.into_parts();

        let Some(media) = media else {
            let path = expand(
                descriptor.id,
                descriptor.url_template,
                descriptor.path_params,
                &mut values,
            )?;
            let url = join_url(&self.endpoints.base_url, &path, &encode_query(&values));

            let mut headers = HeaderMap::new();
            let body = match resource {
                Some(resource) => {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                    Some(Bytes::from(resource.to_string()))
                }
                None => None,
            };

            return Ok(ResolvedRequest {
                method: descriptor.http_method,
                url,
                headers,
                body,
                upload: None,
            });
        };

        let upload_template = descriptor.media_upload_path.ok_or_else(|| {
            ApiError::InvalidRequest(format!("{} does not accept media uploads", descriptor.id))
        })?;
        let path = expand(
            descriptor.id,
            upload_template,
            descriptor.path_params,
            &mut values,
        )?;
        let metadata = resource.unwrap_or_else(|| Value::Object(Default::default()));
        let mut headers = HeaderMap::new();

        match self.upload.choose(media.len()) {
            UploadProtocol::Resumable => {
                values.insert(UPLOAD_TYPE_PARAM.to_string(), ParamValue::from("resumable"));
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=UTF-8"),
                );
                headers.insert("x-upload-content-type", header_value(&media.mime_type)?);
                headers.insert("x-upload-content-length", header_value(&media.len().to_string())?);

                Ok(ResolvedRequest {
                    method: descriptor.http_method,
                    url: join_url(&self.endpoints.upload_base_url, &path, &encode_query(&values)),
                    headers,
                    body: Some(Bytes::from(metadata.to_string())),
                    upload: Some(media),
                })
            }
            _ => {
                values.insert(UPLOAD_TYPE_PARAM.to_string(), ParamValue::from("multipart"));
                let boundary = uuid::Uuid::new_v4().simple().to_string();
                headers.insert(
                    CONTENT_TYPE,
                    header_value(&format!("multipart/related; boundary={}", boundary))?,
                );

                Ok(ResolvedRequest {
                    method: descriptor.http_method,
                    url: join_url(&self.endpoints.upload_base_url, &path, &encode_query(&values)),
                    headers,
                    body: Some(multipart_body(&metadata, &media, &boundary)),
                    upload: None,
                })
            }
        }
    }

    /// Execute one API call.
    pub async fn invoke(
        &self,
        descriptor: &MethodDescriptor,
        params: CallParams,
    ) -> Result<Value, ApiError> {
        self.invoke_with_cancel(descriptor, params, &CancellationToken::new())
            .await
    }

    /// Execute one API call, abandoning it when `cancel` fires.
    pub async fn invoke_with_cancel(
        &self,
        descriptor: &MethodDescriptor,
        params: CallParams,
        cancel: &CancellationToken,
    ) -> Result<Value, ApiError> {
        let span = tracing::debug_span!("api_call", method = descriptor.id);
        self.run_call(descriptor, params, cancel)
            .instrument(span)
            .await
    }

    async fn run_call(
        &self,
        descriptor: &MethodDescriptor,
        params: CallParams,
        cancel: &CancellationToken,
    ) -> Result<Value, ApiError> {
        let resolved = self.resolve(descriptor, params)?;
        let response = self.send_with_retry(&resolved, cancel).await?;

        let response = match &resolved.upload {
            Some(media) => {
                let session_uri = response
                    .header(LOCATION.as_str())
                    .map(|s| s.to_string())
                    .ok_or_else(|| {
                        ApiError::InvalidResponse(
                            "no Location header in upload-initiation response".to_string(),
                        )
                    })?;
                ResumableSession::new(self, session_uri, media)
                    .run(cancel)
                    .await?
            }
            None => response,
        };

        parse_body(&response)
    }

    async fn send_with_retry(
        &self,
        resolved: &ResolvedRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, ApiError> {
        let mut backoff = Backoff::new(&self.retry);
        let mut reauthorized = false;
        let mut attempt = 0u32;
        let mut state = CallState::Pending;

        loop {
            attempt += 1;
            transition(&mut state, CallState::Sending { attempt });

            let err = match self.send_once(resolved.to_http(), cancel).await {
                Ok(resp) if resp.status.is_success() => {
                    transition(&mut state, CallState::Success);
                    return Ok(resp);
                }
                Ok(resp) if resp.status == StatusCode::UNAUTHORIZED && !reauthorized => {
                    tracing::warn!("Access token rejected, retrying with a fresh token");
                    reauthorized = true;
                    self.tokens.invalidate().await;
                    continue;
                }
                Ok(resp) => classify(resp.status, resp.header("retry-after"), resp.text()),
                Err(e) => e,
            };

            if !err.is_retryable() {
                transition(&mut state, CallState::Failed);
                tracing::debug!("Call failed after {} attempt(s): {}", attempt, err);
                return Err(err);
            }

            let Some(delay) = backoff.next_delay(err.retry_after()) else {
                transition(&mut state, CallState::Failed);
                tracing::error!("Giving up after {} attempt(s): {}", attempt, err);
                return Err(err);
            };

            transition(&mut state, CallState::Retrying { attempt, delay });
            tracing::warn!("Attempt {} failed ({}), retrying in {:?}", attempt, err, delay);

            tokio::select! {
                _ = cancel.cancelled() => {
                    transition(&mut state, CallState::Failed);
                    return Err(ApiError::Cancelled);
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    /// One authenticated round trip, with timeout and cancellation.
    pub(crate) async fn send_once(
        &self,
        mut request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let token = self.tokens.get_token().await?;
        request.headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
        );

        tracing::debug!("{} {}", request.method, request.url);

        tokio::select! {
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            result = tokio::time::timeout(self.timeout, self.transport.send(request)) => match result {
                Err(_) => Err(ApiError::Network(format!("request timed out after {:?}", self.timeout))),
                Ok(Err(e)) => Err(ApiError::Network(e.to_string())),
                Ok(Ok(resp)) => Ok(resp),
            }
        }
    }

    /// Best-effort request outside any call's cancellation scope.
    pub(crate) async fn send_detached(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.send_once(request, &CancellationToken::new()).await
    }
}

fn transition(state: &mut CallState, next: CallState) {
    tracing::trace!(from = ?state, to = ?next, "call state");
    *state = next;
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Decode a success body; empty bodies (e.g. DELETE) become `Null`.
fn parse_body(response: &HttpResponse) -> Result<Value, ApiError> {
    if response.body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        ApiError::InvalidResponse(format!("{} (body: {})", e, response.text()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CLAIMS_GET, OWNERSHIP_GET, REFERENCES_INSERT};
    use crate::client::token_manager::StaticToken;
    use crate::client::transport::TransportError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    type Reply = Result<(u16, Vec<(&'static str, String)>, String), TransportError>;

    /// Replays canned replies and records every request it receives.
    struct StubTransport {
        replies: Mutex<VecDeque<Reply>>,
        fallback: Option<Reply>,
        latency: Duration,
        sent: Mutex<Vec<(HttpRequest, Instant)>>,
    }

    impl StubTransport {
        fn build(replies: Vec<Reply>, fallback: Option<Reply>, latency: Duration) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                fallback,
                latency,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn new(replies: Vec<Reply>) -> Arc<Self> {
            Self::build(replies, None, Duration::ZERO)
        }

        fn always(reply: Reply) -> Arc<Self> {
            Self::build(Vec::new(), Some(reply), Duration::ZERO)
        }

        /// Serves `replies` in order, then `fallback` forever.
        fn then_always(replies: Vec<Reply>, fallback: Reply) -> Arc<Self> {
            Self::build(replies, Some(fallback), Duration::ZERO)
        }

        /// Like `new`, but every request takes `latency` to answer.
        fn slow(replies: Vec<Reply>, latency: Duration) -> Arc<Self> {
            Self::build(replies, None, latency)
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
        }

        fn times(&self) -> Vec<Instant> {
            self.sent.lock().unwrap().iter().map(|(_, t)| *t).collect()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.lock().unwrap().push((request, Instant::now()));
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .or_else(|| self.fallback.clone())
                .expect("stub transport ran out of replies");
            let (status, headers, body) = reply?;
            let mut map = HeaderMap::new();
            for (name, value) in headers {
                map.insert(name, value.parse().unwrap());
            }
            Ok(HttpResponse {
                status: StatusCode::from_u16(status).unwrap(),
                headers: map,
                body: Bytes::from(body),
            })
        }
    }

    fn ok(body: &str) -> Reply {
        Ok((200, vec![], body.to_string()))
    }

    fn status(code: u16) -> Reply {
        Ok((code, vec![], String::new()))
    }

    fn fast_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            initial_backoff: Duration::from_millis(20),
            max_backoff: Duration::from_secs(1),
            multiplier: 2.0,
            max_elapsed: Duration::from_secs(30),
            jitter: false,
        }
    }

    fn executor(transport: Arc<StubTransport>) -> Executor {
        Executor::new(transport, Arc::new(StaticToken::new("test-token")))
            .with_retry_policy(fast_policy(4))
    }

    #[test]
    fn test_resolve_claims_get() {
        let exec = executor(StubTransport::new(vec![]));
        let resolved = exec
            .resolve(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .unwrap();
        assert_eq!(resolved.method, HttpMethod::Get);
        assert_eq!(
            resolved.url,
            "https://www.googleapis.com/youtube/partner/v1/claims/C1"
        );
        assert!(resolved.body.is_none());
    }

    #[test]
    fn test_resolve_encodes_path_and_keeps_query() {
        let exec = executor(StubTransport::new(vec![]));
        let resolved = exec
            .resolve(
                &OWNERSHIP_GET,
                CallParams::new()
                    .with("assetId", "a/b")
                    .with("onBehalfOfContentOwner", "owner 1"),
            )
            .unwrap();
        assert_eq!(
            resolved.url,
            "https://www.googleapis.com/youtube/partner/v1/assets/a%2Fb/ownership?onBehalfOfContentOwner=owner%201"
        );
        assert!(!resolved.url.contains("assetId="));
    }

    #[test]
    fn test_resolve_json_body() {
        let exec = executor(StubTransport::new(vec![]));
        let resolved = exec
            .resolve(
                &REFERENCES_INSERT,
                CallParams::new().resource(serde_json::json!({"assetId": "A1"})),
            )
            .unwrap();
        assert_eq!(resolved.url, "https://www.googleapis.com/youtube/partner/v1/references");
        assert_eq!(resolved.headers[CONTENT_TYPE], "application/json");
        assert_eq!(resolved.body.unwrap(), Bytes::from(r#"{"assetId":"A1"}"#));
    }

    #[test]
    fn test_resolve_media_on_plain_method_is_rejected() {
        let exec = executor(StubTransport::new(vec![]));
        let err = exec
            .resolve(
                &CLAIMS_GET,
                CallParams::new()
                    .with("claimId", "C1")
                    .media(Media::new("video/mp4", Bytes::from_static(b"x"))),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_resolve_multipart_upload() {
        let exec = executor(StubTransport::new(vec![]));
        let resolved = exec
            .resolve(
                &REFERENCES_INSERT,
                CallParams::new()
                    .with("claimId", "C9")
                    .resource(serde_json::json!({"contentType": "video"}))
                    .media(Media::new("video/mp4", Bytes::from_static(b"frames"))),
            )
            .unwrap();
        assert_eq!(
            resolved.url,
            "https://www.googleapis.com/upload/youtube/partner/v1/references?claimId=C9&uploadType=multipart"
        );
        let content_type = resolved.headers[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/related; boundary="));
        let body = String::from_utf8(resolved.body.unwrap().to_vec()).unwrap();
        assert!(body.contains(r#"{"contentType":"video"}"#));
        assert!(body.contains("frames"));
        assert!(resolved.upload.is_none());
    }

    #[tokio::test]
    async fn test_missing_parameter_sends_nothing() {
        let transport = StubTransport::always(ok("{}"));
        let exec = executor(transport.clone());

        let mut checked = 0;
        for descriptor in crate::api::ALL_METHODS {
            if descriptor.required_params.is_empty() {
                continue;
            }
            let err = exec.invoke(descriptor, CallParams::new()).await.unwrap_err();
            match err {
                ApiError::MissingParameter { method, names } => {
                    assert_eq!(method, descriptor.id);
                    assert_eq!(names.len(), descriptor.required_params.len());
                }
                other => panic!("{}: unexpected error {:?}", descriptor.id, other),
            }
            checked += 1;
        }

        assert!(checked > 0);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_success_attaches_bearer_token() {
        let transport = StubTransport::new(vec![ok(r#"{"id":"C1","status":"active"}"#)]);
        let exec = executor(transport.clone());

        let value = exec
            .invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap();

        assert_eq!(value["status"], "active");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].headers[AUTHORIZATION], "Bearer test-token");
        assert_eq!(sent[0].url, "https://www.googleapis.com/youtube/partner/v1/claims/C1");
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_with_growing_delay() {
        let transport = StubTransport::new(vec![status(503), status(503), ok(r#"{"ok":true}"#)]);
        let exec = executor(transport.clone());

        let value = exec
            .invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap();

        assert_eq!(value["ok"], true);
        let times = transport.times();
        assert_eq!(times.len(), 3);
        let first_gap = times[1] - times[0];
        let second_gap = times[2] - times[1];
        assert!(first_gap >= Duration::from_millis(20));
        assert!(second_gap >= first_gap);
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let transport = StubTransport::always(Ok((404, vec![], r#"{"error":{"code":404}}"#.to_string())));
        let exec = executor(transport.clone());

        let err = exec
            .invoke(&CLAIMS_GET, CallParams::new().with("claimId", "missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Client { status: 404, .. }));
        assert_eq!(err.body(), Some(r#"{"error":{"code":404}}"#));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_retry_budget_returns_last_error() {
        let transport = StubTransport::always(status(500));
        let exec = executor(transport.clone()).with_retry_policy(fast_policy(2));

        let err = exec
            .invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_network_errors_are_retried() {
        let transport = StubTransport::new(vec![
            Err(TransportError::Connect("connection reset".into())),
            ok("{}"),
        ]);
        let exec = executor(transport.clone());

        exec.invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap();
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_rate_limited_is_retried() {
        let quota = serde_json::json!({
            "error": {"code": 403, "errors": [{"reason": "userRateLimitExceeded"}]}
        })
        .to_string();
        let transport = StubTransport::new(vec![
            Ok((429, vec![], String::new())),
            Ok((403, vec![], quota)),
            ok("{}"),
        ]);
        let exec = executor(transport.clone());

        exec.invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap();
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_unauthorized_refreshes_once() {
        let transport = StubTransport::always(status(401));
        let exec = executor(transport.clone());

        let err = exec
            .invoke(&CLAIMS_GET, CallParams::new().with("claimId", "C1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Client { status: 401, .. }));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let transport = StubTransport::new(vec![Ok((204, vec![], String::new()))]);
        let exec = executor(transport);
        let descriptor = MethodDescriptor {
            id: "youtubePartner.whitelists.delete",
            http_method: HttpMethod::Delete,
            url_template: "whitelists/{id}",
            required_params: &["id"],
            path_params: &["id"],
            media_upload_path: None,
        };

        let value = exec
            .invoke(&descriptor, CallParams::new().with("id", "UC123"))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_cancellation_stops_retrying() {
        let transport = StubTransport::always(status(503));
        let exec = executor(transport.clone()).with_retry_policy(RetryPolicy {
            initial_backoff: Duration::from_secs(10),
            ..fast_policy(5)
        });
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = exec
            .invoke_with_cancel(&CLAIMS_GET, CallParams::new().with("claimId", "C1"), &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Cancelled));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_resumable_upload_resumes_from_acknowledged_offset() {
        let total = 600 * 1024;
        let payload = Bytes::from(vec![7u8; total]);
        let session = "https://www.googleapis.com/upload/youtube/partner/v1/references?upload_id=xyz";

        let transport = StubTransport::new(vec![
            // Session initiation
            Ok((200, vec![("location", session.to_string())], String::new())),
            // First chunk accepted
            Ok((308, vec![("range", "bytes=0-262143".to_string())], String::new())),
            // Second chunk fails mid-flight
            Err(TransportError::Connect("connection reset".into())),
            // Status query: server kept 300 KiB
            Ok((308, vec![("range", format!("bytes=0-{}", 300 * 1024 - 1))], String::new())),
            // Remaining bytes, final chunk completes
            Ok((308, vec![("range", format!("bytes=0-{}", 556 * 1024 - 1))], String::new())),
            ok(r#"{"id":"R1","status":"checking"}"#),
        ]);
        let exec = executor(transport.clone()).with_upload_options(UploadOptions {
            protocol: UploadProtocol::Resumable,
            resumable_threshold: 0,
            chunk_size: 256 * 1024,
        });

        let value = exec
            .invoke(
                &REFERENCES_INSERT,
                CallParams::new()
                    .resource(serde_json::json!({"assetId": "A1"}))
                    .media(Media::new("video/mp4", payload)),
            )
            .await
            .unwrap();

        assert_eq!(value["id"], "R1");
        let sent = transport.requests();
        assert_eq!(sent.len(), 6);

        assert!(sent[0].url.ends_with("references?uploadType=resumable"));
        assert_eq!(sent[0].headers["x-upload-content-length"], total.to_string());

        let ranges: Vec<String> = sent[1..]
            .iter()
            .map(|r| r.headers[reqwest::header::CONTENT_RANGE].to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            ranges,
            vec![
                format!("bytes 0-262143/{}", total),
                format!("bytes 262144-524287/{}", total),
                format!("bytes */{}", total),
                format!("bytes 307200-569343/{}", total),
                format!("bytes 569344-614399/{}", total),
            ]
        );
        assert!(sent[1..].iter().all(|r| r.url == session));
    }

    #[tokio::test]
    async fn test_resumable_upload_without_completion_is_bounded() {
        let session = "https://upload.example/session/stuck";
        let total = 1024usize;
        let transport = StubTransport::then_always(
            vec![Ok((200, vec![("location", session.to_string())], String::new()))],
            // Every byte acknowledged, but never a final response.
            Ok((308, vec![("range", format!("bytes=0-{}", total - 1))], String::new())),
        );
        let exec = executor(transport.clone())
            .with_retry_policy(fast_policy(3))
            .with_upload_options(UploadOptions {
                protocol: UploadProtocol::Resumable,
                resumable_threshold: 0,
                chunk_size: 256 * 1024,
            });

        let err = exec
            .invoke(
                &REFERENCES_INSERT,
                CallParams::new().media(Media::new("audio/wav", Bytes::from(vec![3u8; total]))),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UploadInterrupted { .. }), "{:?}", err);
        // Initiation, the chunk, then one status query per retry.
        let sent = transport.requests();
        assert_eq!(sent.len(), 5);
        assert!(sent[2..]
            .iter()
            .all(|r| r.headers[reqwest::header::CONTENT_RANGE] == format!("bytes */{}", total)));
    }

    #[tokio::test]
    async fn test_resumable_upload_progress_renews_retry_budget() {
        let session = "https://upload.example/session/slow";
        let chunk = 256 * 1024;
        let total = 4 * chunk;
        let transport = StubTransport::slow(
            vec![
                Ok((200, vec![("location", session.to_string())], String::new())),
                Ok((308, vec![("range", format!("bytes=0-{}", chunk - 1))], String::new())),
                Ok((308, vec![("range", format!("bytes=0-{}", 2 * chunk - 1))], String::new())),
                Err(TransportError::Connect("reset".into())),
                // Status query: nothing of the third chunk arrived
                Ok((308, vec![("range", format!("bytes=0-{}", 2 * chunk - 1))], String::new())),
                Ok((308, vec![("range", format!("bytes=0-{}", 3 * chunk - 1))], String::new())),
                ok(r#"{"id":"R2"}"#),
            ],
            Duration::from_millis(400),
        );
        // The whole upload takes longer than `max_elapsed`; each failure run does not.
        let exec = executor(transport.clone())
            .with_retry_policy(RetryPolicy {
                max_elapsed: Duration::from_secs(1),
                ..fast_policy(3)
            })
            .with_upload_options(UploadOptions {
                protocol: UploadProtocol::Resumable,
                resumable_threshold: 0,
                chunk_size: chunk as u64,
            });

        let value = exec
            .invoke(
                &REFERENCES_INSERT,
                CallParams::new().media(Media::new("video/mp4", Bytes::from(vec![5u8; total]))),
            )
            .await
            .unwrap();

        assert_eq!(value["id"], "R2");
        let ranges: Vec<String> = transport.requests()[1..]
            .iter()
            .map(|r| r.headers[reqwest::header::CONTENT_RANGE].to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            ranges,
            vec![
                format!("bytes 0-262143/{}", total),
                format!("bytes 262144-524287/{}", total),
                format!("bytes 524288-786431/{}", total),
                format!("bytes */{}", total),
                format!("bytes 524288-786431/{}", total),
                format!("bytes 786432-1048575/{}", total),
            ]
        );
    }

    #[tokio::test]
    async fn test_resumable_upload_cancel_releases_session() {
        let session = "https://upload.example/session/1";
        let transport = StubTransport::new(vec![
            Ok((200, vec![("location", session.to_string())], String::new())),
            status(503),
            // DELETE releasing the session
            Ok((499, vec![], String::new())),
        ]);
        let exec = executor(transport.clone())
            .with_retry_policy(RetryPolicy {
                initial_backoff: Duration::from_secs(10),
                ..fast_policy(3)
            })
            .with_upload_options(UploadOptions {
                protocol: UploadProtocol::Resumable,
                resumable_threshold: 0,
                chunk_size: 256 * 1024,
            });

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = exec
            .invoke_with_cancel(
                &REFERENCES_INSERT,
                CallParams::new().media(Media::new("audio/wav", Bytes::from(vec![1u8; 1024]))),
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Cancelled));
        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[2].method, HttpMethod::Delete);
        assert_eq!(sent[2].url, session);
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::new("http://127.0.0.1:9000", "/youtube/partner/v1");
        assert_eq!(endpoints.base_url, "http://127.0.0.1:9000/youtube/partner/v1/");
        assert_eq!(
            endpoints.upload_base_url,
            "http://127.0.0.1:9000/upload/youtube/partner/v1/"
        );
    }
}
