//! Media upload: multipart encoding and the resumable session protocol

use bytes::{BufMut, Bytes, BytesMut};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::descriptor::HttpMethod;
use super::error::ApiError;
use super::executor::Executor;
use super::params::Media;
use super::retry::{classify, Backoff};
use super::transport::{HttpRequest, HttpResponse};

/// Resumable chunks must be a multiple of this many bytes.
pub const CHUNK_GRANULARITY: u64 = 256 * 1024;

const STATUS_RESUME_INCOMPLETE: u16 = 308;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UploadProtocol {
    /// Multipart below the threshold, resumable above it.
    #[default]
    Auto,
    Multipart,
    Resumable,
}

impl std::str::FromStr for UploadProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(UploadProtocol::Auto),
            "multipart" => Ok(UploadProtocol::Multipart),
            "resumable" => Ok(UploadProtocol::Resumable),
            other => Err(format!("unknown upload protocol: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub protocol: UploadProtocol,
    pub resumable_threshold: u64,
    pub chunk_size: u64,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            protocol: UploadProtocol::Auto,
            resumable_threshold: 5 * 1024 * 1024,
            chunk_size: 8 * 1024 * 1024,
        }
    }
}

impl UploadOptions {
    /// Concrete protocol for a payload of `size` bytes.
    pub fn choose(&self, size: u64) -> UploadProtocol {
        match self.protocol {
            UploadProtocol::Auto if size > self.resumable_threshold => UploadProtocol::Resumable,
            UploadProtocol::Auto => UploadProtocol::Multipart,
            explicit => explicit,
        }
    }

    /// Chunk size rounded up to the 256 KiB granularity.
    pub fn effective_chunk_size(&self) -> u64 {
        let chunks = self.chunk_size.div_ceil(CHUNK_GRANULARITY).max(1);
        chunks * CHUNK_GRANULARITY
    }
}

/// Encode metadata and media as a `multipart/related` body.
pub fn multipart_body(metadata: &Value, media: &Media, boundary: &str) -> Bytes {
    let metadata = metadata.to_string();
    let mut buf = BytesMut::with_capacity(metadata.len() + media.body.len() + 256);

    buf.put_slice(format!("--{}\r\n", boundary).as_bytes());
    buf.put_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
    buf.put_slice(metadata.as_bytes());
    buf.put_slice(format!("\r\n--{}\r\n", boundary).as_bytes());
    buf.put_slice(format!("Content-Type: {}\r\n\r\n", media.mime_type).as_bytes());
    buf.put_slice(&media.body);
    buf.put_slice(format!("\r\n--{}--", boundary).as_bytes());

    buf.freeze()
}

/// Next offset to send, from a `Range: bytes=0-N` header.
pub fn next_offset_from_range(range: Option<&str>) -> u64 {
    range
        .and_then(|r| r.trim().strip_prefix("bytes="))
        .and_then(|r| r.split('-').nth(1))
        .and_then(|end| end.trim().parse::<u64>().ok())
        .map(|end| end + 1)
        .unwrap_or(0)
}

enum SessionStatus {
    Complete(HttpResponse),
    Resume(u64),
}

/// State of one resumable upload. The session URI never outlives it.
pub(crate) struct ResumableSession<'a> {
    executor: &'a Executor,
    session_uri: String,
    media: &'a Media,
    chunk_size: u64,
}

impl<'a> ResumableSession<'a> {
    pub(crate) fn new(executor: &'a Executor, session_uri: String, media: &'a Media) -> Self {
        Self {
            executor,
            chunk_size: executor.upload_options().effective_chunk_size(),
            session_uri,
            media,
        }
    }

    /// Send the media, resuming from the server-acknowledged offset after
    /// transient failures.
    pub(crate) async fn run(self, cancel: &CancellationToken) -> Result<HttpResponse, ApiError> {
        let total = self.media.len();
        let policy = self.executor.retry_policy().clone();
        let mut backoff = Backoff::new(&policy);
        let mut offset = 0u64;
        let mut needs_status = false;

        tracing::info!("Resumable upload started: {} bytes", total);

        loop {
            if cancel.is_cancelled() {
                return Err(self.abort().await);
            }

            let queried = needs_status;
            let outcome = if queried {
                self.query_status(cancel).await
            } else {
                self.send_chunk(offset, cancel).await
            };

            let err = match outcome {
                Ok(SessionStatus::Complete(resp)) => {
                    tracing::info!("Resumable upload complete: {} bytes", total);
                    return Ok(resp);
                }
                // A status query may report no new bytes; a chunk must advance
                // the offset. Either way the upload cannot be complete yet.
                Ok(SessionStatus::Resume(next)) if next < total && (queried || next > offset) => {
                    tracing::debug!("Upload acknowledged up to byte {}/{}", next, total);
                    if next > offset {
                        backoff = Backoff::new(&policy);
                    }
                    offset = next;
                    needs_status = false;
                    continue;
                }
                Ok(SessionStatus::Resume(next)) => ApiError::UploadInterrupted {
                    offset,
                    message: format!(
                        "server acknowledged {} of {} bytes without completing the upload",
                        next, total
                    ),
                },
                Err(ApiError::Cancelled) => return Err(self.abort().await),
                Err(e) if e.is_retryable() => ApiError::UploadInterrupted {
                    offset,
                    message: e.to_string(),
                },
                Err(e) => return Err(e),
            };

            let Some(delay) = backoff.next_delay(None) else {
                tracing::error!("Giving up on resumable upload: {}", err);
                return Err(err);
            };

            tracing::warn!("{}; resuming in {:?}", err, delay);
            tokio::select! {
                _ = cancel.cancelled() => return Err(self.abort().await),
                _ = tokio::time::sleep(delay) => {}
            }
            needs_status = true;
        }
    }

    async fn send_chunk(
        &self,
        offset: u64,
        cancel: &CancellationToken,
    ) -> Result<SessionStatus, ApiError> {
        let total = self.media.len();
        let offset = offset.min(total);
        let end = (offset + self.chunk_size).min(total);
        let content_range = if offset >= total {
            format!("bytes */{}", total)
        } else {
            format!("bytes {}-{}/{}", offset, end - 1, total)
        };

        tracing::debug!("Uploading chunk: {}", content_range);

        let mut request = HttpRequest::new(HttpMethod::Put, self.session_uri.clone());
        request.headers = chunk_headers(&self.media.mime_type, &content_range)?;
        request.body = Some(self.media.body.slice(offset as usize..end as usize));

        let resp = self.executor.send_once(request, cancel).await?;
        session_status(resp)
    }

    async fn query_status(&self, cancel: &CancellationToken) -> Result<SessionStatus, ApiError> {
        let content_range = format!("bytes */{}", self.media.len());
        let mut request = HttpRequest::new(HttpMethod::Put, self.session_uri.clone());
        request.headers = chunk_headers(&self.media.mime_type, &content_range)?;
        request.body = Some(Bytes::new());

        let resp = self.executor.send_once(request, cancel).await?;
        session_status(resp)
    }

    /// Release the session on the server and report the cancellation.
    async fn abort(&self) -> ApiError {
        tracing::info!("Upload cancelled, releasing session");
        let request = HttpRequest::new(HttpMethod::Delete, self.session_uri.clone());
        if let Err(e) = self.executor.send_detached(request).await {
            tracing::debug!("Failed to release upload session: {}", e);
        }
        ApiError::Cancelled
    }
}

fn chunk_headers(mime_type: &str, content_range: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_str(mime_type).map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
    );
    headers.insert(
        CONTENT_RANGE,
        HeaderValue::from_str(content_range)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
    );
    Ok(headers)
}

fn session_status(resp: HttpResponse) -> Result<SessionStatus, ApiError> {
    if resp.status.is_success() {
        return Ok(SessionStatus::Complete(resp));
    }
    if resp.status.as_u16() == STATUS_RESUME_INCOMPLETE {
        return Ok(SessionStatus::Resume(next_offset_from_range(resp.header("range"))));
    }
    if resp.status == StatusCode::NOT_FOUND || resp.status == StatusCode::GONE {
        // The session expired; it can only be restarted from scratch.
        return Err(ApiError::Client {
            status: resp.status.as_u16(),
            body: resp.text(),
        });
    }
    Err(classify(resp.status, resp.header("retry-after"), resp.text()))
}
