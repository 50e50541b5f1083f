//! Method descriptors - the declarative shape of one REST endpoint

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Parse a discovery-document verb such as `"GET"`.
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Immutable description of one API method.
///
/// `url_template` is relative to the service base URL and
/// `media_upload_path` (when present) to the upload base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub id: &'static str,
    pub http_method: HttpMethod,
    pub url_template: &'static str,
    pub required_params: &'static [&'static str],
    pub path_params: &'static [&'static str],
    pub media_upload_path: Option<&'static str>,
}

impl MethodDescriptor {
    pub fn supports_media_upload(&self) -> bool {
        self.media_upload_path.is_some()
    }

    /// Resource group of the method, e.g. `claims` for `youtubePartner.claims.get`.
    pub fn resource(&self) -> &'static str {
        let mut parts = self.id.rsplitn(3, '.');
        let _method = parts.next();
        parts.next().unwrap_or(self.id)
    }

    /// Short method name, e.g. `get`.
    pub fn name(&self) -> &'static str {
        self.id.rsplit('.').next().unwrap_or(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: MethodDescriptor = MethodDescriptor {
        id: "youtubePartner.videoAdvertisingOptions.getEnabledAds",
        http_method: HttpMethod::Get,
        url_template: "videoAdvertisingOptions/{videoId}/getEnabledAds",
        required_params: &["videoId"],
        path_params: &["videoId"],
        media_upload_path: None,
    };

    #[test]
    fn test_resource_and_name() {
        assert_eq!(SAMPLE.resource(), "videoAdvertisingOptions");
        assert_eq!(SAMPLE.name(), "getEnabledAds");
        assert!(!SAMPLE.supports_media_upload());
    }

    #[test]
    fn test_parse_verb() {
        assert_eq!(HttpMethod::parse("patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("DELETE"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::parse("HEAD"), None);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}
