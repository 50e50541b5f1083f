use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use youtube_partner_core::api::{find_method, YouTubePartner};
use youtube_partner_core::client::{
    executor_from_config, CallParams, Media, MethodDescriptor, ParamValue,
};
use youtube_partner_core::config::Config;

use crate::cli::CallArgs;

const METHOD_PREFIX: &str = "youtubePartner.";

pub async fn run(mut config: Config, args: CallArgs) -> anyhow::Result<()> {
    let descriptor = lookup(&args.method)?;

    if let Some(protocol) = args.upload_protocol {
        config.upload.protocol = protocol;
    }

    let params = build_params(
        &args.params,
        args.body.as_deref(),
        args.media.as_deref(),
        &args.mime_type,
    )?;

    let executor = executor_from_config(&config)?;
    let mut hub = YouTubePartner::new(Arc::new(executor));
    if let Some(owner) = &config.api.on_behalf_of_content_owner {
        hub = hub.with_content_owner(owner.clone());
    }

    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling call");
            watcher.cancel();
        }
    });

    tracing::info!("Calling {}", descriptor.id);
    let value = hub.call_with_cancel(descriptor, params, &cancel).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Accepts either the full id or the `resource.method` short form.
fn lookup(method: &str) -> anyhow::Result<&'static MethodDescriptor> {
    find_method(method)
        .or_else(|| find_method(&format!("{}{}", METHOD_PREFIX, method)))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown method '{}'. Run `youtube-partner methods` to list them.",
                method
            )
        })
}

fn build_params(
    pairs: &[(String, String)],
    body: Option<&Path>,
    media: Option<&Path>,
    mime_type: &str,
) -> anyhow::Result<CallParams> {
    let mut params = CallParams::new();

    for (key, value) in pairs {
        let merged = match params.remove(key) {
            None => ParamValue::from(value.as_str()),
            Some(ParamValue::List(mut items)) => {
                items.push(value.clone());
                ParamValue::List(items)
            }
            Some(previous) => {
                let mut items = previous.to_wire_values();
                items.push(value.clone());
                ParamValue::List(items)
            }
        };
        params.set(key.clone(), merged);
    }

    if let Some(path) = body {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read body {:?}: {}", path, e))?;
        params = params.resource(serde_json::from_str(&content)?);
    }

    if let Some(path) = media {
        let data = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read media {:?}: {}", path, e))?;
        tracing::debug!("Loaded {} bytes of media from {:?}", data.len(), path);
        params = params.media(Media::new(mime_type, Bytes::from(data)));
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_short_form() {
        assert_eq!(lookup("claims.get").unwrap().id, "youtubePartner.claims.get");
        assert_eq!(
            lookup("youtubePartner.package.insert").unwrap().id,
            "youtubePartner.package.insert"
        );
        assert!(lookup("claims.nope").is_err());
    }

    #[test]
    fn test_repeated_params_become_list() {
        let pairs = vec![
            ("id".to_string(), "A1".to_string()),
            ("id".to_string(), "A2".to_string()),
            ("id".to_string(), "A3".to_string()),
            ("fetchMetadata".to_string(), "effective".to_string()),
        ];
        let params = build_params(&pairs, None, None, "text/plain").unwrap();
        assert_eq!(
            params.get("id"),
            Some(&ParamValue::List(vec![
                "A1".to_string(),
                "A2".to_string(),
                "A3".to_string()
            ]))
        );
        assert_eq!(params.get("fetchMetadata"), Some(&ParamValue::from("effective")));
    }

    #[test]
    fn test_body_and_media_files() {
        let dir = tempfile::tempdir().unwrap();
        let body = dir.path().join("claim.json");
        let media = dir.path().join("ref.mp4");
        std::fs::write(&body, r#"{"assetId":"A1"}"#).unwrap();
        std::fs::write(&media, b"0123456789").unwrap();

        let params = build_params(&[], Some(&body), Some(&media), "video/mp4").unwrap();
        assert_eq!(params.resource_body().unwrap()["assetId"], "A1");
        let m = params.media_body().unwrap();
        assert_eq!(m.mime_type, "video/mp4");
        assert_eq!(m.len(), 10);
    }

    #[test]
    fn test_missing_body_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(build_params(&[], Some(&missing), None, "text/plain").is_err());
    }
}
