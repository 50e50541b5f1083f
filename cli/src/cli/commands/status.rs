use std::path::Path;

use youtube_partner_core::client::{token_provider_from_config, Endpoints};
use youtube_partner_core::config::{default_config_path, expand_path, Config};
use youtube_partner_core::credentials::load_credentials;

pub async fn run(config: &Config, config_source: Option<&Path>) -> anyhow::Result<()> {
    let endpoints = Endpoints::new(&config.api.root_url, &config.api.service_path);

    println!("YouTube Partner Client Status");
    println!("=============================");
    println!();
    println!("Configuration:");
    println!("  Config file: {}", describe_source(config_source));
    println!("  API base: {}", endpoints.base_url);
    println!("  Upload base: {}", endpoints.upload_base_url);
    println!(
        "  Content owner: {}",
        config.api.on_behalf_of_content_owner.as_deref().unwrap_or("-")
    );
    println!();
    println!("Requests:");
    println!(
        "  Timeouts: {}s request, {}s connect",
        config.timeouts.request_timeout, config.timeouts.connect_timeout
    );
    println!(
        "  Retries: {} (backoff {}ms..{}ms x{}, {}s budget)",
        config.retry.max_retries,
        config.retry.initial_backoff_ms,
        config.retry.max_backoff_ms,
        config.retry.multiplier,
        config.retry.max_elapsed_secs
    );
    println!(
        "  Uploads: {:?}, resumable above {} bytes, {} byte chunks",
        config.upload.protocol,
        config.upload.resumable_threshold_bytes,
        config.upload.chunk_size_bytes
    );
    println!();

    println!("Credentials:");
    if config.auth.access_token.is_some() {
        println!("  Source: static access token");
    } else {
        let path = expand_path(&config.auth.credentials_file);
        println!("  Source: {:?}", path);
        match load_credentials(&path) {
            Ok(credentials) => {
                let expiry = chrono::DateTime::from_timestamp(credentials.token.expiry_timestamp, 0)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "unknown".to_string());
                println!("  Access token expires: {}", expiry);
                println!(
                    "  Refresh token: {}",
                    if credentials.token.refresh_token.is_some() {
                        "present"
                    } else {
                        "missing"
                    }
                );
            }
            Err(e) => {
                println!("  Unreadable: {}", e);
                return Ok(());
            }
        }
    }

    println!();
    let provider = token_provider_from_config(config)?;
    match provider.get_token().await {
        Ok(_) => println!("Authentication: OK ✓"),
        Err(e) => println!("Authentication: FAILED ({})", e),
    }

    Ok(())
}

/// Where the effective config came from.
fn describe_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!("{:?}", path),
        None => format!("none, using defaults (searched {:?})", default_config_path()),
    }
}
