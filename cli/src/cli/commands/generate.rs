use std::path::Path;

use youtube_partner_core::discovery::{load_discovery, parse_discovery, render_table};

pub fn run(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Discovery document not found: {:?}", path);
    }

    let doc = load_discovery(path)?;
    let methods = parse_discovery(&doc)?;
    tracing::info!(
        "Generating {} method(s) for {} {}",
        methods.len(),
        doc.name,
        doc.version
    );

    print!("{}", render_table(&doc, &methods));
    Ok(())
}
