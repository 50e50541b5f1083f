//! Discovery document parsing and Call-Site Table generation
//!
//! Reads a Google API discovery document and renders the `api_methods!`
//! invocation that `api/methods.rs` holds, so the table is regenerated
//! rather than edited.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::client::HttpMethod;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub root_url: String,
    #[serde(default)]
    pub service_path: String,
    #[serde(default)]
    pub resources: BTreeMap<String, RestResource>,
}

#[derive(Debug, Deserialize)]
pub struct RestResource {
    #[serde(default)]
    pub methods: BTreeMap<String, RestMethod>,
    #[serde(default)]
    pub resources: BTreeMap<String, RestResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestMethod {
    pub id: String,
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, RestParameter>,
    #[serde(default)]
    pub parameter_order: Vec<String>,
    #[serde(default)]
    pub media_upload: Option<MediaUpload>,
}

#[derive(Debug, Deserialize)]
pub struct RestParameter {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Deserialize)]
pub struct MediaUpload {
    #[serde(default)]
    pub protocols: Option<MediaUploadProtocols>,
}

#[derive(Debug, Deserialize)]
pub struct MediaUploadProtocols {
    pub simple: Option<UploadPath>,
    pub resumable: Option<UploadPath>,
}

#[derive(Debug, Deserialize)]
pub struct UploadPath {
    pub path: Option<String>,
}

/// One method, flattened out of the resource tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    pub id: String,
    /// Dotted resource path, e.g. `claims` or `parent.child`.
    pub resource: String,
    pub name: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub required: Vec<String>,
    pub path_params: Vec<String>,
    pub media_upload_path: Option<String>,
    pub summary: Option<String>,
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

pub fn load_discovery(path: &Path) -> anyhow::Result<DiscoveryDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc = serde_json::from_str(&content)?;
    Ok(doc)
}

/// Flatten every method of the document, sorted by resource then name.
pub fn parse_discovery(doc: &DiscoveryDocument) -> anyhow::Result<Vec<GeneratedMethod>> {
    let mut methods = Vec::new();
    for (name, resource) in &doc.resources {
        collect_methods(doc, name, resource, &mut methods)?;
    }
    methods.sort_by(|a, b| (&a.resource, &a.name).cmp(&(&b.resource, &b.name)));
    Ok(methods)
}

fn collect_methods(
    doc: &DiscoveryDocument,
    resource_path: &str,
    resource: &RestResource,
    out: &mut Vec<GeneratedMethod>,
) -> anyhow::Result<()> {
    for (name, method) in &resource.methods {
        out.push(generate_method(doc, resource_path, name, method)?);
    }
    for (child, nested) in &resource.resources {
        collect_methods(doc, &format!("{}.{}", resource_path, child), nested, out)?;
    }
    Ok(())
}

fn generate_method(
    doc: &DiscoveryDocument,
    resource: &str,
    name: &str,
    method: &RestMethod,
) -> anyhow::Result<GeneratedMethod> {
    let http_method = HttpMethod::parse(&method.http_method).ok_or_else(|| {
        anyhow::anyhow!("{}: unsupported HTTP method {}", method.id, method.http_method)
    })?;

    // parameterOrder lists required parameters in call order; anything
    // required but unlisted follows alphabetically.
    let mut required: Vec<String> = method
        .parameter_order
        .iter()
        .filter(|p| method.parameters.get(*p).map(|d| d.required).unwrap_or(true))
        .cloned()
        .collect();
    for (param, def) in &method.parameters {
        if def.required && !required.contains(param) {
            required.push(param.clone());
        }
    }

    let is_path = |p: &String| {
        method
            .parameters
            .get(p)
            .and_then(|d| d.location.as_deref())
            == Some("path")
    };
    let mut path_params: Vec<String> = required.iter().filter(|p| is_path(p)).cloned().collect();
    for param in method.parameters.keys() {
        if is_path(param) && !path_params.contains(param) {
            path_params.push(param.clone());
        }
    }

    let media_upload_path = method
        .media_upload
        .as_ref()
        .and_then(|m| m.protocols.as_ref())
        .and_then(|p| {
            p.simple
                .as_ref()
                .and_then(|s| s.path.clone())
                .or_else(|| p.resumable.as_ref().and_then(|r| r.path.clone()))
        })
        .map(|p| relative_upload_path(&p, &doc.service_path));

    Ok(GeneratedMethod {
        id: method.id.clone(),
        resource: resource.to_string(),
        name: name.to_string(),
        http_method,
        path: method.path.clone(),
        required,
        path_params,
        media_upload_path,
        summary: method.description.as_deref().map(summary_line),
    })
}

/// Upload paths are root-relative (`/upload/<service>/x`); the table keeps
/// them relative to the upload base URL.
fn relative_upload_path(path: &str, service_path: &str) -> String {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("upload/").unwrap_or(path);
    path.strip_prefix(service_path).unwrap_or(path).to_string()
}

/// First sentence of a description, on one line.
fn summary_line(description: &str) -> String {
    let flat = description.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.find(". ") {
        Some(end) => flat[..=end].to_string(),
        None => flat,
    }
}

/// `assetMatchPolicy` -> `asset_match_policy`
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch == '.' || ch == '-' {
            out.push('_');
        } else if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `parent.childItems` -> `ParentChildItems`
pub fn pascal_case(name: &str) -> String {
    name.split(['.', '_', '-'])
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn ident(name: &str) -> String {
    let snake = snake_case(name);
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Render the `api_methods!` invocation for `methods`.
pub fn render_table(doc: &DiscoveryDocument, methods: &[GeneratedMethod]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Generated from the {} {} discovery document by",
        doc.name, doc.version
    );
    let _ = writeln!(out, "// `youtube-partner generate`. Edit the generator, not this file.");
    let _ = writeln!(out);
    let _ = writeln!(out, "api_methods! {{");

    let mut groups: BTreeMap<&str, Vec<&GeneratedMethod>> = BTreeMap::new();
    for method in methods {
        groups.entry(method.resource.as_str()).or_default().push(method);
    }

    for (resource, methods) in groups {
        let _ = writeln!(
            out,
            "    {} => {} {{",
            pascal_case(resource),
            ident(resource)
        );
        for m in methods {
            render_method(&mut out, m);
        }
        let _ = writeln!(out, "    }},");
    }

    let _ = writeln!(out, "}}");
    out
}

fn render_method(out: &mut String, m: &GeneratedMethod) {
    let konst = format!(
        "{}_{}",
        snake_case(&m.resource).to_ascii_uppercase(),
        snake_case(&m.name).to_ascii_uppercase()
    );
    let required = m
        .required
        .iter()
        .map(|p| format!("{} = \"{}\"", ident(p), p))
        .collect::<Vec<_>>()
        .join(", ");
    let path_params = m
        .path_params
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ");
    let upload = match &m.media_upload_path {
        Some(path) => format!("Some(\"{}\")", path),
        None => "None".to_string(),
    };

    if let Some(summary) = &m.summary {
        let _ = writeln!(out, "        /// {}", summary);
    }
    let _ = writeln!(out, "        {} => {} {{", ident(&m.name), konst);
    let _ = writeln!(out, "            id: \"{}\",", m.id);
    let _ = writeln!(out, "            http: {:?},", m.http_method);
    let _ = writeln!(out, "            path: \"{}\",", m.path);
    let _ = writeln!(out, "            required: [{}],", required);
    let _ = writeln!(out, "            path_params: [{}],", path_params);
    let _ = writeln!(out, "            upload: {},", upload);
    let _ = writeln!(out, "        }},");
}
