//! URL templating: `{name}` path substitution and query-string encoding

use std::collections::BTreeMap;

use super::error::ApiError;
use super::params::ParamValue;

/// Substitute the path placeholders of `template`.
///
/// Values for `path_params` are taken out of `values`, so whatever remains
/// afterwards is destined for the query string. Placeholders not listed in
/// `path_params` are left untouched.
pub fn expand(
    method: &'static str,
    template: &str,
    path_params: &[&str],
    values: &mut BTreeMap<String, ParamValue>,
) -> Result<String, ApiError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|c| open + c) else {
            break;
        };

        out.push_str(&rest[..open]);
        let name = &rest[open + 1..close];

        if path_params.contains(&name) {
            let value = values
                .remove(name)
                .ok_or_else(|| ApiError::MissingPathParameter {
                    method,
                    name: name.to_string(),
                })?;
            out.push_str(&urlencoding::encode(&value.to_path_value()));
        } else {
            out.push_str(&rest[open..=close]);
        }

        rest = &rest[close + 1..];
    }
    out.push_str(rest);

    // Path params that have no placeholder in the template still must not
    // leak into the query string.
    for name in path_params {
        values.remove(*name);
    }

    Ok(out)
}

/// Render remaining parameters as a query string, sorted by key.
pub fn encode_query(values: &BTreeMap<String, ParamValue>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in values {
        let key = urlencoding::encode(key);
        for item in value.to_wire_values() {
            pairs.push(format!("{}={}", key, urlencoding::encode(&item)));
        }
    }
    pairs.join("&")
}

/// Join a base URL, a relative path and an optional query string.
pub fn join_url(base: &str, path: &str, query: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len() + query.len() + 2);
    url.push_str(base.trim_end_matches('/'));
    if !path.is_empty() {
        url.push('/');
        url.push_str(path.trim_start_matches('/'));
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}
