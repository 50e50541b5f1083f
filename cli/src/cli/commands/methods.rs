use youtube_partner_core::api::ALL_METHODS;
use youtube_partner_core::client::MethodDescriptor;

pub fn run(resource: Option<&str>) {
    let methods = select(resource);

    if methods.is_empty() {
        println!("No methods found.");
        return;
    }

    println!("{:<55} {:<7} {:<50} {}", "METHOD", "VERB", "PATH", "REQUIRED");
    println!("{}", "-".repeat(130));

    for m in &methods {
        let path = match m.media_upload_path {
            Some(_) => format!("{} (+upload)", m.url_template),
            None => m.url_template.to_string(),
        };
        println!(
            "{:<55} {:<7} {:<50} {}",
            m.id,
            m.http_method,
            path,
            m.required_params.join(", ")
        );
    }

    println!();
    println!("{} method(s)", methods.len());
}

fn select(resource: Option<&str>) -> Vec<&'static MethodDescriptor> {
    ALL_METHODS
        .iter()
        .copied()
        .filter(|m| resource.map_or(true, |r| m.resource().eq_ignore_ascii_case(r)))
        .collect()
}
