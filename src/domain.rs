/// Domain input cleanup and URL display helpers for the popup
use url::Url;

const PREVIEW_MAX_CHARS: usize = 50;

/// Turn what a user pastes into the domain fields into a bare host pattern
///
/// Examples:
/// - `https://example.com/` → `example.com`
/// - `http://*.example.com` → `*.example.com`
/// - `example.com` → `example.com`
pub fn normalize_domain_input(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}

/// Short display form of a bookmark URL: host, path and query, no scheme
///
/// Algorithm:
/// 1. Parse the URL; unparseable input is shown as-is
/// 2. Hostname, then the path unless it is just "/", then the query
/// 3. Drop one trailing "/"
/// 4. Cut to 47 characters plus "..." when longer than 50
pub fn format_preview_url(raw: &str) -> String {
    let display = match Url::parse(raw) {
        Ok(url) => {
            let mut s = url.host_str().unwrap_or("").to_string();
            if url.path() != "/" {
                s.push_str(url.path());
            }
            if let Some(query) = url.query().filter(|q| !q.is_empty()) {
                s.push('?');
                s.push_str(query);
            }
            s.strip_suffix('/').map(str::to_string).unwrap_or(s)
        }
        Err(_) => raw.to_string(),
    };

    truncate(&display)
}

fn truncate(s: &str) -> String {
    if s.chars().count() > PREVIEW_MAX_CHARS {
        let head: String = s.chars().take(PREVIEW_MAX_CHARS - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
