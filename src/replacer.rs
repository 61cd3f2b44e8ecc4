/// Bookmark URL replacement: dry-run planning and the live run against a store
use url::Url;

use crate::bookmark::{flatten_bookmarks, BookmarkNode, Diff};
use crate::error::Result;
use crate::matcher::Matcher;
use crate::message::ReplaceRequest;
use crate::store::BookmarkStore;

/// Rewrite a single URL if its hostname matches.
///
/// Returns `None` when the URL does not parse or the hostname does not
/// match. Only the first occurrence of the hostname in the raw string is
/// replaced, so a hostname repeated in the query string survives.
pub fn rewrite_url(raw: &str, matcher: &Matcher, to: &str) -> Option<String> {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Skipping unparseable URL {:?}: {}", raw, e);
            return None;
        }
    };

    let hostname = parsed.host_str().unwrap_or("");
    if !matcher.matches(hostname) {
        return None;
    }

    Some(raw.replacen(hostname, to, 1))
}

/// Compute the diffs a replace run would produce, without touching any store
pub fn plan_replacements(tree: &[BookmarkNode], matcher: &Matcher, to: &str) -> Vec<Diff> {
    flatten_bookmarks(tree)
        .into_iter()
        .filter_map(|node| {
            let old_url = node.url.as_deref()?;
            rewrite_url(old_url, matcher, to).map(|new_url| Diff {
                id: node.id.clone(),
                title: node.title.clone(),
                old_url: old_url.to_string(),
                new_url,
            })
        })
        .collect()
}

/// Run a replace against the store, one update at a time.
///
/// Pattern and fetch failures abort the run. A failed update only drops
/// that bookmark from the returned diffs.
pub async fn perform_replace<S: BookmarkStore>(store: &S, request: &ReplaceRequest) -> Result<Vec<Diff>> {
    let matcher = Matcher::new(&request.from, request.mode)?;
    let tree = store.get_tree().await?;

    let planned = plan_replacements(&tree, &matcher, &request.to);
    log::info!(
        "Replacing {:?} -> {:?} ({}): {} matching bookmarks",
        request.from,
        request.to,
        request.mode.as_str(),
        planned.len()
    );

    let mut applied = Vec::with_capacity(planned.len());
    for diff in planned {
        match store.update_url(&diff.id, &diff.new_url).await {
            Ok(_) => applied.push(diff),
            Err(e) => log::warn!("{}", e),
        }
    }

    log::info!("Replace finished: {} bookmarks updated", applied.len());
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchMode;

    fn matcher(pattern: &str, mode: MatchMode) -> Matcher {
        Matcher::new(pattern, mode).unwrap()
    }

    #[test]
    fn test_rewrite_keeps_path_and_query() {
        let m = matcher("old.example.com", MatchMode::Exact);
        assert_eq!(
            rewrite_url("http://old.example.com/path?q=1#top", &m, "new.example.com"),
            Some("http://new.example.com/path?q=1#top".to_string())
        );
    }

    #[test]
    fn test_rewrite_replaces_first_occurrence_only() {
        let m = matcher("old.example.com", MatchMode::Exact);
        assert_eq!(
            rewrite_url("https://old.example.com/?next=old.example.com", &m, "new.example.com"),
            Some("https://new.example.com/?next=old.example.com".to_string())
        );
    }

    #[test]
    fn test_rewrite_keeps_port_and_credentials() {
        let m = matcher("intranet", MatchMode::Exact);
        assert_eq!(
            rewrite_url("http://user:pw@intranet:8080/wiki", &m, "wiki.corp"),
            Some("http://user:pw@wiki.corp:8080/wiki".to_string())
        );
    }

    #[test]
    fn test_rewrite_with_empty_replacement_removes_host() {
        let m = matcher("old.example.com", MatchMode::Exact);
        assert_eq!(
            rewrite_url("http://old.example.com/path", &m, ""),
            Some("http:///path".to_string())
        );
    }

    #[test]
    fn test_rewrite_skips_unparseable_and_non_matching() {
        let m = matcher("*", MatchMode::Wildcard);
        assert_eq!(rewrite_url("not a url", &m, "x.com"), None);
        assert_eq!(rewrite_url("", &m, "x.com"), None);

        let exact = matcher("old.example.com", MatchMode::Exact);
        assert_eq!(rewrite_url("http://other.example.com/", &exact, "x.com"), None);
    }

    #[test]
    fn test_plan_follows_traversal_order() {
        let tree = vec![BookmarkNode::folder(
            "0",
            "",
            vec![
                BookmarkNode::bookmark("3", "Three", "https://a.test.com/3"),
                BookmarkNode::folder(
                    "1",
                    "Folder",
                    vec![BookmarkNode::bookmark("1", "One", "https://b.test.com/1")],
                ),
                BookmarkNode::bookmark("2", "Two", "https://c.other.org/2"),
                BookmarkNode::bookmark("4", "Four", "::broken::"),
                BookmarkNode::bookmark("5", "Five", "https://d.test.com/5"),
            ],
        )];

        let plan = plan_replacements(&tree, &matcher("*.test.com", MatchMode::Wildcard), "x.com");
        let ids: Vec<&str> = plan.iter().map(|d| d.id.as_str()).collect();

        assert_eq!(ids, vec!["3", "1", "5"]);
        assert_eq!(plan[0].new_url, "https://x.com/3");
        assert_eq!(plan[0].old_url, "https://a.test.com/3");
        assert_eq!(plan[0].title, "Three");
    }

    #[test]
    fn test_plan_with_never_matcher_is_empty() {
        let tree = vec![BookmarkNode::bookmark("1", "A", "https://a.example.com/")];
        assert!(plan_replacements(&tree, &Matcher::Never, "x.com").is_empty());
    }
}
