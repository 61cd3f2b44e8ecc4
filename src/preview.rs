/// Dry-run preview rows shown in the popup
use crate::bookmark::BookmarkNode;
use crate::replacer::rewrite_url;
use crate::matcher::Matcher;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    pub original_url: String,
}

impl PreviewEntry {
    pub fn changed(&self) -> bool {
        self.url != self.original_url
    }
}

/// Rows for the loaded bookmarks with nothing replaced
pub fn unchanged_preview(bookmarks: &[BookmarkNode]) -> Vec<PreviewEntry> {
    bookmarks
        .iter()
        .filter_map(|node| {
            let url = node.url.clone()?;
            Some(PreviewEntry {
                id: node.id.clone(),
                title: node.title.clone(),
                url: url.clone(),
                original_url: url,
            })
        })
        .collect()
}

/// Rows showing what a replace run would write, using the same rewrite rule
pub fn build_preview(bookmarks: &[BookmarkNode], matcher: &Matcher, to: &str) -> Vec<PreviewEntry> {
    unchanged_preview(bookmarks)
        .into_iter()
        .map(|mut entry| {
            if let Some(new_url) = rewrite_url(&entry.original_url, matcher, to) {
                entry.url = new_url;
            }
            entry
        })
        .collect()
}

pub fn visible_entries(entries: &[PreviewEntry], only_changed: bool) -> Vec<&PreviewEntry> {
    entries
        .iter()
        .filter(|entry| !only_changed || entry.changed())
        .collect()
}
