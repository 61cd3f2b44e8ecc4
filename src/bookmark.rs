/// Data structures for Domain Replacer
use serde::{Deserialize, Serialize};

/// A node of the browser bookmark tree
///
/// Leaves carry a `url`, folders carry `children`. Extra fields the browser
/// sends (`parentId`, `index`, `dateAdded`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,
}

impl BookmarkNode {
    pub fn bookmark(id: &str, title: &str, url: &str) -> BookmarkNode {
        BookmarkNode {
            id: id.to_string(),
            title: title.to_string(),
            url: Some(url.to_string()),
            children: None,
        }
    }

    pub fn folder(id: &str, title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode {
            id: id.to_string(),
            title: title.to_string(),
            url: None,
            children: Some(children),
        }
    }
}

/// One URL rewrite, reported back to the popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diff {
    pub id: String,
    pub title: String,
    pub old_url: String,
    pub new_url: String,
}

/// Collect every node that has a URL, depth-first pre-order, children in
/// stored order.
pub fn flatten_bookmarks(nodes: &[BookmarkNode]) -> Vec<&BookmarkNode> {
    let mut leaves = Vec::new();
    collect(nodes, &mut leaves);
    leaves
}

fn collect<'a>(nodes: &'a [BookmarkNode], leaves: &mut Vec<&'a BookmarkNode>) {
    for node in nodes {
        if node.url.is_some() {
            leaves.push(node);
        }
        if let Some(children) = &node.children {
            collect(children, leaves);
        }
    }
}
