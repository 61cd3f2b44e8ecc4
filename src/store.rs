/// Access to the browser bookmark store
use wasm_bindgen::prelude::*;

use crate::bookmark::BookmarkNode;
use crate::error::{ReplaceError, Result};

// Import JS bridge functions
#[wasm_bindgen(module = "/js/bookmarks.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getBookmarkTree() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateBookmarkUrl(id: &str, url: &str) -> std::result::Result<JsValue, JsValue>;
}

/// The two operations a replace run needs from the host.
///
/// Futures are not `Send`: on wasm32 everything runs on the single JS thread.
#[allow(async_fn_in_trait)]
pub trait BookmarkStore {
    /// Snapshot of the full hierarchy, roots first
    async fn get_tree(&self) -> Result<Vec<BookmarkNode>>;

    /// Point update of one bookmark's URL, returning the stored node
    async fn update_url(&self, id: &str, url: &str) -> Result<BookmarkNode>;
}

/// `chrome.bookmarks`, reached through `js/bookmarks.js`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeBookmarks;

impl BookmarkStore for ChromeBookmarks {
    async fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        let tree_js = getBookmarkTree()
            .await
            .map_err(|e| ReplaceError::Fetch(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(tree_js)
            .map_err(|e| ReplaceError::Fetch(format!("Failed to parse tree: {:?}", e)))
    }

    async fn update_url(&self, id: &str, url: &str) -> Result<BookmarkNode> {
        let update_failed = |reason: String| ReplaceError::Update {
            id: id.to_string(),
            reason,
        };

        let node_js = updateBookmarkUrl(id, url)
            .await
            .map_err(|e| update_failed(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(node_js).map_err(|e| update_failed(format!("{:?}", e)))
    }
}
