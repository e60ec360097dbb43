// Dashboard registry - the one shared layout cell behind the mounted sub-app
use crate::domain::layout::LayoutNode;
use std::sync::RwLock;

pub const DEFAULT_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// One registry exists per process: constructed once at startup, shared via
/// `Arc` through the application state, and mounted at a fixed URL prefix.
/// Any request handler may replace the layout; renders observe whichever
/// layout is current (last writer wins, no isolation).
#[derive(Debug)]
pub struct DashboardRegistry {
    mount_prefix: String,
    stylesheets: Vec<String>,
    layout: RwLock<LayoutNode>,
}

impl DashboardRegistry {
    pub fn new(mount_prefix: String, stylesheets: Vec<String>) -> Self {
        let stylesheets = if stylesheets.is_empty() {
            vec![DEFAULT_STYLESHEET.to_string()]
        } else {
            stylesheets
        };
        Self {
            mount_prefix: mount_prefix.trim_end_matches('/').to_string(),
            stylesheets,
            layout: RwLock::new(LayoutNode::empty()),
        }
    }

    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Replace the current layout wholesale. The previous tree is dropped.
    pub fn set_layout(&self, tree: LayoutNode) {
        // The cell always holds a whole tree, so a poisoned lock is safe to
        // take over.
        let mut layout = self.layout.write().unwrap_or_else(|e| e.into_inner());
        *layout = tree;
    }

    /// Clone the current layout for rendering.
    pub fn layout(&self) -> LayoutNode {
        self.layout
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
