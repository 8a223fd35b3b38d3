//! # Navigation History
//!
//! Browser-style back/forward stack of visited paths, plus the URL shape a
//! location is persisted as (`/` for the root, `/?path=<id>` otherwise).
//!
//! ```text
//! push(a) push(b) push(c)   [root, a, b, c]   cursor → c
//! back() back()             [root, a, b, c]   cursor → a
//! push(d)                   [root, a, d]      forward entries dropped
//! ```

use crate::core::node::{ROOT_ID, is_root};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(ROOT_ID)
    }
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize(initial)],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Records a fresh navigation. Re-visiting the current path is a no-op.
    pub fn push(&mut self, path: &str) {
        let path = normalize(path);
        if self.current() == path {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

fn normalize(path: &str) -> String {
    if is_root(path) {
        ROOT_ID.to_string()
    } else {
        path.to_string()
    }
}

pub fn url_for(path: &str) -> String {
    if is_root(path) {
        "/".to_string()
    } else {
        format!("/?path={path}")
    }
}

/// Inverse of [`url_for`]. Accepts full URLs too; anything without a
/// `path` query parameter restores the root.
pub fn path_from_url(url: &str) -> String {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
    let query = query.split('#').next().unwrap_or("");
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "path")
        .map(|(_, value)| normalize(value))
        .unwrap_or_else(|| ROOT_ID.to_string())
}
