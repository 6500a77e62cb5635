//! Gathers source material from disk for the `files` input block.
//!
//! Content is copied verbatim; nothing is parsed or interpreted.

use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SourceConfig;

/// Collects a directory tree and file contents under a root.
pub struct SourceCollector {
    root_path: PathBuf,
    config: SourceConfig,
}

impl SourceCollector {
    /// Creates a collector rooted at the given path with default limits.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            config: SourceConfig::default(),
        }
    }

    /// Creates a collector with custom configuration.
    pub fn with_config(root_path: impl Into<PathBuf>, config: SourceConfig) -> Self {
        Self {
            root_path: root_path.into(),
            config,
        }
    }

    /// Walks the root once and returns its tree plus matching files.
    ///
    /// Both halves come from the same walk, so hidden, gitignored and
    /// excluded paths are missing from the tree as well as the files.
    pub fn collect(&self) -> Result<SourceBundle, SourceError> {
        let entries = self.walk();
        let tree = render_tree(&entries);

        let mut files = Vec::new();
        let mut total_size: u64 = 0;

        for entry in entries.iter().filter(|e| !e.is_dir) {
            let extension = entry.path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.config.include_extensions.iter().any(|e| e == extension) {
                continue;
            }

            let path = self.root_path.join(&entry.path);
            let metadata = fs::metadata(&path).map_err(|e| SourceError::io(&path, e))?;
            if metadata.len() > self.config.max_file_size {
                tracing::debug!(path = %path.display(), size = metadata.len(), "skipping large file");
                continue;
            }
            if total_size + metadata.len() > self.config.max_total_size {
                tracing::debug!("total size limit reached, stopping");
                break;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    tracing::debug!(path = %path.display(), "skipping non-UTF-8 file");
                    continue;
                }
                Err(e) => return Err(SourceError::io(&path, e)),
            };

            total_size += metadata.len();
            files.push(SourceFile {
                path: entry.path.to_string_lossy().replace('\\', "/"),
                content,
            });
        }

        tracing::debug!(
            root = %self.root_path.display(),
            entries = entries.len(),
            files = files.len(),
            "collected source files"
        );

        Ok(SourceBundle { tree, files })
    }

    /// Every visible entry under the root, in walk order, root excluded.
    fn walk(&self) -> Vec<WalkedEntry> {
        let exclude_dirs = self.config.exclude_dirs.clone();

        let walker = WalkBuilder::new(&self.root_path)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let name = entry.file_name().to_string_lossy();
                entry.depth() == 0 || !is_dir || !exclude_dirs.iter().any(|d| *d == name)
            })
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root_path)
                .unwrap_or(entry.path())
                .to_path_buf();
            entries.push(WalkedEntry {
                path: relative,
                depth: entry.depth(),
                is_dir: entry.file_type().is_some_and(|t| t.is_dir()),
            });
        }

        entries
    }
}

/// One path seen by the walker, relative to the root.
#[derive(Debug)]
struct WalkedEntry {
    path: PathBuf,
    depth: usize,
    is_dir: bool,
}

/// Draws walk-ordered entries as a box-drawing tree.
fn render_tree(entries: &[WalkedEntry]) -> String {
    // An entry is last when no later sibling follows before its parent closes.
    let mut is_last = vec![false; entries.len()];
    let mut sibling_follows: Vec<bool> = Vec::new();
    for (i, entry) in entries.iter().enumerate().rev() {
        if sibling_follows.len() <= entry.depth {
            sibling_follows.resize(entry.depth + 1, false);
        }
        is_last[i] = !sibling_follows[entry.depth];
        sibling_follows[entry.depth] = true;
        sibling_follows.truncate(entry.depth + 1);
    }

    let mut tree = String::new();
    // Whether the open ancestor at each depth was the last of its siblings.
    let mut ancestors_last: Vec<bool> = Vec::new();

    for (entry, &last) in entries.iter().zip(&is_last) {
        ancestors_last.truncate(entry.depth.saturating_sub(1));
        for &ancestor_last in &ancestors_last {
            tree.push_str(if ancestor_last { "    " } else { "│   " });
        }
        tree.push_str(if last { "└── " } else { "├── " });
        if let Some(name) = entry.path.file_name() {
            tree.push_str(&name.to_string_lossy());
        }
        if entry.is_dir {
            tree.push('/');
            ancestors_last.push(last);
        }
        tree.push('\n');
    }

    tree
}

/// A directory tree and the files gathered under it.
#[derive(Debug, Clone)]
pub struct SourceBundle {
    /// Directory structure tree
    pub tree: String,
    /// File contents
    pub files: Vec<SourceFile>,
}

impl SourceBundle {
    /// Formats the bundle as pasteable text: tree first, then each file fenced.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        text.push_str("## Directory Structure\n\n```\n");
        text.push_str(&self.tree);
        text.push_str("```\n");

        for file in &self.files {
            text.push_str(&format!("\n### {}\n\n```\n", file.path));
            text.push_str(&file.content);
            if !file.content.ends_with('\n') {
                text.push('\n');
            }
            text.push_str("```\n");
        }

        text
    }
}

/// One gathered file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the collector root, `/`-separated
    pub path: String,
    pub content: String,
}

/// Reads a whole text file, e.g. a description or old docs.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| SourceError::io(path, e))
}

/// Errors that can occur while gathering source material.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}
