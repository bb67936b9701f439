//! Directory listing for the README project tree.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::ReadmeError;

/// Nested directory graph, sorted by name at every level.
#[derive(Default)]
struct Node {
    dirs: BTreeMap<String, Node>,
    files: BTreeSet<String>,
}

impl Node {
    fn insert(&mut self, rel: &Path, is_dir: bool) {
        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((leaf, parents)) = components.split_last() else {
            return;
        };

        let mut node = self;
        for part in parents {
            node = node.dirs.entry(part.clone()).or_default();
        }
        if is_dir {
            node.dirs.entry(leaf.clone()).or_default();
        } else {
            node.files.insert(leaf.clone());
        }
    }
}

/// Render the file tree under `root` as a text block.
///
/// Respects `.gitignore`, skips hidden entries, and additionally excludes
/// the given directory names. Directories come before files at each level,
/// both sorted by name, with the glyph layout of the classic `tree` tool:
///
/// ```text
/// .
/// ├── src/
/// │   ├── lib.rs
/// │   └── main.rs
/// └── README.md
/// ```
pub fn render_tree(root: &Path, exclude: &[String]) -> Result<String, ReadmeError> {
    let mut overrides = OverrideBuilder::new(root);
    for name in exclude {
        // Leading '!' makes an override pattern an exclusion
        overrides
            .add(&format!("!{name}"))
            .map_err(ReadmeError::ScanFailed)?;
    }
    let overrides = overrides.build().map_err(ReadmeError::ScanFailed)?;

    let walker = WalkBuilder::new(root)
        .overrides(overrides)
        .hidden(true)
        .git_ignore(true)
        // Honor .gitignore files even when the root is not a git repo
        .require_git(false)
        .build();

    let mut tree = Node::default();
    for entry in walker {
        let entry = entry.map_err(ReadmeError::ScanFailed)?;
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        tree.insert(rel, is_dir);
    }

    let mut out = String::from(".\n");
    render_node(&tree, "", &mut out);
    Ok(out)
}

fn render_node(node: &Node, prefix: &str, out: &mut String) {
    let total = node.dirs.len() + node.files.len();
    let mut index = 0;

    for (name, child) in &node.dirs {
        index += 1;
        let last = index == total;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        out.push_str("/\n");

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_node(child, &child_prefix, out);
    }

    for name in &node.files {
        index += 1;
        let last = index == total;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');
    }
}
