//! Directory tree rendering for progress output.

use std::fs;
use std::io;
use std::path::Path;

/// Renders a human-readable listing of a directory.
pub trait TreeRenderer {
    fn render(&self, path: &Path) -> io::Result<String>;
}

/// `tree`-style renderer: entries sorted by name, directories suffixed with `/`.
///
/// ```text
/// /opt/pps/templates/php
/// ├── README.md
/// ├── composer.json
/// └── src/
///     └── .gitkeep
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryTree;

impl TreeRenderer for DirectoryTree {
    fn render(&self, path: &Path) -> io::Result<String> {
        let mut out = format!("{}\n", path.display());
        render_children(path, "", &mut out)?;
        Ok(out)
    }
}

fn render_children(dir: &Path, prefix: &str, out: &mut String) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let last_index = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == last_index;
        let connector = if is_last { "└── " } else { "├── " };
        let is_dir = entry.file_type()?.is_dir();
        let name = entry.file_name();

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&name.to_string_lossy());
        if is_dir {
            out.push('/');
        }
        out.push('\n');

        if is_dir {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            render_children(&entry.path(), &child_prefix, out)?;
        }
    }

    Ok(())
}
