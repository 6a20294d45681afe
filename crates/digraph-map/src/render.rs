//! Boxed tree rendering for debugging and logs.
//!
//! ```text
//! ╔══════════╗
//! ║ a ┓      ║
//! ║   ┣ b    ║
//! ║   ┗ c    ║
//! ╚══════════╝
//! ```
//!
//! Each source is followed by its targets. Line order follows the map's
//! iteration order and is not part of any contract.

use crate::config::RenderOptions;
use crate::graph::DirectedGraphMap;
use std::fmt;
use std::hash::Hash;

impl<K> DirectedGraphMap<K>
where
    K: fmt::Display + Eq + Hash + Clone,
{
    /// Render the map as a boxed tree using custom layout options.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        render(self, options)
    }
}

impl<K> fmt::Display for DirectedGraphMap<K>
where
    K: fmt::Display + Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderOptions::default()))
    }
}

fn render<K>(map: &DirectedGraphMap<K>, options: &RenderOptions) -> String
where
    K: fmt::Display + Eq + Hash + Clone,
{
    let mut lines = Vec::new();
    // widest line content, glyphs included
    let mut width = options.min_width;

    for (source, targets) in map.forward_groups() {
        let source = source.to_string();
        let source_len = source.chars().count();
        let indent = " ".repeat(source_len);
        width = width.max(source_len + 2);
        lines.push(format!("{source} ┓"));

        let last = targets.len().saturating_sub(1);
        for (i, target) in targets.iter().enumerate() {
            let target = target.to_string();
            width = width.max(source_len + 3 + target.chars().count());
            let branch = if i == last { '┗' } else { '┣' };
            lines.push(format!("{indent} {branch} {target}"));
        }
    }

    let inner = width + options.padding;
    let bar = "═".repeat(inner + 1);

    let mut out = String::new();
    out.push('╔');
    out.push_str(&bar);
    out.push_str("╗\n");
    for line in &lines {
        out.push_str(&format!("║ {line:<inner$}║\n"));
    }
    out.push('╚');
    out.push_str(&bar);
    out.push('╝');
    out
}
