//! DOT format export for Graphviz visualization.

use super::{check_export_size, ExportOptions};
use crate::{DirectedGraphMap, Result};
use std::fmt::Display;
use std::hash::Hash;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph identifier written after `digraph` (quoted and escaped)
    pub graph_name: String,
    /// Graph layout direction: LR, TB, RL, BT (quoted and escaped)
    pub rankdir: String,
    /// Optional edge color (hex color code)
    pub edge_color: Option<String>,
    /// Size limits
    pub limits: ExportOptions,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "digraph_map".to_string(),
            rankdir: "LR".to_string(),
            edge_color: None,
            limits: ExportOptions::default(),
        }
    }
}

/// Export the map to Graphviz DOT format
pub fn export_dot<K>(map: &DirectedGraphMap<K>) -> Result<String>
where
    K: Display + Eq + Hash + Clone,
{
    export_dot_styled(map, DotOptions::default())
}

/// Export the map to Graphviz DOT format with custom styling
pub fn export_dot_styled<K>(map: &DirectedGraphMap<K>, options: DotOptions) -> Result<String>
where
    K: Display + Eq + Hash + Clone,
{
    check_export_size(map.len(), &options.limits)?;

    let mut output = String::new();
    let color = options
        .edge_color
        .as_deref()
        .map(|c| format!(" [color=\"{}\"]", escape_dot_label(c)))
        .unwrap_or_default();

    output.push_str(&format!(
        "digraph \"{}\" {{\n",
        escape_dot_label(&options.graph_name)
    ));
    output.push_str(&format!(
        "    rankdir=\"{}\";\n\n",
        escape_dot_label(&options.rankdir)
    ));

    for (source, target) in map.iter() {
        output.push_str(&format!(
            "    \"{}\" -> \"{}\"{color};\n",
            escape_dot_label(&source.to_string()),
            escape_dot_label(&target.to_string()),
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
