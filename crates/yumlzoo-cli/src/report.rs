//! Human-readable reports for the terminal
//!
//! Every report is built as a `String` so commands can print it in one go
//! and tests can inspect it. Labels are padded by display width, so model
//! names with wide characters keep the value column aligned.

use std::fmt::Display;
use unicode_width::UnicodeWidthStr;
use yumlzoo::corpus::ZooIndex;
use yumlzoo::stats::{DatasetSummary, DiagramStats, Hierarchy, Spread, TreeDepth};
use yumlzoo::DiagramGraph;

const RULE_WIDTH: usize = 40;

fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.width());
    format!("{}{}", label, " ".repeat(fill))
}

fn widest<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels.into_iter().map(|label| label.width()).max().unwrap_or(0)
}

/// Collects `label: value` rows and aligns the value column
#[derive(Default)]
struct Rows {
    rows: Vec<(String, String)>,
}

impl Rows {
    fn push(&mut self, label: impl Into<String>, value: impl Display) {
        self.rows.push((label.into(), value.to_string()));
    }

    fn render(self, lines: &mut Vec<String>) {
        let width = widest(self.rows.iter().map(|(label, _)| label.as_str())) + 1;
        for (label, value) in self.rows {
            lines.push(format!("{} {}", pad(&format!("{}:", label), width), value));
        }
    }
}

fn heading(lines: &mut Vec<String>, title: &str, underline: char) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
    lines.push(underline.to_string().repeat(RULE_WIDTH));
}

fn finish(lines: Vec<String>) -> String {
    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn depth_text(depth: TreeDepth) -> String {
    match depth {
        TreeDepth::Depth(levels) => levels.to_string(),
        TreeDepth::Empty => "0 (no inheritance)".to_string(),
        TreeDepth::Cyclic => "0 (cyclic inheritance)".to_string(),
    }
}

fn std_dev_text(spread: &Spread) -> String {
    spread
        .std_dev
        .map(|std_dev| format!("{:.2}", std_dev))
        .unwrap_or_else(|| "n/a".to_string())
}

fn model_list(models: &[String]) -> String {
    if models.is_empty() {
        "-".to_string()
    } else {
        models.join(", ")
    }
}

/// Indented parent-to-child trees, one `↳` line per class
fn hierarchy_lines(lines: &mut Vec<String>, hierarchy: &Hierarchy) {
    if hierarchy.is_empty() {
        lines.push("No inheritance structure found.".to_string());
        return;
    }
    lines.push("Inheritance hierarchy:".to_string());
    for entry in hierarchy.walk() {
        let marker = if entry.cycle { " (cycle)" } else { "" };
        lines.push(format!(
            "{}↳ {}{}",
            "  ".repeat(entry.depth + 1),
            entry.class,
            marker
        ));
    }
    let unrooted = hierarchy.unrooted();
    if !unrooted.is_empty() {
        lines.push(format!("  Cyclic, without a root: {}", unrooted.join(", ")));
    }
}

/// Classes, inheritance hierarchy and typed associations of one diagram
pub fn graph_report(name: &str, graph: &DiagramGraph) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, &format!("Diagram {}", name), '=');

    let classes: Vec<&str> = graph.classes().iter().map(String::as_str).collect();
    lines.push(format!("Classes ({}): {}", classes.len(), classes.join(", ")));

    lines.push(format!("Inheritance edges ({}):", graph.inheritance_count()));
    for edge in graph.inheritance() {
        lines.push(format!("  {} -> {}", edge.child, edge.parent));
    }
    hierarchy_lines(&mut lines, &Hierarchy::from_edges(graph.inheritance()));

    lines.push(format!("Associations ({}):", graph.association_count()));
    let sources = widest(graph.associations().map(|edge| edge.source.as_str()));
    for edge in graph.associations() {
        lines.push(format!(
            "  {} -> {} [{}]",
            pad(&edge.source, sources),
            edge.target,
            edge.kind
        ));
    }

    finish(lines)
}

/// Statistics of one diagram
pub fn stats_report(stats: &DiagramStats) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, &format!("Model {}", stats.model), '=');

    let mut rows = Rows::default();
    rows.push("Classes", stats.num_classes);
    rows.push("Inheritance edges", stats.num_inheritance);
    rows.push("Associations", stats.num_associations);
    rows.push("Blocks", stats.num_blocks);
    rows.push("Tree depth", depth_text(stats.tree_depth));
    match stats.block_density() {
        Some(density) => rows.push("Blocks per class", format!("{:.2}", density)),
        None => rows.push("Blocks per class", "n/a"),
    }
    match stats.most_frequent_label {
        Some(label) => rows.push("Most frequent label", label),
        None => rows.push("Most frequent label", "-"),
    }
    rows.render(&mut lines);

    heading(&mut lines, "Relationship labels", '-');
    let mut labels = Rows::default();
    for (label, count) in stats.label_counts.iter() {
        labels.push(label.as_str(), count);
    }
    labels.render(&mut lines);

    finish(lines)
}

/// Dataset summary in the layout of the classic zoo report
pub fn summary_report(summary: &DatasetSummary) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "UML Dataset Summary", '=');

    let mut totals = Rows::default();
    totals.push("Total models", summary.total_models);
    totals.push("Total blocks", summary.total_blocks);
    totals.push("  - Classes", summary.total_classes);
    totals.push("  - Inheritance edges", summary.total_inheritance);
    totals.push("  - Associations", summary.total_associations);
    totals.render(&mut lines);

    heading(&mut lines, "Depth Statistics", '-');
    let mut depth = Rows::default();
    depth.push("Average tree depth", format!("{:.2}", summary.tree_depth.mean));
    depth.push("Standard deviation", std_dev_text(&summary.tree_depth));
    depth.push("Maximum tree depth", summary.max_tree_depth);
    depth.push("  - Models with max depth", model_list(&summary.max_depth_models));
    depth.push("Minimum tree depth", summary.min_tree_depth);
    depth.push("  - Models with min depth", model_list(&summary.min_depth_models));
    depth.push("Cyclic hierarchies", model_list(&summary.cyclic_models));
    depth.render(&mut lines);

    for (title, spread) in [
        ("Blocks per Model", &summary.blocks_per_model),
        ("Classes per Model", &summary.classes_per_model),
    ] {
        heading(&mut lines, title, '-');
        let mut rows = Rows::default();
        rows.push("Average", format!("{:.2}", spread.mean));
        rows.push("Standard deviation", std_dev_text(spread));
        rows.render(&mut lines);
    }

    heading(&mut lines, "Relationship Label Distribution", '-');
    let mut labels = Rows::default();
    for (label, count) in summary.label_frequency.iter() {
        labels.push(label.as_str(), count);
    }
    labels.render(&mut lines);
    lines.push(String::new());
    lines.push(format!(
        "Most frequent relationship label overall: {}",
        summary
            .most_frequent_label_overall
            .map(|label| label.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));

    heading(&mut lines, "Top Structurally Dense Models (blocks per class)", '-');
    let mut dense = Rows::default();
    for entry in &summary.top_dense_models {
        dense.push(entry.model.as_str(), format!("{:.2}", entry.block_density));
    }
    dense.render(&mut lines);

    finish(lines)
}

/// One line per zoo file with its parsed name metadata
pub fn index_report(index: &ZooIndex) -> String {
    let names = widest(index.entries().iter().map(|entry| entry.file_name.as_str()));
    let mut lines: Vec<String> = index
        .entries()
        .iter()
        .map(|entry| match &entry.meta {
            Some(meta) => format!(
                "{}  {}  {}  {}",
                pad(&entry.file_name, names),
                meta.model,
                meta.kind,
                meta.extension
            ),
            None => format!("{}  (unrecognized name)", pad(&entry.file_name, names)),
        })
        .collect();
    lines.push(format!(
        "{} files, {} yUML models",
        index.len(),
        index.yuml_models().count()
    ));
    finish(lines)
}
