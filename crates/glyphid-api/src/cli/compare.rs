//! `glyphid compare` command.
//!
//! Checks that similar names end up with visually distinct identicons.

use std::collections::HashSet;

use anyhow::Result;
use console::style;
use serde::Serialize;

use glyphid_types::grid::GridSize;
use glyphid_types::identicon::Identicon;

use crate::cli::render::{IdenticonView, display_name, print_identicon};
use crate::state::AppState;

/// Which part of two identicons matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionKind {
    Color,
    Pattern,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub first: String,
    pub second: String,
    pub kind: CollisionKind,
}

/// Distinctness summary for a set of identicons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub total: usize,
    pub distinct_colors: usize,
    pub distinct_patterns: usize,
    pub collisions: Vec<Collision>,
}

impl ComparisonReport {
    pub fn from_identicons(identicons: &[Identicon]) -> Self {
        let distinct_colors = identicons
            .iter()
            .map(|i| i.color)
            .collect::<HashSet<_>>()
            .len();
        let distinct_patterns = identicons
            .iter()
            .map(|i| &i.grid)
            .collect::<HashSet<_>>()
            .len();

        let mut collisions = Vec::new();
        for (idx, first) in identicons.iter().enumerate() {
            for second in &identicons[idx + 1..] {
                let kind = if first.looks_like(second) {
                    CollisionKind::Both
                } else if first.color == second.color {
                    CollisionKind::Color
                } else if first.grid == second.grid {
                    CollisionKind::Pattern
                } else {
                    continue;
                };
                collisions.push(Collision {
                    first: first.name.clone(),
                    second: second.name.clone(),
                    kind,
                });
            }
        }

        Self {
            total: identicons.len(),
            distinct_colors,
            distinct_patterns,
            collisions,
        }
    }
}

/// Derive every name and report color and pattern collisions.
///
/// Uses the configured sample names when `names` is empty.
pub fn compare(state: &AppState, names: &[String], size: GridSize, json: bool) -> Result<()> {
    let names = if names.is_empty() {
        state.config.sample_names.as_slice()
    } else {
        names
    };
    let identicons = state.identicon_service.derive_many(names, size.get())?;
    let report = ComparisonReport::from_identicons(&identicons);

    tracing::info!(
        total = report.total,
        distinct_colors = report.distinct_colors,
        distinct_patterns = report.distinct_patterns,
        collisions = report.collisions.len(),
        "compared identicons"
    );

    if json {
        let views: Vec<IdenticonView<'_>> = identicons.iter().map(IdenticonView::from).collect();
        let out = serde_json::json!({
            "grid_size": size,
            "identicons": views,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    for identicon in &identicons {
        print_identicon(identicon);
    }

    println!("  {}", style(format!("── {size} comparison ──")).dim());
    println!("  Names:    {}", style(report.total).bold());
    println!(
        "  Colors:   {} distinct",
        count_style(report.distinct_colors, report.total)
    );
    println!(
        "  Patterns: {} distinct",
        count_style(report.distinct_patterns, report.total)
    );
    if report.collisions.is_empty() {
        println!("  {} No collisions", style("✓").green());
    } else {
        for collision in &report.collisions {
            println!(
                "  {} {} and {} share a {}",
                style("✗").red(),
                style(display_name(&collision.first)).cyan(),
                style(display_name(&collision.second)).cyan(),
                match collision.kind {
                    CollisionKind::Color => "color",
                    CollisionKind::Pattern => "pattern",
                    CollisionKind::Both => "color and pattern",
                }
            );
        }
    }
    println!();
    Ok(())
}

fn count_style(distinct: usize, total: usize) -> console::StyledObject<usize> {
    if distinct == total {
        style(distinct).green()
    } else {
        style(distinct).yellow()
    }
}
