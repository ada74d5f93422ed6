//! `glyphid show` command.

use anyhow::Result;

use glyphid_types::grid::GridSize;

use crate::cli::render::{IdenticonView, print_identicon};
use crate::state::AppState;

/// Render the identicon of every name.
pub fn show(state: &AppState, names: &[String], size: GridSize, json: bool) -> Result<()> {
    let identicons = state.identicon_service.derive_many(names, size.get())?;

    if json {
        let views: Vec<IdenticonView<'_>> = identicons.iter().map(IdenticonView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!();
    for identicon in &identicons {
        print_identicon(identicon);
    }
    Ok(())
}
