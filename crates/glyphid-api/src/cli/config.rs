//! `glyphid config` command.

use anyhow::Result;
use console::style;

use glyphid_infra::config::config_path;

use crate::state::AppState;

/// Display the data directory and effective configuration.
pub async fn show_config(state: &AppState, json: bool) -> Result<()> {
    let path = config_path(&state.data_dir);
    let exists = tokio::fs::try_exists(&path).await.unwrap_or(false);

    if json {
        let out = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_path": path.display().to_string(),
            "config_exists": exists,
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Paths ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!(
        "  Config:   {} {}",
        style(path.display()).dim(),
        if exists {
            style("(loaded)").green()
        } else {
            style("(not found, using defaults)").yellow()
        }
    );
    println!();
    println!("  {}", style("── Settings ──").dim());
    println!(
        "  Default grid: {}",
        style(state.config.default_grid_size).bold()
    );
    println!("  Sample names: {}", state.config.sample_names.len());
    for name in &state.config.sample_names {
        println!("    {}", style(name).cyan());
    }
    println!();
    Ok(())
}
