//! Engine listing command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager};
use crate::translation::Engine;
use crate::ui::Style;

/// Prints the translation engines, marking the configured default and credential status.
pub fn print_engines() -> Result<()> {
    let config = ConfigManager::new()?.load_or_default()?;

    println!("{}\n", Style::header("Translation engines"));
    for line in engine_lines(&config) {
        println!("{line}");
    }

    Ok(())
}

fn engine_lines(config: &ConfigFile) -> Vec<String> {
    let default_engine = config
        .translator
        .engine
        .as_deref()
        .and_then(|name| name.parse::<Engine>().ok())
        .unwrap_or_default();

    Engine::ALL
        .into_iter()
        .map(|engine| {
            let marker = if engine == default_engine {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            };
            format!(
                "  {} {}{}  {}",
                Style::code(format!("{:<8}", engine.id())),
                Style::value(engine.display_name()),
                marker,
                credential_status(config, engine)
            )
        })
        .collect()
}

fn credential_status(config: &ConfigFile, engine: Engine) -> String {
    if !engine.requires_credential() {
        Style::secondary("no API key needed")
    } else if config.credential(engine).is_some() {
        Style::success("API key set")
    } else {
        Style::warning("API key not set")
    }
}
