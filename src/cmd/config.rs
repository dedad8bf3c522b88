//! Config command: show the effective configuration or write a starter file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tally::config::Config;
use tally::paths::{CONFIG_FILE, TALLY_DIR};
use tally::ui::{Output, OutputMode};

/// Print the merged configuration: one JSON object in JSON mode, YAML on
/// stdout otherwise (including quiet mode, since it is the requested output).
pub fn cmd_config_show(output: &Output, config: &Config) -> Result<()> {
    if output.mode() == OutputMode::Json {
        let value = serde_json::to_value(config).context("Failed to serialize config")?;
        output.json(&value);
    } else {
        println!("{}", config_yaml(config)?.trim_end());
    }
    Ok(())
}

/// Write `.tally/config.md` populated with every default.
/// Never reads the existing file, so `--force` can replace a broken one.
pub fn cmd_config_init(output: &Output, force: bool) -> Result<()> {
    write_starter_config(Path::new("."), force)?;
    output.success(&format!("Wrote {}", CONFIG_FILE));
    Ok(())
}

fn write_starter_config(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", CONFIG_FILE);
    }

    let dir = root.join(TALLY_DIR);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, starter_config()?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn config_yaml(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize config")
}

fn starter_config() -> Result<String> {
    Ok(format!(
        "---\n{}---\n\n# Tally Configuration\n\nEdit the frontmatter above; missing keys use their defaults.\n",
        config_yaml(&Config::default())?
    ))
}
