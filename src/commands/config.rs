use crate::core::{config::DecoratorConfig, error::Result, print_info};
use std::path::{Path, PathBuf};

/// Print the effective configuration as JSON
pub fn execute_config_show(config: &DecoratorConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Write the default configuration unless a file already exists
pub fn execute_config_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => DecoratorConfig::default_path()?,
    };

    if path.exists() && !force {
        print_info(&format!(
            "Config already exists at {}. Use --force to overwrite it.",
            path.display()
        ));
        return Ok(());
    }

    DecoratorConfig::default().save_to(&path)?;
    print_info(&format!("Wrote default config to {}", path.display()));
    Ok(())
}
