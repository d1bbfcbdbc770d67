use std::path::Path;

use anyhow::Context;
use luis_config::LuisConfig;

use crate::cli::Cli;

/// Load `.env`, build the layered config, then apply CLI overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<LuisConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    let mut config = LuisConfig::load().context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
