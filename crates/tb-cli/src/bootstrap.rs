use anyhow::Context;
use tb_config::BoardConfig;

/// Load `.env`, then the layered configuration, and reject invalid values.
pub fn load_config() -> anyhow::Result<BoardConfig> {
    let config = BoardConfig::load_with_dotenv().context("failed to load taskboard config")?;
    config.validate()?;
    Ok(config)
}
