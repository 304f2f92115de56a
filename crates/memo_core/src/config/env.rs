use super::GameConfig;
use crate::error::Result;
use std::env;

pub const CONFIG_PATH_ENV: &str = "MEMO_CONFIG_PATH";

/// Load the config named by `MEMO_CONFIG_PATH`, or the default when it is unset or blank.
pub fn load_from_env() -> Result<GameConfig> {
    let Ok(path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(GameConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(GameConfig::default());
    }

    log::info!("Loading game config from {CONFIG_PATH_ENV}='{path}'");
    GameConfig::load_from_path(path)
}
