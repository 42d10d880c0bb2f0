//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::coredo_dir;
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 远程记录存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// 集合端点覆盖（默认使用内置端点）
    #[serde(default)]
    pub url: Option<String>,
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    coredo_dir().join("config.toml")
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Config {
    try_load(path).unwrap_or_default()
}

/// 严格加载：I/O 与 TOML 解析错误显式向上传播
fn try_load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    // 确保 ~/.coredo 目录存在
    let dir = coredo_dir();
    fs::create_dir_all(&dir)?;
    save_config_to(&config_path(), config)
}

fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.name, "Auto");
        assert!(config.api.url.is_none());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        config.api.url = Some("https://example.test/api/v1/Todo".to_string());
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.theme.name, "Dark");
        assert_eq!(
            loaded.api.url.as_deref(),
            Some("https://example.test/api/v1/Todo")
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(try_load(&path), Err(CoreError::Io(_))));
        assert_eq!(load_config_from(&path).theme.name, "Auto");
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not { valid toml").unwrap();

        // 严格路径报解析错误，宽松路径回落默认值
        assert!(matches!(try_load(&path), Err(CoreError::TomlParse(_))));
        assert_eq!(load_config_from(&path).theme.name, "Auto");
    }
}
