use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 配置了就顺带输出 talker 要拼的 query
    pub access_token: Option<String>,
    /// 输出缩进的 JSON
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: None,
            pretty: true,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// 文件不存在时用默认配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path).with_context(|| format!("载入配置文件 {} 失败", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c, Config::default());
        assert!(c.pretty);
    }

    #[test]
    fn parse_token() {
        let c: Config = toml::from_str(
            r#"
            access_token = "ACCESS_TOKEN"
            pretty = false
        "#,
        )
        .unwrap();
        assert_eq!(c.access_token.as_deref(), Some("ACCESS_TOKEN"));
        assert!(!c.pretty);
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join("dump-request-config-test.toml");
        std::fs::write(&path, "pretty = false\n").unwrap();
        let c = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(c.access_token, None);
        assert!(!c.pretty);
    }

    #[test]
    fn missing_file_falls_back() {
        let c = Config::load("./definitely-not-here/weixin.toml").unwrap();
        assert_eq!(c, Config::default());
    }
}
