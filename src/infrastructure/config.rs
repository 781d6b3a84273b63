use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct SdkConfig {
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load `config/xee.{toml,yaml,json}`, overridden by `XEE__API__*` environment variables
pub fn load_sdk_config() -> anyhow::Result<SdkConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/xee").required(false))
        .add_source(config::Environment::with_prefix("XEE").separator("__"))
        .build()?;

    validate(settings.try_deserialize()?)
}

fn validate(config: SdkConfig) -> anyhow::Result<SdkConfig> {
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    if config.api.timeout_secs == 0 {
        anyhow::bail!("api.timeout_secs must be greater than zero");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> anyhow::Result<SdkConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        validate(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults() {
        let config = parse(
            r#"
            [api]
            base_url = "https://cloud.xee.com/v4/"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://cloud.xee.com/v4/");
        assert!(config.api.access_token.is_none());
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_full_settings() {
        let config = parse(
            r#"
            [api]
            base_url = "https://staging.xee.com/v4"
            access_token = "abc"
            timeout_secs = 5
            user_agent = "fleet-sync/1.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.access_token.as_deref(), Some("abc"));
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent.as_deref(), Some("fleet-sync/1.0"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = parse(
            r#"
            [api]
            base_url = "  "
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_base_url_rejected() {
        assert!(parse("[api]\naccess_token = \"abc\"").is_err());
    }
}
