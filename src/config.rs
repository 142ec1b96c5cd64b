use anyhow::Context;
use serde::Deserialize;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5174,http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Fixed seed for the canned tutor; `None` draws from OS entropy.
    pub tutor_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().with_context(|| format!("APP_PORT={v}"))?,
            Err(_) => 8000,
        };
        let cors_origins = parse_origins(
            &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );
        let tutor_seed = std::env::var("TUTOR_RNG_SEED")
            .ok()
            .map(|v| v.parse::<u64>().with_context(|| format!("TUTOR_RNG_SEED={v}")))
            .transpose()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            tutor_seed,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            tutor_seed: None,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn default_config_allows_dev_frontends() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port, 8000);
        assert!(cfg.cors_origins.contains(&"http://localhost:5174".to_string()));
        assert!(cfg.cors_origins.contains(&"http://localhost:3000".to_string()));
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8000");
    }
}
