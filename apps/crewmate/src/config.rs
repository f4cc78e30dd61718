use anyhow::{anyhow, Context, Result};

use crate::catalog::PromptVariant;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; defaults select the main prompt.
#[derive(Debug, Clone)]
pub struct Config {
    pub variant: PromptVariant,
    pub pretty: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            variant: parse_variant(optional_env("PROMPT_VARIANT").as_deref())
                .context("PROMPT_VARIANT must name a prompt variant")?,
            pretty: parse_flag(optional_env("PROMPT_PRETTY").as_deref())
                .context("PROMPT_PRETTY must be a boolean")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_variant(value: Option<&str>) -> Result<PromptVariant> {
    match value {
        Some(v) => Ok(v.parse::<PromptVariant>()?),
        None => Ok(PromptVariant::default()),
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(anyhow!("expected true/false, got '{v}'")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variant_defaults_to_main() {
        assert_eq!(parse_variant(None).unwrap(), PromptVariant::Main);
    }

    #[test]
    fn test_variant_is_parsed_from_value() {
        assert_eq!(
            parse_variant(Some("policy_expert")).unwrap(),
            PromptVariant::PolicyExpert
        );
        assert_eq!(parse_variant(Some("dev")).unwrap(), PromptVariant::Developer);
    }

    #[test]
    fn test_invalid_variant_carries_catalog_error() {
        let err = parse_variant(Some("sales")).unwrap_err();
        assert!(err.to_string().contains("Unknown prompt variant: 'sales'"));
    }

    #[test]
    fn test_flag_parsing() {
        assert!(!parse_flag(None).unwrap());
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some("1")).unwrap());
        assert!(!parse_flag(Some("false")).unwrap());
        assert!(!parse_flag(Some(" 0 ")).unwrap());
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
