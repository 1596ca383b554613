use std::path::PathBuf;

use anyhow::{Result, bail};
use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use normalize_path::NormalizePath;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct General {
    /// Per request timeout in seconds, no timeout when unset
    pub timeout: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SauceNao {
    /// API key
    pub token: String,
    /// Search endpoint
    pub url: String,
    /// Minimum similarity floor below which replies carry a warning
    pub low_similarity_warning_level: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EHentai {
    /// Gallery search URL, `{query}` is replaced by the encoded title
    pub search_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NHentai {
    /// Base URL gallery links are relative to
    pub url: String,
    /// Gallery search URL, `{query}` is replaced by the encoded title
    pub search_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub general: General,
    pub saucenao: SauceNao,
    pub ehentai: EHentai,
    pub nhentai: NHentai,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: General { timeout: None },
            saucenao: SauceNao {
                token: String::new(),
                url: "https://saucenao.com/search.php".to_string(),
                low_similarity_warning_level: 60.0,
            },
            ehentai: EHentai {
                search_url: "https://e-hentai.org/?f_search={query}&advsearch=1&f_sname=on"
                    .to_string(),
            },
            nhentai: NHentai {
                url: "https://nhentai.net".to_string(),
                search_url: "https://nhentai.net/search/?q={query}".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(args: &CliArgs) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let config_path = PathBuf::from(
            args.config
                .clone()
                .unwrap_or(DEFAULT_CONFIG_PATH.to_string()),
        );

        if config_path.exists() {
            log::info!(
                "Config file found: {}",
                config_path.resolve().normalize().display()
            );
            figment = match config_path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(&config_path)),
                Some("json") => figment.merge(Json::file(&config_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(&config_path)),
                _ => bail!("Cannot identify config file type. Must be .toml, .json or .yaml"),
            };
        } else if args.config.is_some() {
            bail!("Config file not found: {}", config_path.display());
        }

        let config: Config = args.merge_into(figment).extract()?;

        log::debug!("Loaded config: {:#?}", config.redacted());

        Ok(config)
    }

    fn redacted(&self) -> Config {
        let mut config = self.clone();
        if !config.saucenao.token.is_empty() {
            config.saucenao.token = "***".to_string();
        }
        config
    }
}
