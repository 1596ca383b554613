use clap::Parser;
use figment::{Figment, providers::Serialized};

/// Find the source of an image with SauceNAO
#[derive(Parser, Debug)]
#[command(name = "rsauce", version)]
pub struct CliArgs {
    /// URL of the image to search for
    pub url: String,

    /// Config file path (default: "config.toml")
    #[arg(short, long, env = "RIS_CONFIG")]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(short, long, env = "RIS_DEBUG")]
    pub debug: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in sec (default: none)
    #[arg(long, env = "RIS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// SauceNAO API token
    #[arg(long, env = "RIS_SAUCENAO_TOKEN")]
    pub saucenao_token: Option<String>,

    /// SauceNAO search endpoint (default: "https://saucenao.com/search.php")
    #[arg(long, env = "RIS_SAUCENAO_URL")]
    pub saucenao_url: Option<String>,

    /// Warn when the minimum similarity is below this level (default: 60)
    #[arg(long, env = "RIS_SAUCENAO_LOW_SIMILARITY_WARNING_LEVEL")]
    pub low_similarity_warning_level: Option<f64>,
}

impl CliArgs {
    /// Layer every value given on the command line or through the environment
    /// over `figment`.
    pub fn merge_into(&self, mut figment: Figment) -> Figment {
        if let Some(timeout) = self.timeout {
            figment = figment.merge(Serialized::default("general.timeout", timeout));
        }
        if let Some(token) = &self.saucenao_token {
            figment = figment.merge(Serialized::default("saucenao.token", token));
        }
        if let Some(url) = &self.saucenao_url {
            figment = figment.merge(Serialized::default("saucenao.url", url));
        }
        if let Some(level) = self.low_similarity_warning_level {
            figment = figment.merge(Serialized::default(
                "saucenao.low_similarity_warning_level",
                level,
            ));
        }
        figment
    }
}
