use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;

use rsauce::{Config, Sauce, cli::CliArgs, display, http};

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = Config::load(&args)?;
    let fetcher = Arc::new(http::client(&config.general)?);
    let sauce = Sauce::new(fetcher, &config);

    let result = match sauce.reverse_search(&args.url).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Search failed: {}", e);
            anyhow::bail!("Search failed, please try again later");
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!(
            "{}",
            display::format(&result, config.saucenao.low_similarity_warning_level)
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging(args.debug);
    log::info!("Starting rsauce...");

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
