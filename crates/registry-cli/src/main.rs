//! Company registry lookup
//!
//! Fetches (or reads a saved copy of) a company's registry page, extracts
//! the company record and prints it.

mod fetcher;
mod report;

use clap::{Arg, Command};
use fetcher::RegistryFetcher;
use registry_core::{locate_report_table, require_orgnr, CompanyExtractor, RawRecord, RegistryConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = Command::new("registry-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Swedish company registry lookup")
        .arg(
            Arg::new("orgnr")
                .value_name("ORGNR")
                .help("Organization number, e.g. 556608-0155")
                .required(true)
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("html")
                .long("html")
                .value_name("FILE")
                .help("Read a saved registry page instead of fetching it")
                .conflicts_with("record")
        )
        .arg(
            Arg::new("record")
                .long("record")
                .value_name("FILE")
                .help("Read a raw record (JSON object of text blobs) instead of fetching")
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the company record as JSON")
                .action(clap::ArgAction::SetTrue)
        )
        .get_matches();

    let orgnr = matches.get_one::<String>("orgnr").map(String::as_str).unwrap_or_default();
    require_orgnr(orgnr)?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = RegistryConfig::from_file(path)?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => RegistryConfig::default(),
    };

    let raw = if let Some(path) = matches.get_one::<String>("record") {
        log::info!("Reading raw record from {}", path);
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str::<RawRecord>(&content)?
    } else if let Some(path) = matches.get_one::<String>("html") {
        log::info!("Reading registry page from {}", path);
        locate_report_table(&std::fs::read_to_string(path)?)
    } else {
        let fetcher = RegistryFetcher::new(config.registry.clone())?;
        locate_report_table(&fetcher.fetch_page(orgnr).await?)
    };
    log::info!("Captured {} record regions", raw.len());

    let extractor = CompanyExtractor::new(&config.extraction)?;
    let company = extractor.extract(orgnr, &raw)?;

    if matches.get_flag("json") {
        println!("{}", report::render_json(&company)?);
    } else {
        print!("{}", report::render_text(&company));
    }

    Ok(())
}
