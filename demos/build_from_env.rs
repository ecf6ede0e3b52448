use tracing_subscriber::EnvFilter;
use url_string_builder::config::{self, BuilderConfig};

/// Example building a URL from the base URL configured in the environment
///
/// Set `URL_STRING_BUILDER_BASE_URL` (or put it in a `.env` file), then run
/// `cargo run --example build_from_env`.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    dotenv::dotenv().ok();

    println!("Validating required environment variables...");
    if let Err(e) = config::validate_env_vars() {
        eprintln!("✗ Configuration error: {e}");
        std::process::exit(1);
    }

    let builder = match BuilderConfig::from_env() {
        Ok(config) => config.into_builder(),
        Err(e) => {
            eprintln!("✗ Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tags = ["rust", "url builder"];
    let url = builder
        .append("format", "json", false)
        .append_if(tags.len() > 1, "match", "all", false)
        .append_sequence("tag", tags, true)
        .append("limit", 50, false)
        .build();

    println!("{url}");
}
