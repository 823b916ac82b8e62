//! Preview resolution binary - runs the decision procedure without touching
//! the persisted preference or the page path.
//!
//! Usage:
//!   cargo run --bin preview                      # Resolve from current env
//!   SITE_STORED_LANG=fr cargo run --bin preview  # Pretend a stored value
//!
//! Required environment variables:
//! - SITE_ACTIVE_LANG
//! - SITE_SUPPORTED_LANGS (JSON-encoded array, e.g. ["en","fr"])
//! - SITE_DEFAULT_LANG
//!
//! Optional:
//! - SITE_BROWSER_LANG (overrides the detected system locale)
//! - SITE_STORED_LANG (seeds the simulated stored preference)
//! - SITE_CURRENT_PATH (defaults to /)

use anyhow::Result;
use tracing::info;

use lang_select::config::SiteConfig;
use lang_select::i18n::locale;
use lang_select::navigation::InMemoryNavigator;
use lang_select::resolver;
use lang_select::storage::MemoryStore;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lang_select=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let config = SiteConfig::from_env();
    let browser_language = locale::browser_language();

    // Simulated store: seeded from the environment, never written to disk
    let mut store = match std::env::var("SITE_STORED_LANG") {
        Ok(lang) if !lang.is_empty() => MemoryStore::with_value(lang),
        _ => MemoryStore::empty(),
    };
    let stored_before = store.value().map(str::to_string);

    let mut nav = InMemoryNavigator::at(config.current_path.clone());

    let resolution = resolver::resolve(&config, browser_language.as_deref(), &mut store, &mut nav);

    println!();
    println!("========== RESOLUTION PREVIEW ==========");
    println!("Current path:        {}", config.current_path);
    println!("Active language:     {}", display(&config.active_lang));
    println!("Supported languages: {:?}", config.supported_langs.codes());
    println!("Default language:    {}", display(&config.default_lang));
    println!(
        "Browser language:    {}",
        display(browser_language.as_deref().unwrap_or(""))
    );
    println!(
        "Stored language:     {} -> {}",
        display(stored_before.as_deref().unwrap_or("")),
        display(store.value().unwrap_or(""))
    );
    println!("----------------------------------------");
    match resolution.navigate_to {
        Some(path) => println!("Outcome: rewrite path to {path}"),
        None => println!("Outcome: no navigation"),
    }
    println!("========================================");
    println!();

    Ok(())
}

fn display(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
