use anyhow::Result;
use tracing::info;

use lang_select::config::SiteConfig;
use lang_select::i18n::locale;
use lang_select::navigation::InMemoryNavigator;
use lang_select::resolver;
use lang_select::storage::FileStore;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lang_select=info".parse()?),
        )
        .init();

    info!("Starting language resolution pass");

    let config = SiteConfig::from_env();
    let browser_language = locale::browser_language();

    let mut store = FileStore::new(&config.store_file);
    let mut nav = InMemoryNavigator::at(config.current_path.clone());

    let resolution = resolver::resolve(&config, browser_language.as_deref(), &mut store, &mut nav);

    // The embedding host reads the rewritten path from stdout; no output
    // means the current page is already the right one.
    match resolution.navigate_to {
        Some(path) => {
            info!("Path rewrite required: {}", path);
            println!("{path}");
        }
        None => info!("No navigation required"),
    }

    Ok(())
}
