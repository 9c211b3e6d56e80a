use clap::Parser;
use delivery_watch::core::windows;
use delivery_watch::domain::model::ResolvedOrder;
use delivery_watch::domain::ports::ConfigProvider;
use delivery_watch::render;
use delivery_watch::utils::{logger, validation::Validate};
use delivery_watch::{CliConfig, CsvFeed, RefreshManager};

const RENDER_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting delivery-watch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let feed = CsvFeed::new(config.feed_url.clone());
    let mut manager = RefreshManager::new(feed);

    loop {
        if let Err(e) = render_snapshot(&mut manager, &config).await {
            tracing::error!("❌ Refresh failed: {}", e);
            eprintln!("❌ {}", e);
            if !config.watch {
                std::process::exit(1);
            }
        }

        if !config.watch {
            break;
        }
        // Re-render each minute so relative urgency stays fresh; fetches are
        // still gated by the refresh manager's cache.
        tokio::time::sleep(std::time::Duration::from_secs(RENDER_INTERVAL_SECS)).await;
    }

    Ok(())
}

async fn render_snapshot(
    manager: &mut RefreshManager<CsvFeed>,
    config: &CliConfig,
) -> delivery_watch::Result<()> {
    let now = chrono::Local::now().naive_local();
    let orders = manager.orders().await?;
    let windows = windows::split(orders, now);

    println!("📦 Delivery Dashboard — {}", now.format("%d/%m/%Y %H:%M"));
    println!("{}", render::summary(&windows));
    println!("{}", render::sentinel_note());

    let mut visible: Vec<&ResolvedOrder> = windows.pending.clone();
    if let Some(query) = config.filter() {
        visible.retain(|o| o.matches_query(query));
        tracing::debug!("Filter '{}' matched {} orders", query, visible.len());
    }

    println!("\n🧩 Cards");
    print!("{}", render::render_cards(&visible, now));
    println!("📊 Table");
    print!("{}", render::render_table(&visible));

    // Alert is computed over the full near set, not the filtered view.
    if let Some(banner) = render::alert_banner(windows.near.len()) {
        tracing::warn!("{}", banner);
        println!("\n{}", banner);
    }

    Ok(())
}
