use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "delivery-watch")]
#[command(about = "Terminal dashboard for monitoring outbound delivery orders")]
pub struct CliConfig {
    /// CSV export URL of the order sheet
    #[arg(long)]
    pub feed_url: String,

    /// Only show orders matching this text (SO number, customer or product)
    #[arg(long)]
    pub filter: Option<String>,

    /// Keep running, re-rendering every minute
    #[arg(long)]
    pub watch: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        if let Some(filter) = &self.filter {
            validate_non_empty_string("filter", filter)?;
        }
        Ok(())
    }
}
