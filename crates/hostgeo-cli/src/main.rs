//! hostgeo - where is this site hosted, and who are its neighbors?

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    hostgeo_cli::run().await
}
