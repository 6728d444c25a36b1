//! `hostgeo borders` - List the land neighbors of a country.

use anyhow::Result;

use super::Context;
use crate::cli::args::BordersArgs;
use crate::education::Explain;
use crate::output;

pub async fn execute(ctx: Context, args: BordersArgs) -> Result<()> {
    let code = args.code.trim().to_uppercase();
    if code.is_empty() {
        anyhow::bail!("Please enter a country code.");
    }

    ctx.explain(|| Explain::borders(&code, &ctx.endpoints));

    let client = ctx.client()?;
    let spinner = ctx.spinner(format!("Fetching neighbors of {code}..."));
    let borders = client.countries().borders(&code).await;
    spinner.finish_and_clear();

    let Some(borders) = borders else {
        anyhow::bail!("Could not fetch country data for {code}");
    };

    if let Some(text) = ctx.output_format.serialize(&borders)? {
        println!("{text}");
    } else {
        output::print_borders(&borders);
    }

    Ok(())
}
