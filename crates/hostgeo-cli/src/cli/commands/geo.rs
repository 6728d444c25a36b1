//! `hostgeo geo` - Geolocate an IPv4 address.

use anyhow::Result;

use super::Context;
use crate::cli::args::GeoArgs;
use crate::education::Explain;
use crate::output;

pub async fn execute(ctx: Context, args: GeoArgs) -> Result<()> {
    let ip = args.ip;
    ctx.explain(|| Explain::geo(&ip.to_string(), &ctx.endpoints));

    let client = ctx.client()?;
    let spinner = ctx.spinner(format!("Locating {ip}..."));
    let location = client.geo().locate(ip).await;
    spinner.finish_and_clear();
    let location = location?;

    if let Some(text) = ctx.output_format.serialize(&location)? {
        println!("{text}");
    } else {
        output::print_location(&location);
    }

    Ok(())
}
