//! `hostgeo media` - Locate the server hosting video embedded in a page.

use anyhow::Result;
use hostgeo::fetchable_url;

use super::Context;
use crate::cli::args::MediaArgs;
use crate::education::Explain;
use crate::output;

pub async fn execute(ctx: Context, args: MediaArgs) -> Result<()> {
    if args.url.trim().is_empty() {
        anyhow::bail!("Please enter a URL.");
    }

    let page_url = fetchable_url(args.url.trim());
    ctx.explain(|| Explain::media(&page_url, &ctx.endpoints));

    let pipeline = ctx.pipeline(true)?;
    let spinner = ctx.spinner(format!("Scanning {page_url} for embedded video..."));
    let report = pipeline.lookup_media(&page_url).await;
    spinner.finish_and_clear();

    let Some(report) = report else {
        anyhow::bail!("No embedded video server found.");
    };

    if let Some(text) = ctx.output_format.serialize(&report)? {
        println!("{text}");
    } else {
        output::print_report("Video Server", &report);
    }

    Ok(())
}
