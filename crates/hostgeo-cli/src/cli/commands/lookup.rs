//! `hostgeo lookup` - Locate sites and their video servers.

use anyhow::Result;
use colored::Colorize;
use hostgeo::{Hostname, LocationLookupPipeline, LookupEvent, LookupResult};

use super::Context;
use crate::cli::args::LookupArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    let media = ctx.media && !args.no_media;
    let pipeline = ctx.pipeline(media)?;

    let mut results = Vec::new();
    let mut failures = 0;

    for target in &args.targets {
        ctx.explain(|| Explain::lookup(target, &ctx.endpoints, media));

        match lookup_one(&ctx, &pipeline, target).await {
            Ok(result) => results.push(result),
            Err(e) if args.targets.len() == 1 => return Err(e.into()),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "Error:".red().bold(), target, e);
            }
        }
    }

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let rendered = if let [single] = results.as_slice() {
                ctx.output_format.serialize(single)?
            } else {
                ctx.output_format.serialize(&results)?
            };
            if let Some(text) = rendered {
                println!("{text}");
            }
        }
        OutputFormat::Csv => {
            let rows: Vec<(&str, &hostgeo::HostReport)> = results
                .iter()
                .flat_map(|r| {
                    std::iter::once(("site", &r.primary))
                        .chain(r.media.as_ref().map(|m| ("video", m)))
                })
                .collect();
            output::write_csv(std::io::stdout().lock(), &rows)?;
        }
        OutputFormat::Pretty => {}
    }

    if failures > 0 {
        anyhow::bail!("{} of {} lookups failed", failures, args.targets.len());
    }

    Ok(())
}

async fn lookup_one(
    ctx: &Context,
    pipeline: &LocationLookupPipeline,
    target: &str,
) -> hostgeo::Result<LookupResult> {
    // Bad input is reported before anything is shown as loading
    let hostname = Hostname::parse(target)?;

    let pretty = ctx.output_format == OutputFormat::Pretty;
    let spinner = ctx.spinner(format!("Looking up {hostname}..."));

    let result = pipeline
        .lookup_with(target, |event| match event {
            LookupEvent::Primary(report) => {
                if pretty {
                    spinner.suspend(|| output::print_report("Main Website", &report));
                }
                if pipeline.media_enabled() {
                    spinner.set_message("Looking for an embedded video server...");
                }
            }
            LookupEvent::Media(report) => {
                if pretty {
                    spinner.suspend(|| output::print_report("Video Server", &report));
                }
            }
        })
        .await;

    spinner.finish_and_clear();

    if let Ok(result) = &result {
        if pretty && pipeline.media_enabled() && result.media.is_none() {
            println!("{}", "No embedded video server found.".dimmed());
            println!();
        }
    }

    result
}
