//! `hostgeo resolve` - DNS-over-HTTPS A record lookup.

use anyhow::Result;
use colored::Colorize;
use hostgeo::{DnsOutcome, Hostname};
use serde::Serialize;

use super::Context;
use crate::cli::args::ResolveArgs;
use crate::education::Explain;

#[derive(Serialize)]
struct ResolveOutput<'a> {
    hostname: &'a str,
    status: &'static str,
    ip: Option<String>,
    error: Option<&'a str>,
}

pub async fn execute(ctx: Context, args: ResolveArgs) -> Result<()> {
    let hostname = Hostname::parse(&args.host)?;
    ctx.explain(|| Explain::resolve(hostname.as_str(), &ctx.endpoints));

    let client = ctx.client()?;
    let spinner = ctx.spinner(format!("Resolving {hostname}..."));
    let outcome = client.dns().resolve_a(&hostname).await;
    spinner.finish_and_clear();

    let (status, error) = match &outcome {
        DnsOutcome::Resolved(_) => ("resolved", None),
        DnsOutcome::NoRecord => ("no_record", None),
        DnsOutcome::TransportError(e) => ("error", Some(e.as_str())),
    };

    let output = ResolveOutput {
        hostname: hostname.as_str(),
        status,
        ip: outcome.ip().map(|ip| ip.to_string()),
        error,
    };

    if let Some(text) = ctx.output_format.serialize(&output)? {
        println!("{text}");
    } else {
        match &outcome {
            DnsOutcome::Resolved(ip) => {
                println!("{:40} {}", hostname.as_str().cyan(), ip.to_string().green());
            }
            DnsOutcome::NoRecord => {
                println!("{:40} {}", hostname.as_str().cyan(), "(no A record)".dimmed());
            }
            DnsOutcome::TransportError(_) => {}
        }
    }

    match outcome {
        DnsOutcome::Resolved(_) => Ok(()),
        DnsOutcome::NoRecord => anyhow::bail!("No A record found for {hostname}"),
        DnsOutcome::TransportError(e) => anyhow::bail!("DNS resolver unreachable: {e}"),
    }
}
