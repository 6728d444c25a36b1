//! `hostgeo shell` - Interactive shell mode.

use anyhow::Result;
use colored::Colorize;
use hostgeo::{LookupEvent, SearchOutcome, SearchSession};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::Context;
use crate::cli::args::ShellArgs;
use crate::output;

const BANNER: &str = r"
 _               _
| |__   ___  ___| |_ __ _  ___  ___
| '_ \ / _ \/ __| __/ _` |/ _ \/ _ \
| | | | (_) \__ \ || (_| |  __/ (_) |
|_| |_|\___/|___/\__\__, |\___|\___/
                    |___/
";

pub async fn execute(ctx: Context, args: ShellArgs) -> Result<()> {
    let mut media = ctx.media && !args.no_media;
    let mut session = SearchSession::new(ctx.pipeline(media)?);
    let mut editor = DefaultEditor::new()?;

    println!("{}", BANNER.cyan());
    println!(
        "Type a URL or hostname to locate it. {} for commands, {} to quit.",
        "help".green(),
        "exit".red()
    );
    println!();

    loop {
        let line = match editor.readline(&format!("{} ", "hostgeo>".cyan().bold())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            "exit" | "quit" | "q" => break,
            "help" | "?" => print_help(media),
            "media on" | "media off" => {
                media = input == "media on";
                session = SearchSession::new(ctx.pipeline(media)?);
                println!("Video server lookup {}.", if media { "enabled" } else { "disabled" });
            }
            target => search(&ctx, &session, target).await,
        }
    }

    println!("{}", "Bye.".dimmed());
    Ok(())
}

async fn search(ctx: &Context, session: &SearchSession, target: &str) {
    let spinner = ctx.spinner(format!("Looking up {target}..."));
    let media = session.pipeline().media_enabled();

    let outcome = session
        .search(target, |event| match event {
            LookupEvent::Primary(report) => {
                spinner.suspend(|| output::print_report("Main Website", &report));
                if media {
                    spinner.set_message("Looking for an embedded video server...");
                }
            }
            LookupEvent::Media(report) => {
                spinner.suspend(|| output::print_report("Video Server", &report));
            }
        })
        .await;

    spinner.finish_and_clear();

    match outcome {
        SearchOutcome::Completed(result) => {
            if media && result.media.is_none() {
                println!("{}", "No embedded video server found.".dimmed());
                println!();
            }
        }
        SearchOutcome::Failed(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            println!();
        }
        SearchOutcome::Superseded => {}
    }
}

fn print_help(media: bool) {
    println!();
    println!("{}", "Commands:".bold());
    println!("  {:14} Locate a site (scheme, path and port are ignored)", "<url>".green());
    println!(
        "  {:14} Toggle video server lookup (currently {})",
        "media on|off".green(),
        if media { "on" } else { "off" }
    );
    println!("  {:14} Show this help", "help".green());
    println!("  {:14} Leave the shell", "exit".green());
    println!();
}
