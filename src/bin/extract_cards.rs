//! CLI that reads a listing page's HTML from stdin and prints one JSON line
//! per media card found for the tab's platform.
//!
//! ```text
//! curl -s https://www.netflix.com/browse | extract_cards --url https://www.netflix.com/browse
//! ```

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use stream_cards::{
    dom, scan_document, HostnameMatch, MediaType, Options, PlatformResolver, Registry,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "extract_cards", about = "Extract media card titles from a streaming page")]
struct Args {
    /// Hostname of the page (e.g. www.netflix.com).
    #[arg(long, required_unless_present = "url", conflicts_with = "url")]
    hostname: Option<String>,

    /// Full URL of the page; its hostname is used for platform detection.
    #[arg(long)]
    url: Option<String>,

    /// JSON file with additional or replacement platform profiles.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Require hostnames to end with a registered domain instead of containing it.
    #[arg(long)]
    domain_suffix: bool,

    /// Omit cards without an extractable title.
    #[arg(long)]
    skip_empty: bool,
}

#[derive(Serialize)]
struct CardOutput<'a> {
    index: usize,
    title: Option<&'a str>,
    #[serde(rename = "type")]
    media_type: Option<MediaType>,
    has_image: bool,
}

/// Exit code for a page on an unsupported site.
const UNSUPPORTED: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(&Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "extract_cards failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> stream_cards::Result<ExitCode> {
    let mut registry = Registry::builtin();
    if let Some(path) = &args.registry {
        registry.merge_user(Registry::from_json_file(path)?);
    }

    let options = Options {
        hostname_match: if args.domain_suffix {
            HostnameMatch::DomainSuffix
        } else {
            HostnameMatch::Substring
        },
    };
    let resolver = PlatformResolver::with_options(&registry, options);

    let resolved = match (&args.hostname, &args.url) {
        (Some(hostname), _) => resolver.resolve(hostname),
        (None, Some(url)) => resolver.resolve_url(url),
        (None, None) => None,
    };
    let Some(resolved) = resolved else {
        tracing::warn!("No supported platform detected");
        return Ok(ExitCode::from(UNSUPPORTED));
    };
    tracing::info!(platform = %resolved.profile.name, "Active platform");

    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;
    let doc = dom::parse(&html);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, card) in scan_document(&doc, resolved.profile).iter().enumerate() {
        if args.skip_empty && card.title.is_none() {
            continue;
        }
        let line = CardOutput {
            index,
            title: card.title.as_ref().map(|t| t.title.as_str()),
            media_type: card.title.as_ref().and_then(|t| t.media_type),
            has_image: card.image_container.is_some(),
        };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    }

    Ok(ExitCode::SUCCESS)
}
