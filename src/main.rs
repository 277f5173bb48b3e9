//! go2web main entry point
//!
//! Command-line front end for the fetch pipeline: `-u` fetches and renders a
//! single URL, `-s` runs a provider search and lets the user pick a result
//! interactively.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use go2web::html::{LynxRenderer, TextRenderer};
use go2web::http::HttpClient;
use go2web::search::{search, DEFAULT_SEARCH_HOST};
use go2web::TcpTransport;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

/// go2web: fetch pages over raw HTTP/1.1 and read them in the terminal
#[derive(Parser, Debug)]
#[command(name = "go2web")]
#[command(version = "1.0.0")]
#[command(about = "A minimal socket-level web fetcher", long_about = None)]
struct Cli {
    /// Make an HTTP request to URL and print the rendered response
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: Option<String>,

    /// Make a search request and print the top results
    #[arg(
        short = 's',
        long = "search",
        value_name = "TERM",
        num_args = 1..,
        conflicts_with = "url"
    )]
    search: Option<Vec<String>>,

    /// Search provider host
    #[arg(long, default_value = DEFAULT_SEARCH_HOST)]
    search_host: String,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = 10)]
    connect_timeout: u64,

    /// Read/write deadline in seconds (0 disables the deadline)
    #[arg(long, default_value_t = 30)]
    read_timeout: u64,

    /// Maximum number of redirect hops to follow
    #[arg(long, default_value_t = go2web::http::DEFAULT_MAX_REDIRECTS)]
    max_redirects: usize,

    /// Directory for per-run log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    go2web::logging::init(&cli.log_dir, cli.verbose, cli.quiet)
        .with_context(|| format!("failed to set up logging under {}", cli.log_dir.display()))?;

    let io_timeout = match cli.read_timeout {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let transport = TcpTransport::new(Duration::from_secs(cli.connect_timeout), io_timeout);
    let client = HttpClient::new(transport).max_redirects(cli.max_redirects);

    if let Some(url) = &cli.url {
        handle_url(&client, url)
    } else if let Some(terms) = &cli.search {
        handle_search(&client, &cli.search_host, terms)
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

/// Handles `-u`: fetch the URL and print its rendered text.
fn handle_url(client: &HttpClient, url: &str) -> anyhow::Result<()> {
    let response = client.fetch(url)?;
    let text = LynxRenderer::default().render(&response.body)?;
    println!("{}", text);
    Ok(())
}

/// Handles `-s`: list search results, then let the user open one.
fn handle_search(client: &HttpClient, host: &str, terms: &[String]) -> anyhow::Result<()> {
    let links = search(client, host, terms)?;

    if links.is_empty() {
        tracing::warn!("no results extracted from the provider response");
        return Ok(());
    }

    for (idx, link) in links.iter().enumerate() {
        println!("{}. {}", idx + 1, link);
    }

    print!("Select the number of the link you want to access or enter `q` to quit\nOption := ");
    std::io::stdout().flush()?;

    let mut option = String::new();
    std::io::stdin().read_line(&mut option)?;
    let option = option.trim();

    if option == "q" {
        return Ok(());
    }

    // An unusable selection is reported and the process exits cleanly.
    match option.parse::<usize>() {
        Ok(n) if (1..=links.len()).contains(&n) => {
            let link = go2web::search::absolutize(host, &links[n - 1]);
            let response = client.fetch(&link)?;
            let text = LynxRenderer::default().render(&response.body)?;
            println!("{}", text);
        }
        _ => tracing::error!("selection {:?} is not a listed result number", option),
    }

    Ok(())
}
