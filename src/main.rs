mod error;
mod logger;

use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use data::{Config, Page, Source, environment, loader, page, view};
use tokio::fs;

use self::error::Error;

/// Renders product cards from a JSON document into an HTML page.
///
/// The document is loaded once. When it can't be loaded a fixed set of
/// sample cards is rendered instead.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Card document, an http(s) URL or a path [default: data.json]
    source: Option<String>,

    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template containing the card container
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// `id` of the element cards are rendered into
    #[arg(long)]
    container: Option<String>,

    /// Log to stderr instead of the log file
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let is_debug = args.debug || cfg!(debug_assertions);

    if let Err(error) = logger::setup(is_debug) {
        eprintln!("unable to set up logging: {error}");
    }

    log::info!("showcase ({}) has started", environment::VERSION);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");

            eprintln!("Error: {error}");
            print_error_sources(&error);

            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    Config::create_template_config();

    let config = Config::load(args.config.as_deref())?;

    let template = match args.template.as_ref().or(config.template.as_ref()) {
        Some(path) => fs::read_to_string(path)
            .await
            .map_err(|e| Error::Template(path.clone(), e))?,
        None => page::DEFAULT_TEMPLATE.to_string(),
    };

    let container_id = args
        .container
        .as_deref()
        .unwrap_or(&config.page.container_id);

    let mut page = Page::new(&template, container_id)?;

    let source = args
        .source
        .as_deref()
        .map_or_else(|| config.source.clone(), Source::parse);

    let client = reqwest::Client::builder()
        .user_agent(environment::user_agent())
        .build()?;

    let cards = loader::load(&source, &client, &config.request).await;

    view::render(&mut page, &cards, config.placeholder());

    let html = page.to_html();

    match args.output.or(config.output) {
        Some(path) => {
            fs::write(&path, html)
                .await
                .map_err(|e| Error::Output(path.clone(), e))?;

            log::info!("wrote {} cards to {}", cards.len(), path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

fn print_error_sources(error: &Error) {
    let mut source = error.source();

    while let Some(error) = source {
        eprintln!("  caused by: {error}");
        source = error.source();
    }
}
