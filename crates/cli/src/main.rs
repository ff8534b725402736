//! Interactive catalog browser entry point.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use armory_browse::BrowseSession;
use armory_catalog::Catalog;
use armory_cli::command::{Command, USAGE};
use armory_cli::render;

#[derive(Debug, Parser)]
#[command(name = "armory", about = "Browse, filter, and compare a handgun catalog")]
struct Options {
    /// Path to a catalog JSON document (defaults to the built-in dataset).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Tracing filter directive (overrides RUST_LOG).
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    armory_observability::tracing::init_with_filter(options.log_filter.as_deref());

    let catalog = load_catalog(options.data.as_deref())?;
    tracing::info!(items = catalog.len(), "catalog ready");

    let mut session = BrowseSession::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render::render(&session, &session.view()));
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{USAGE}"),
            Ok(Command::Facets) => {
                let facets = session.facets();
                println!("calibers: {}", facets.calibers().join(", "));
                println!("types:    {}", facets.types().join(", "));
                println!("price range: 0..{} (step 50)", facets.max_observed_price());
            }
            Ok(Command::Control(event)) => {
                session.apply(event);
                println!("{}", render::render(&session, &session.view()));
            }
            Err(err) => {
                println!("{err}");
                println!("{USAGE}");
            }
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog from {}", path.display()))?;
            let catalog = Catalog::from_json(&document)
                .with_context(|| format!("loading catalog from {}", path.display()))?;
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()?),
    }
}

fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}
