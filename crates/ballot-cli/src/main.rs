//! ballot-cli: look up ballots from the terminal
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ ballot-cli stats
//!
//! - Search with a committed suggestion or free text
//!   $ ballot-cli search "Cook, Illinois (60629)"
//!   $ ballot-cli search district 4
//!
//! - Preview autocomplete
//!   $ ballot-cli suggest coo
//!
//! - Compile the tables once, then start from the binary store
//!   $ ballot-cli build --out ballots.bin
//!   $ ballot-cli --store ballots.bin search 02108
//!
//! Data source
//! -----------
//!
//! Without flags the CLI reads the small dataset bundled with `ballot-core`.
//! `--lookup` / `--ballots` (or `BALLOT_LOOKUP` / `BALLOT_DATA`) point at other
//! CSV or JSON tables, gzipped when they end in `.gz`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use ballot_cli::script::{parse_line, ScriptLine};
use ballot_cli::view::{MarkdownMode, TerminalView};
use ballot_core::{
    parse_query, BallotSession, RecordStore, ResultSink, SearchConfig, SuggestionIndex,
    EXAMPLE_QUERIES,
};
use clap::Parser;
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    let mut args = CliArgs::parse();
    init_logging(args.verbose);

    let Some(command) = args.command.take() else {
        print_examples();
        return Ok(());
    };

    match command {
        Commands::Examples => print_examples(),

        Commands::Parse { text } => {
            let text = text.join(" ");
            match parse_query(&text) {
                Some(q) => {
                    println!("county: {}", q.county);
                    println!("state:  {}", q.state);
                    println!("zip:    {}", q.zip);
                }
                None => println!("Not a \"County, State (Zip)\" query; searched as free text."),
            }
        }

        Commands::Stats => {
            let store = load_store(&args)?;
            let stats = store.stats();
            let index = SuggestionIndex::build(store.lookup());
            println!("Dataset statistics:");
            println!("  Lookup rows: {}", stats.lookup_rows);
            println!("  Suggestions: {}", index.len());
            println!("  Ballots:     {}", stats.ballots);
        }

        Commands::Search { query, html } => {
            let query = query.join(" ");
            let session = BallotSession::from_store(
                load_store(&args)?,
                SearchConfig::default(),
                markdown_mode(html),
                TerminalView::new(io::stdout().lock()),
            );
            let cards = session.cards(&query);
            log::info!("{} result(s) for {query:?}", cards.len());
            session.into_view().render_results(&cards);
        }

        Commands::Suggest { query, limit } => {
            let query = query.join(" ");
            let store = load_store(&args)?;
            let index = SuggestionIndex::build(store.lookup());
            let items = index.suggest(&query, &SearchConfig::with_limit(limit));
            if items.is_empty() {
                println!("No suggestions.");
            }
            for item in items {
                println!("{item}");
            }
        }

        Commands::Build { out } => {
            let store = load_store(&args)?;
            store
                .save_as(&out)
                .with_context(|| format!("writing store to {}", out.display()))?;
            let stats = store.stats();
            println!(
                "Wrote {} ({} lookup rows, {} ballots)",
                out.display(),
                stats.lookup_rows,
                stats.ballots
            );
        }

        Commands::Interactive { html } => run_interactive(load_store(&args)?, html)?,
    }

    Ok(())
}

fn markdown_mode(html: bool) -> MarkdownMode {
    if html {
        MarkdownMode::Html
    } else {
        MarkdownMode::Plain
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_examples() {
    println!("Type a county, state or zip and pick a suggestion, or try:");
    for q in EXAMPLE_QUERIES {
        println!("  ballot-cli search \"{q}\"");
    }
    println!();
    println!("Run `ballot-cli --help` for all commands.");
}

/// `--store` wins; otherwise the table paths, falling back to the bundled ones.
fn load_store(args: &CliArgs) -> anyhow::Result<RecordStore> {
    if let Some(path) = &args.store {
        log::info!("loading compiled store {}", path.display());
        return RecordStore::load_binary_file(path)
            .with_context(|| format!("loading store {}", path.display()));
    }

    if args.lookup.is_none() && args.ballots.is_none() {
        log::info!("loading bundled dataset");
        return Ok(RecordStore::load()?.clone());
    }

    let lookup = args
        .lookup
        .clone()
        .unwrap_or_else(RecordStore::default_lookup_path);
    let ballots = args
        .ballots
        .clone()
        .unwrap_or_else(RecordStore::default_ballots_path);
    RecordStore::load_from_paths(&lookup, &ballots).with_context(|| {
        format!(
            "loading {} and {}",
            lookup.display(),
            ballots.display()
        )
    })
}

fn run_interactive(store: RecordStore, html: bool) -> anyhow::Result<()> {
    let mut session = BallotSession::from_store(
        store,
        SearchConfig::default(),
        markdown_mode(html),
        TerminalView::new(io::stdout()),
    );

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match parse_line(&line) {
            ScriptLine::Event(event) => {
                let transition = session.handle(event);
                log::debug!("{transition:?}");
            }
            ScriptLine::Search(query) => {
                session.search(&query);
            }
            ScriptLine::Quit => break,
            ScriptLine::Unknown(text) => eprintln!("unknown command: {text}"),
        }
    }
    Ok(())
}
