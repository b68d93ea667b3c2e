//! StockDB Binary
//!
//! Opens the data file and runs the interactive stock control menu.

use std::io;

use clap::Parser;
use stockdb::cli::Session;
use stockdb::{Config, RecordStore, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// StockDB
#[derive(Parser, Debug)]
#[command(name = "stockdb")]
#[command(about = "Simple stock control backed by a fixed-slot data file")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = stockdb::config::DATABASE_FILENAME)]
    data_file: String,

    /// Number of product slots; a new file is created with this many, an
    /// existing file must hold exactly this many
    #[arg(short, long, default_value_t = stockdb::DATABASE_MAX)]
    capacity: usize,

    /// fsync after every write instead of only on exit
    #[arg(long)]
    sync_every_write: bool,

    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,
}

fn main() {
    // Logs go to stderr so they stay out of the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("StockDB v{}", stockdb::VERSION);
    tracing::info!("Data file: {}", args.data_file);

    let sync_strategy = if args.sync_every_write {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::OnClose
    };

    let config = Config::builder()
        .data_file(&args.data_file)
        .capacity(args.capacity)
        .sync_strategy(sync_strategy)
        .build();

    let creating = !config.data_file.exists();
    if creating {
        println!("Database does not exist.\nCreating...");
    }

    // Without a usable file nothing else can run
    let store = match RecordStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if creating {
        println!("Success\n");
    } else {
        println!("Database file OK\n");
    }

    let mut session = Session::new(&store, io::stdin().lock(), io::stdout().lock())
        .clear_screen(!args.no_clear);
    let result = session.run();
    drop(session);

    if let Err(e) = result {
        tracing::error!("Session error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = store.close() {
        tracing::error!("Failed to close store: {}", e);
        std::process::exit(1);
    }
}
