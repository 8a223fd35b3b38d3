use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use vitrine::core::config::{self, CliOverrides};
use vitrine::core::history::path_from_url;
use vitrine::core::{CatalogStore, NavigationController};
use vitrine::tui;

#[derive(Parser)]
#[command(name = "vitrine", about = "Browse a hierarchical catalog in the terminal")]
struct Args {
    /// Catalog JSON file (defaults to the bundled demo catalog)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Node id to open on startup
    #[arg(short, long)]
    start: Option<String>,

    /// Start location as a URL, e.g. "/?path=stamps-france"
    #[arg(long, conflicts_with = "start")]
    url: Option<String>,

    /// Artificial loading delay in milliseconds (0 disables)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the start location as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Log level written to vitrine.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to vitrine.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vitrine.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().map_err(io::Error::other)?;
    let overrides = CliOverrides {
        data_file: args.data,
        start_path: args.start.or_else(|| args.url.as_deref().map(path_from_url)),
        loading_delay_ms: args.delay_ms,
    };
    let resolved = config::resolve(&file_config, &overrides);

    let store = match &resolved.data_file {
        Some(path) => CatalogStore::load(path),
        None => CatalogStore::demo(),
    }
    .map_err(io::Error::other)?;

    log::info!(
        "Vitrine starting up: {} nodes, start at {:?}",
        store.len(),
        resolved.start_path
    );

    if args.dump {
        let mut controller = NavigationController::new(Arc::new(store), resolved.root_title);
        let state = controller.navigate_to(&resolved.start_path).clone();
        let dump = serde_json::json!({
            "url": controller.current_url(),
            "state": state,
        });
        let text = serde_json::to_string_pretty(&dump).map_err(io::Error::other)?;
        println!("{text}");
        return Ok(());
    }

    tui::run(resolved, store)
}
