mod app;
mod domain;
mod logging;
mod repo;
mod store;
mod ui;
mod usecase;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use app::App;
use domain::task::Priority;
use repo::memory::InMemoryStorage;
use repo::sqlite::SqliteStorage;
use store::TaskStore;
use usecase::filter::Filter;

#[derive(Parser, Debug)]
#[command(author, version, about = "tana — prioritized todo TUI with local persistence", long_about = None)]
struct Args {
    /// Tick interval of render loop in milliseconds
    #[arg(long, default_value_t = 120)]
    tick_ms: u64,

    /// Start with demo tasks
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Use in-memory storage instead of SQLite
    #[arg(long, default_value_t = false)]
    memory: bool,

    /// Path to SQLite DB file (default: OS data dir)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Initial filter selector: all, active, completed, high, medium, low
    #[arg(long, default_value = "all")]
    filter: String,

    /// Priority preselected in the add form: high, medium, low
    #[arg(long, default_value = "medium")]
    priority: String,

    /// Write rotating log files into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = args.log_dir.as_deref().map(logging::init).transpose()?;

    let storage: Box<dyn repo::Storage> = if args.memory || args.demo {
        Box::new(InMemoryStorage::default())
    } else if let Some(path) = args.db_path.as_ref() {
        Box::new(SqliteStorage::open(path)?)
    } else {
        Box::new(SqliteStorage::open_default()?)
    };

    let mut store = TaskStore::load(storage);
    if args.demo {
        seed_tasks(&mut store);
    }

    let mut app = App::new(store);
    app.set_filter(Filter::parse(&args.filter));
    app.default_priority = Priority::parse_or_default(&args.priority);
    ui::run(app, Duration::from_millis(args.tick_ms))
}

fn seed_tasks(store: &mut TaskStore) {
    store.add("Write documentation", Priority::High);
    store.add("Sort the inbox", Priority::Medium);
    store.add("Water the plants", Priority::Low);
}
