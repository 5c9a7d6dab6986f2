use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod menu;

#[derive(Parser)]
#[command(name = "figures")]
#[command(about = "Build regular polygons, keep them in a dynamic array, sum their areas")]
struct Cmd {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Initial capacity of the figure array
    #[arg(long, default_value_t = 0, global = true)]
    capacity: usize,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Interactive menu on stdin/stdout (default)
    Menu,
    /// Read `code cx cy r` lines and print a JSON summary
    Batch {
        /// Input file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    // logs go to stderr so they never interleave with menu output
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(version = figures::VERSION, capacity = cmd.capacity, "start");
    match cmd.action.unwrap_or(Action::Menu) {
        Action::Menu => run_menu(cmd.capacity),
        Action::Batch { input } => batch::run(&input, cmd.capacity),
    }
}

fn run_menu(capacity: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::Menu::new(stdin.lock(), stdout.lock(), capacity).run()
}
