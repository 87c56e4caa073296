use std::path::PathBuf;

use anyhow::{Context, Result};
use avlviz::script::{self, Command, ScriptKey};
use avlviz::{LayoutConfig, SessionConfig, TraversalOrder, TreeSession};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avlviz", about = "AVL tree engine with layout and undo/redo history")]
struct Cli {
    /// Log rotations and replays (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Vertical distance between tree levels.
    #[arg(long, global = true, default_value_t = 100.0)]
    level_height: f64,
    /// Minimum horizontal width reserved for any subtree.
    #[arg(long, global = true, default_value_t = 80.0)]
    min_sibling_distance: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a command script (one command per line).
    Run {
        /// Script file (`insert 5`, `undo`, `print inorder`, `layout`, ...).
        script: PathBuf,
    },
    /// Insert keys in order and print traversals, stats and layout.
    Build {
        /// Keys to insert.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<ScriptKey>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = LayoutConfig::default()
        .with_level_height(cli.layout.level_height)
        .with_min_sibling_distance(cli.layout.min_sibling_distance);
    let mut session = TreeSession::new(SessionConfig::default().with_layout(layout))
        .context("invalid layout options")?;

    match cli.command {
        Commands::Run { script } => run_script(&mut session, script)?,
        Commands::Build { keys } => run_build(&mut session, keys),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_script(session: &mut TreeSession<ScriptKey>, path: PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let lines = script::run_script(session, &source)
        .with_context(|| format!("failed to parse script {}", path.display()))?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run_build(session: &mut TreeSession<ScriptKey>, keys: Vec<ScriptKey>) {
    let mut commands = vec![Command::Insert(keys)];
    commands.extend(TraversalOrder::ALL.into_iter().map(Command::Print));
    commands.push(Command::Stats);
    commands.push(Command::Layout);

    for command in &commands {
        for line in script::execute(session, command) {
            println!("{line}");
        }
    }
}
