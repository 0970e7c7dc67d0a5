use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use mygit::areas::executor::{DEFAULT_PROGRAM, Executor};
use mygit::areas::session::Session;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "An interactive menu for everyday git tasks",
    long_about = "Presents numbered actions (sync, commit, clone, pull, reset, status, \
    directory navigation) and runs the matching git commands for you.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, help = "Directory to start in (defaults to the current directory)")]
    dir: Option<PathBuf>,
    #[arg(
        long,
        env = "MYGIT_GIT",
        default_value = DEFAULT_PROGRAM,
        help = "The git executable to run"
    )]
    git: String,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    ctrlc::set_handler(|| {
        println!("\n\n{}", "Interrupted by user".yellow());
        std::process::exit(0);
    })
    .context("Failed to install the interrupt handler")?;

    let cwd = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut session = Session::new(
        &cwd,
        Executor::system(cli.git),
        Box::new(std::io::stdout()),
        Box::new(std::io::stdin().lock()),
    )?;

    if !session.inspector().is_tool_available() {
        session.error("Git is not installed! Please install Git and try again.")?;
        session.writer().flush()?;
        std::process::exit(1);
    }

    session.run_menu()
}
