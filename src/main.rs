use anyhow::Context;
use clap::{Parser, Subcommand};
use erocras::config::Config;
use erocras::logging::init_tracing;
use erocras::shutdown::ShutdownHandle;
use erocras::submit::{JsonlSink, MemorySink, SubmissionHandler};
use erocras::ui::app::Site;
use erocras::ui::events::spawn_stdin_reader;
use erocras::ui::nav::MemoryAddressBar;
use erocras::ui::runtime;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "erocras", version, about = "Headless Erocras landing site")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the site, reading commands from stdin and printing snapshots.
    Run {
        /// Print a snapshot after every command.
        #[arg(long)]
        echo: bool,
        /// Address the host starts on.
        #[arg(long, default_value = "/")]
        address: String,
    },
    /// Print the page to address map.
    Routes,
    /// Print where the config file is looked up.
    ConfigPath,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let command = cli.command.unwrap_or(Command::Run {
        echo: false,
        address: "/".to_string(),
    });

    match command {
        Command::ConfigPath => {
            println!("{}", config_path.display());
            Ok(())
        }
        Command::Routes => {
            let config = load_config(&config_path)?;
            for (page, address) in config.address_map()?.iter() {
                println!("{:<12}{}", page, address);
            }
            Ok(())
        }
        Command::Run { echo, address } => {
            let config = load_config(&config_path)?;
            run_site(config, echo, address).await
        }
    }
}

fn load_config(path: &std::path::Path) -> anyhow::Result<Config> {
    Config::load_from(path).with_context(|| format!("loading {}", path.display()))
}

async fn run_site(config: Config, echo: bool, address: String) -> anyhow::Result<()> {
    let submissions: Box<dyn SubmissionHandler> = match &config.submissions.path {
        Some(path) => Box::new(JsonlSink::open(path)?),
        None => Box::new(MemorySink::new()),
    };
    let mut site = Site::new(config, Box::new(MemoryAddressBar::new(address)), submissions)?;

    let shutdown = ShutdownHandle::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.signal();
        }
    });

    let (tx, rx) = mpsc::channel(64);
    spawn_stdin_reader(tx);

    let mut stdout = std::io::stdout();
    runtime::run(&mut site, rx, shutdown, echo, &mut stdout).await?;
    Ok(())
}
