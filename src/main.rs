use anyhow::{Context, Result};
use clap::Parser;
use loscalc::{run_stdio, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive four-function calculator", long_about = None)]
struct Args {
    /// Do not print the banner on startup
    #[arg(long)]
    no_banner: bool,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            show_banner: !args.no_banner,
            verbosity: args.verbose,
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_directive()))
        .with_writer(std::io::stderr)
        .init();

    run_stdio(config).context("calculator session failed")
}
