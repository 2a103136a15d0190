mod cli;
mod config;
mod error;
mod git;
mod input;
mod logger;
mod workflow;

use env_logger::{Builder, Env};
use log::debug;
use structopt::StructOpt;

use crate::cli::commands::push::PushCommand;
use crate::cli::Command;

#[derive(StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Opt {
    #[structopt(flatten)]
    push: PushCommand,

    #[structopt(short, long, help = "Show debug output")]
    verbose: bool,

    #[structopt(short, long, conflicts_with = "verbose", help = "Only show errors")]
    quiet: bool,

    #[structopt(long, help = "Exit without waiting for Enter")]
    no_pause: bool,
}

impl Opt {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn main() {
    let opt = Opt::from_args();
    Builder::from_env(Env::default().default_filter_or(opt.log_level())).init();

    let pause = input::pause_enabled(opt.no_pause);
    let result = opt.push.execute();

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    if pause {
        if let Err(e) = input::wait_for_acknowledgment() {
            debug!("Pause prompt dismissed: {}", e);
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
}
