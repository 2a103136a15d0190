use crate::error::CliError;
use inquire::Text;
use std::env;
use std::io::{self, IsTerminal};

/// Whether to hold the terminal open before exiting.
///
/// Only ever true for an interactive session: `--no-pause`, a `CI`
/// environment variable or a non-terminal stdin all turn it off.
pub fn pause_enabled(no_pause: bool) -> bool {
    should_pause(
        no_pause,
        env::var_os("CI").is_some(),
        io::stdin().is_terminal(),
    )
}

fn should_pause(no_pause: bool, ci: bool, interactive: bool) -> bool {
    !no_pause && !ci && interactive
}

pub fn wait_for_acknowledgment() -> Result<(), CliError> {
    Text::new("Press Enter to exit")
        .prompt()
        .map(|_| ())
        .map_err(|e| CliError::InputError(e.to_string()))
}
