pub mod commands;

use crate::error::CliError;

pub trait Command {
    fn execute(&self) -> Result<(), CliError>;
}
