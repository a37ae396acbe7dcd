//! `form` subcommands: registration form reference.

use anyhow::Result;

use crate::cli::FormCommand;
use crate::summary;

pub fn run(command: &FormCommand) -> Result<i32> {
    match command {
        FormCommand::Fields => {
            summary::print_form_fields();
            Ok(0)
        }
    }
}
