//! Binary entrypoint for the terminal Cévennes trail client.

use std::process::ExitCode;

use cevennes_trails::startup;

/// Start the conversational trail search client.
fn main() -> ExitCode {
    startup::run()
}
