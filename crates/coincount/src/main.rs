//! Thin wrapper binary for the coincount CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    coincount::cmd::main()
}
