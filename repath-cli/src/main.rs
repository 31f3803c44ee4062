//! Main entry point for the repath CLI.
//!
//! `repath` lists, cleans, and edits a PATH-style variable in the user,
//! process, or machine scope. Operations are selected with `/Name[:value]`
//! tokens:
//! - `/List`: print the cleaned list (default)
//! - `/Append:<path>`, `/Prefix:<path>`: add an entry
//! - `/Remove:<path>`: remove an entry
//! - `/Clean`: write back the cleaned list

use clap::Parser;
use repath_cli::{commands, Cli, GlobalOptions};

fn main() {
    let cli = Cli::parse();
    let global = GlobalOptions::from_cli(&cli);

    match commands::execute(&cli.options, &global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.exit_code();
            if code == 4 {
                eprintln!("Run `repath /Help` for usage.");
            }
            std::process::exit(code);
        }
    }
}
