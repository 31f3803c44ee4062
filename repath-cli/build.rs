//! Build script for repath-cli.
//!
//! Generates the `repath.1` man page into OUT_DIR using clap_mangen.
//!
//! The command structure is rebuilt here because a build script cannot
//! depend on the crate being built. Keep it synchronized with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("repath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean and edit PATH-style environment variables")
        .long_about(
            "Lists, cleans, appends, prefixes, and removes entries of a delimited \
             list-valued environment variable in the user, process, or machine scope. \
             Operations, targets, and flags are given as /Name[:value] tokens: \
             /List, /Append:<path> (alias /Add), /Prefix:<path>, /Remove:<path>, /Clean, \
             /Help; /User, /Process, /Machine; /Verbose, /IgnoreCase (alias /DoNotFixCase), \
             /KeepDuplicates, /KeepOrphans, /WhatIf, /Confirm.",
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress warnings and non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the user data directory location")
                .value_name("PATH")
                .env("REPATH_DATA_DIR"),
        )
        .arg(
            Arg::new("machine-dir")
                .long("machine-dir")
                .help("Override the machine data directory location")
                .value_name("PATH")
                .env("REPATH_MACHINE_DIR"),
        )
        .arg(
            Arg::new("variable")
                .long("variable")
                .help("Variable to edit (defaults to PATH)")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .help("List delimiter (defaults to the platform's PATH delimiter)")
                .value_name("CHAR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json"]),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Treat unrecognized options as errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("case-sensitive-options")
                .long("case-sensitive-options")
                .help("Match option names case-sensitively")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in seconds)")
                .value_name("SECONDS"),
        )
        .arg(
            Arg::new("options")
                .help("Option tokens such as /List, /Append:<path>, /Machine, /WhatIf")
                .value_name("OPTION")
                .num_args(0..)
                .allow_hyphen_values(true),
        )
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("repath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
