// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::debug;

/// Print the length of the longest substring without repeating characters
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The string to scan
    #[arg(default_value = "abcabcbb")]
    input: String,
    /// Also print the substring itself
    #[arg(short, long)]
    show: bool,
    /// Treat the input as UTF-8 bytes rather than characters
    #[arg(long)]
    bytes: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (len, run) = if args.bytes {
        let window = uniqwin::longest_unique_bytes(args.input.as_bytes());
        debug!("longest byte window is {:?}", window.range());

        let run = String::from_utf8_lossy(&args.input.as_bytes()[window.range()]).into_owned();
        (window.len(), run)
    } else {
        let run = uniqwin::longest_unique_substring(&args.input);
        debug!("longest substring of {:?} is {run:?}", args.input);

        (run.chars().count(), run.to_owned())
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{len}").context("Failed to write result to stdout")?;
    if args.show {
        writeln!(stdout, "{run}").context("Failed to write substring to stdout")?;
    }

    Ok(())
}
