// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fixture_emitter::{ByteOrder, Emitter, DEFAULT_BINARY_FILE, DEFAULT_TEXT_FILE};

/// Generates the reference binary fixture and its descriptive log.
#[derive(Debug, Parser)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    // Defaults to `emit`.
    #[clap(subcommand)]
    command: Option<Command>,

    // Arguments for `emit` when no subcommand is given.
    #[command(flatten)]
    fixture: FixtureArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the fixture pair.
    Emit(FixtureArgs),
    /// Check that an existing fixture pair is consistent.
    Verify(FixtureArgs),
}

#[derive(Debug, Args)]
struct FixtureArgs {
    /// Directory holding both files.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_BINARY_FILE)]
    binary: PathBuf,

    #[arg(long, default_value = DEFAULT_TEXT_FILE)]
    text: PathBuf,

    #[arg(long, value_enum, default_value_t = Order::Native)]
    byte_order: Order,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Native,
    Little,
    Big,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Native => ByteOrder::Native,
            Order::Little => ByteOrder::Little,
            Order::Big => ByteOrder::Big,
        }
    }
}

impl FixtureArgs {
    fn emitter(&self) -> Emitter {
        let mut emitter = Emitter::new();
        emitter
            .binary_path(&self.binary)
            .text_path(&self.text)
            .byte_order(self.byte_order.into());
        if let Some(dir) = &self.out_dir {
            emitter.out_dir(dir);
        }
        emitter
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            cli.fixture.emitter().run()?;
        }
        Some(Command::Emit(args)) => {
            args.emitter().run()?;
        }
        Some(Command::Verify(args)) => {
            let report = args.emitter().verify()?;
            println!("OK: {} values, {} bytes", report.entries, report.bytes);
        }
    }

    Ok(())
}
