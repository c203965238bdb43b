use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sm83_runner::{execute, parse_address, prepare, read_program, RunConfig};

/// Load a raw program image into the SM83 core and step it.
#[derive(Debug, Parser)]
#[command(name = "sm83_runner", version, about)]
struct Args {
    /// Raw program image (no header).
    program: PathBuf,

    /// Address to load the image at.
    #[arg(long, default_value = "0x0100", value_parser = parse_address)]
    load_at: u16,

    /// Initial PC (defaults to the load address).
    #[arg(long, value_parser = parse_address)]
    entry: Option<u16>,

    /// Stop after this many instructions.
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Log each instruction before executing it.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.trace { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = RunConfig::builder()
        .load_at(args.load_at)
        .entry(args.entry)
        .max_ticks(args.max_ticks)
        .trace(args.trace)
        .build();

    let program = read_program(&args.program)?;
    let mut cpu = prepare(&program, &config)?;

    let code = match execute(&mut cpu, &config) {
        Ok(summary) => {
            println!("ran {} instructions, {} cycles", summary.ticks, summary.cycles);
            ExitCode::SUCCESS
        }
        Err(fault) => {
            println!("stopped: {fault}");
            ExitCode::from(2)
        }
    };
    println!("{}", cpu.regs);
    println!("cycle counter: {}", cpu.cycles());
    Ok(code)
}
