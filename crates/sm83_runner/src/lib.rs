//! Program loader and stepping loop around the SM83 core.
//!
//! The core never touches files; this crate reads a raw image, writes it
//! into the memory image and decides how many ticks to issue.

use std::path::Path;

use anyhow::{bail, Context, Result};
use sm83::memory::MEMORY_SIZE;
use sm83::{Cpu, RunError, RunSummary};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunConfig {
    /// Address the first program byte is written to.
    #[builder(default = 0x0100)]
    pub load_at: u16,
    /// Initial PC. Defaults to `load_at`.
    #[builder(default)]
    pub entry: Option<u16>,
    #[builder(default = 1_000_000)]
    pub max_ticks: u64,
    /// Log every instruction before it executes.
    #[builder(default = false)]
    pub trace: bool,
}

/// Parse `0x1234`, `$1234` or plain decimal into an address.
pub fn parse_address(text: &str) -> Result<u16, String> {
    let text = text.trim();
    let parsed = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
    {
        u16::from_str_radix(hex, 16)
    } else {
        text.parse::<u16>()
    };
    parsed.map_err(|err| format!("invalid address `{text}`: {err}"))
}

pub fn read_program(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read program {}", path.display()))
}

/// Power on a core with `program` loaded according to `config`.
pub fn prepare(program: &[u8], config: &RunConfig) -> Result<Cpu> {
    if program.len() > MEMORY_SIZE {
        bail!(
            "program is {} bytes, larger than the {MEMORY_SIZE}-byte address space",
            program.len()
        );
    }

    let mut cpu = Cpu::new();
    cpu.memory.load(config.load_at, program);
    cpu.regs.pc = config.entry.unwrap_or(config.load_at);
    log::info!(
        "loaded {} bytes at 0x{:04X}, entry 0x{:04X}",
        program.len(),
        config.load_at,
        cpu.regs.pc
    );
    Ok(cpu)
}

/// Tick `cpu` until the budget runs out or the core faults.
pub fn execute(cpu: &mut Cpu, config: &RunConfig) -> Result<RunSummary, RunError> {
    if !config.trace {
        return cpu.run(config.max_ticks);
    }
    cpu.run_with(config.max_ticks, |cpu| {
        let pc = cpu.regs.pc;
        log::info!("{pc:04X}  {:<16} {}", cpu.disassemble(pc), cpu.regs);
    })
}
