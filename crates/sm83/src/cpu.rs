mod alu;
mod cycles;
mod exec;
mod helpers;
mod init;
mod regs;
mod table;


pub use cycles::CycleCounter;
pub use regs::{Flags, Reg16, Reg8, Register, RegisterPair, Registers};
pub use table::{Flow, Handler, Instruction, OpcodeTable, Timing, OPCODES};

use crate::error::{CpuError, RunError};
use crate::memory::MemoryBus;

/// Game Boy CPU core.
///
/// A `Cpu` exclusively owns its register file, memory image and cycle
/// counter. Nothing is global, so independent instances can run side by side
/// (one per test thread, for example).
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub memory: MemoryBus,
    cycles: CycleCounter,
}

/// Outcome of a bounded [`Cpu::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub cycles: u64,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    /// Total cycles executed since power-on.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles.total()
    }

    #[inline]
    pub fn cycle_counter(&self) -> CycleCounter {
        self.cycles
    }

    /// Execute a single instruction and return the number of cycles taken.
    ///
    /// An opcode without a table entry is an error, never a no-op. PC has
    /// already moved past the opcode byte when that error is returned; no
    /// other state changes and the cycle counter is untouched.
    pub fn tick(&mut self) -> Result<u32, CpuError> {
        let address = self.regs.pc;
        let opcode = self.fetch8();

        let Some(instruction) = OPCODES.get(opcode) else {
            log::error!(
                "unsupported opcode 0x{opcode:02X} at PC=0x{address:04X} ({regs})",
                regs = self.regs,
            );
            return Err(CpuError::UnsupportedOpcode { opcode, address });
        };

        log::trace!(
            "{address:04X}: {opcode:02X} {mnemonic}",
            mnemonic = instruction.mnemonic
        );

        let flow = (instruction.exec)(self, opcode);
        let cycles = instruction.timing.cycles(flow);
        self.cycles.add(cycles);
        Ok(cycles)
    }

    /// Tick up to `max_ticks` times, stopping at the first error.
    pub fn run(&mut self, max_ticks: u64) -> Result<RunSummary, RunError> {
        self.run_with(max_ticks, |_| {})
    }

    /// Like [`Cpu::run`], calling `before_tick` ahead of every instruction.
    pub fn run_with<F>(
        &mut self,
        max_ticks: u64,
        mut before_tick: F,
    ) -> Result<RunSummary, RunError>
    where
        F: FnMut(&Cpu),
    {
        let mut summary = RunSummary::default();
        while summary.ticks < max_ticks {
            before_tick(self);
            match self.tick() {
                Ok(cycles) => {
                    summary.ticks += 1;
                    summary.cycles += cycles as u64;
                }
                Err(error) => return Err(RunError { summary, error }),
            }
        }
        Ok(summary)
    }

    /// Render the instruction stored at `addr`, e.g. `LD BC,$1234`.
    ///
    /// Bytes with no table entry render as a `DB` directive.
    pub fn disassemble(&self, addr: u16) -> String {
        let opcode = self.memory.read_byte(addr);
        match OPCODES.get(opcode) {
            Some(instruction) => instruction.render(&self.memory, addr),
            None => format!("DB ${opcode:02X}"),
        }
    }
}
