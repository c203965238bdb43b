//! Instruction-execution core of the Game Boy CPU (SM83 / LR35902).
//!
//! The crate models the register file, the flag register, a flat 64 KiB
//! memory image and a table-driven fetch/decode/execute loop with
//! per-instruction cycle accounting. Peripherals (PPU, APU, timers,
//! cartridge banking) are out of scope; they share the memory image through
//! the reserved I/O addresses that `MemoryBus` presets at power-on.

pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::{
    Cpu, CycleCounter, Flags, Flow, Instruction, OpcodeTable, Reg16, Reg8, Register,
    RegisterPair, Registers, RunSummary, Timing, OPCODES,
};
pub use error::{CpuError, RunError};
pub use memory::MemoryBus;
