use thiserror::Error;

use crate::cpu::RunSummary;

/// Faults raised by the CPU core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    /// A register identifier outside the defined set.
    ///
    /// Only the fallible conversions (`FromStr`, `TryFrom<u8>`) produce this;
    /// dispatch works on closed enums and never reaches it.
    #[error("invalid register `{name}`")]
    InvalidRegister { name: String },

    /// The fetched opcode has no handler in the opcode table.
    ///
    /// `address` is where the opcode byte was fetched from, i.e. PC before
    /// the fetch advanced it.
    #[error("unsupported opcode 0x{opcode:02X} at 0x{address:04X}")]
    UnsupportedOpcode { opcode: u8, address: u16 },
}

/// A bounded run that stopped on a fault.
///
/// `summary` counts only the instructions that completed before `error`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error} after {} instructions ({} cycles)", .summary.ticks, .summary.cycles)]
pub struct RunError {
    pub summary: RunSummary,
    pub error: CpuError,
}
