//! Opcode metadata and dispatch table.
//!
//! The table is the single source of truth for everything the dispatcher
//! and the disassembler need: mnemonic, operand length, timing and handler.
//! Unfilled slots are `None` and make `tick` fail with `UnsupportedOpcode`.

use std::fmt;

use lazy_static::lazy_static;

use crate::memory::MemoryBus;

use super::{Cpu, Reg16, Reg8};

/// Effect procedure for one opcode (or a group decoded from its bits).
pub type Handler = fn(&mut Cpu, u8) -> Flow;

/// Control flow reported by a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the next instruction.
    Next,
    /// A conditional branch was taken.
    Taken,
    /// A conditional branch was not taken.
    NotTaken,
}

/// Cycle cost of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timing {
    Fixed(u32),
    /// Conditional instructions cost more when the branch is taken.
    Branch { taken: u32, not_taken: u32 },
}

impl Timing {
    pub fn cycles(self, flow: Flow) -> u32 {
        match (self, flow) {
            (Timing::Fixed(cycles), _) => cycles,
            (Timing::Branch { taken, .. }, Flow::Taken) => taken,
            (Timing::Branch { not_taken, .. }, Flow::NotTaken | Flow::Next) => not_taken,
        }
    }
}

/// One opcode table entry.
#[derive(Clone)]
pub struct Instruction {
    /// Assembly form with operand placeholders (`d8`, `a8`, `r8`, `d16`,
    /// `a16`), e.g. `LD BC,d16`.
    pub mnemonic: String,
    /// Operand bytes following the opcode (0–2).
    pub operand_len: u8,
    pub timing: Timing,
    pub exec: Handler,
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("operand_len", &self.operand_len)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

impl Instruction {
    /// Total encoded length including the opcode byte.
    pub fn encoded_len(&self) -> u16 {
        1 + self.operand_len as u16
    }

    /// Substitute the operand bytes found after `addr` into the mnemonic.
    pub fn render(&self, memory: &MemoryBus, addr: u16) -> String {
        let operand = addr.wrapping_add(1);
        match self.operand_len {
            0 => self.mnemonic.clone(),
            1 => {
                let byte = memory.read_byte(operand);
                if self.mnemonic.contains("r8") {
                    let target = addr
                        .wrapping_add(self.encoded_len())
                        .wrapping_add(byte as i8 as u16);
                    self.mnemonic.replace("r8", &format!("${target:04X}"))
                } else if self.mnemonic.contains("a8") {
                    self.mnemonic.replace("a8", &format!("$FF{byte:02X}"))
                } else {
                    self.mnemonic.replace("d8", &format!("${byte:02X}"))
                }
            }
            _ => {
                let word = memory.read_word(operand);
                let text = format!("${word:04X}");
                self.mnemonic.replace("d16", &text).replace("a16", &text)
            }
        }
    }
}

/// 256-entry table indexed by opcode byte.
pub struct OpcodeTable {
    entries: [Option<Instruction>; 256],
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

lazy_static! {
    /// Base (unprefixed) opcode table.
    pub static ref OPCODES: OpcodeTable = OpcodeTable::base();
}

const CONDITIONS: [&str; 4] = ["NZ", "Z", "NC", "C"];
const ALU_OPS: [&str; 8] = [
    "ADD A,", "ADC A,", "SUB ", "SBC A,", "AND ", "XOR ", "OR ", "CP ",
];
const INDIRECT: [&str; 4] = ["(BC)", "(DE)", "(HL+)", "(HL-)"];

impl OpcodeTable {
    pub fn empty() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }

    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&Instruction> {
        self.entries[opcode as usize].as_ref()
    }

    /// Implemented opcodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Instruction)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(opcode, entry)| entry.as_ref().map(|instr| (opcode as u8, instr)))
    }

    /// Number of implemented opcodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a handler. Each opcode may be registered once.
    pub fn insert(
        &mut self,
        opcode: u8,
        mnemonic: impl Into<String>,
        operand_len: u8,
        timing: Timing,
        exec: Handler,
    ) {
        let slot = &mut self.entries[opcode as usize];
        debug_assert!(slot.is_none(), "opcode {opcode:#04x} registered twice");
        *slot = Some(Instruction {
            mnemonic: mnemonic.into(),
            operand_len,
            timing,
            exec,
        });
    }

    /// Build the table of implemented base opcodes.
    ///
    /// Not covered yet: STOP, HALT, stack/call/return/RST, DI/EI and the CB
    /// prefix. Those slots stay empty and fail loudly.
    pub fn base() -> Self {
        use Timing::{Branch, Fixed};

        let mut t = Self::empty();

        t.insert(0x00, "NOP", 0, Fixed(4), Cpu::exec_nop);
        t.insert(0x08, "LD (a16),SP", 2, Fixed(20), Cpu::exec_ld_a16_sp);

        for reg in Reg16::ALL {
            let row = (reg as u8) << 4;
            let name = reg.name();
            t.insert(row | 0x01, format!("LD {name},d16"), 2, Fixed(12), Cpu::exec_ld_rr_d16);
            t.insert(row | 0x03, format!("INC {name}"), 0, Fixed(8), Cpu::exec_inc16);
            t.insert(row | 0x09, format!("ADD HL,{name}"), 0, Fixed(8), Cpu::exec_add_hl_rr);
            t.insert(row | 0x0B, format!("DEC {name}"), 0, Fixed(8), Cpu::exec_dec16);
        }

        for (i, target) in INDIRECT.iter().enumerate() {
            let row = (i as u8) << 4;
            t.insert(row | 0x02, format!("LD {target},A"), 0, Fixed(8), Cpu::exec_ld_indirect_a);
            t.insert(row | 0x0A, format!("LD A,{target}"), 0, Fixed(8), Cpu::exec_ld_a_indirect);
        }

        for reg in Reg8::ALL {
            let field = (reg as u8) << 3;
            let name = reg.name();
            let mem = reg == Reg8::HlIndirect;
            let incdec = if mem { 12 } else { 4 };
            t.insert(0x04 | field, format!("INC {name}"), 0, Fixed(incdec), Cpu::exec_inc8);
            t.insert(0x05 | field, format!("DEC {name}"), 0, Fixed(incdec), Cpu::exec_dec8);
            let ld = if mem { 12 } else { 8 };
            t.insert(0x06 | field, format!("LD {name},d8"), 1, Fixed(ld), Cpu::exec_ld_r_d8);
        }

        t.insert(0x07, "RLCA", 0, Fixed(4), Cpu::exec_rotate_a);
        t.insert(0x0F, "RRCA", 0, Fixed(4), Cpu::exec_rotate_a);
        t.insert(0x17, "RLA", 0, Fixed(4), Cpu::exec_rotate_a);
        t.insert(0x1F, "RRA", 0, Fixed(4), Cpu::exec_rotate_a);
        t.insert(0x27, "DAA", 0, Fixed(4), Cpu::exec_daa);
        t.insert(0x2F, "CPL", 0, Fixed(4), Cpu::exec_cpl);
        t.insert(0x37, "SCF", 0, Fixed(4), Cpu::exec_scf);
        t.insert(0x3F, "CCF", 0, Fixed(4), Cpu::exec_ccf);

        t.insert(0x18, "JR r8", 1, Fixed(12), Cpu::exec_jr);
        for (i, cc) in CONDITIONS.iter().enumerate() {
            let field = (i as u8) << 3;
            let jr = Branch { taken: 12, not_taken: 8 };
            t.insert(0x20 | field, format!("JR {cc},r8"), 1, jr, Cpu::exec_jr_cc);
            let jp = Branch { taken: 16, not_taken: 12 };
            t.insert(0xC2 | field, format!("JP {cc},a16"), 2, jp, Cpu::exec_jp_cc);
        }
        t.insert(0xC3, "JP a16", 2, Fixed(16), Cpu::exec_jp_a16);
        t.insert(0xE9, "JP (HL)", 0, Fixed(4), Cpu::exec_jp_hl);

        // 0x40–0x7F: LD r,r'. 0x76 would be LD (HL),(HL); it encodes HALT.
        for dst in Reg8::ALL {
            for src in Reg8::ALL {
                let opcode = 0x40 | (dst as u8) << 3 | src as u8;
                if opcode == 0x76 {
                    continue;
                }
                let mem = dst == Reg8::HlIndirect || src == Reg8::HlIndirect;
                let cycles = if mem { 8 } else { 4 };
                let mnemonic = format!("LD {},{}", dst.name(), src.name());
                t.insert(opcode, mnemonic, 0, Fixed(cycles), Cpu::exec_ld_r_r);
            }
        }

        for (op, prefix) in ALU_OPS.iter().enumerate() {
            let field = (op as u8) << 3;
            for src in Reg8::ALL {
                let cycles = if src == Reg8::HlIndirect { 8 } else { 4 };
                let mnemonic = format!("{prefix}{}", src.name());
                t.insert(0x80 | field | src as u8, mnemonic, 0, Fixed(cycles), Cpu::exec_alu_reg);
            }
            t.insert(0xC6 | field, format!("{prefix}d8"), 1, Fixed(8), Cpu::exec_alu_imm);
        }

        t.insert(0xE0, "LDH (a8),A", 1, Fixed(12), Cpu::exec_ldh_a8);
        t.insert(0xF0, "LDH A,(a8)", 1, Fixed(12), Cpu::exec_ldh_a8);
        t.insert(0xE2, "LD (C),A", 0, Fixed(8), Cpu::exec_ldh_c);
        t.insert(0xF2, "LD A,(C)", 0, Fixed(8), Cpu::exec_ldh_c);
        t.insert(0xEA, "LD (a16),A", 2, Fixed(16), Cpu::exec_ld_a16_a);
        t.insert(0xFA, "LD A,(a16)", 2, Fixed(16), Cpu::exec_ld_a16_a);
        t.insert(0xF9, "LD SP,HL", 0, Fixed(8), Cpu::exec_ld_sp_hl);

        t
    }
}
