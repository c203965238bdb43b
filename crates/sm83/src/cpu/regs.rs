use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::CpuError;

bitflags! {
    /// Flag bits held in the high nibble of F.
    ///
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    ///
    /// Bits 0–3 have no named flag, so `from_bits_truncate` drops them. That
    /// is how every write to F keeps the low nibble at zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// Named CPU registers: the eight 8-bit registers plus PC and SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
    H,
    L,
    PC,
    SP,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::F => "F",
            Register::H => "H",
            Register::L => "L",
            Register::PC => "PC",
            Register::SP => "SP",
        };
        f.write_str(name)
    }
}

impl FromStr for Register {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Register::A),
            "B" => Ok(Register::B),
            "C" => Ok(Register::C),
            "D" => Ok(Register::D),
            "E" => Ok(Register::E),
            "F" => Ok(Register::F),
            "H" => Ok(Register::H),
            "L" => Ok(Register::L),
            "PC" => Ok(Register::PC),
            "SP" => Ok(Register::SP),
            _ => Err(CpuError::InvalidRegister { name: s.to_string() }),
        }
    }
}

/// 16-bit views over two 8-bit registers, high register first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    AF,
    BC,
    DE,
    HL,
}

impl fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegisterPair::AF => "AF",
            RegisterPair::BC => "BC",
            RegisterPair::DE => "DE",
            RegisterPair::HL => "HL",
        };
        f.write_str(name)
    }
}

impl FromStr for RegisterPair {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AF" => Ok(RegisterPair::AF),
            "BC" => Ok(RegisterPair::BC),
            "DE" => Ok(RegisterPair::DE),
            "HL" => Ok(RegisterPair::HL),
            _ => Err(CpuError::InvalidRegister { name: s.to_string() }),
        }
    }
}

/// 8-bit operand encoded in the 3-bit register field of an opcode.
///
/// The order is the one the opcode tables use:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// The byte in memory addressed by HL.
    HlIndirect,
    A,
}

impl Reg8 {
    pub const ALL: [Reg8; 8] = [
        Reg8::B,
        Reg8::C,
        Reg8::D,
        Reg8::E,
        Reg8::H,
        Reg8::L,
        Reg8::HlIndirect,
        Reg8::A,
    ];

    /// Decode a register field. Only the low three bits are used.
    #[inline]
    pub fn decode(field: u8) -> Reg8 {
        Self::ALL[(field & 0x07) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlIndirect => "(HL)",
            Reg8::A => "A",
        }
    }
}

impl TryFrom<u8> for Reg8 {
    type Error = CpuError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| CpuError::InvalidRegister {
                name: format!("r8 index {index}"),
            })
    }
}

/// 16-bit operand encoded in bits 4–5 of an opcode: 0=BC, 1=DE, 2=HL, 3=SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    pub const ALL: [Reg16; 4] = [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP];

    /// Decode the pair field from bits 4–5 of `opcode`.
    #[inline]
    pub fn from_opcode(opcode: u8) -> Reg16 {
        Self::ALL[((opcode >> 4) & 0x03) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        }
    }
}

/// Registers for the Game Boy CPU (SM83).
///
/// Fields are plain bytes and words so Rust's integer types do the masking;
/// the named accessors below take the wider `u16` used by debuggers and
/// truncate on write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Read a named register. 8-bit registers are zero-extended.
    pub fn read(&self, reg: Register) -> u16 {
        match reg {
            Register::A => self.a as u16,
            Register::B => self.b as u16,
            Register::C => self.c as u16,
            Register::D => self.d as u16,
            Register::E => self.e as u16,
            Register::F => (self.f.bits() & 0xF0) as u16,
            Register::H => self.h as u16,
            Register::L => self.l as u16,
            Register::PC => self.pc,
            Register::SP => self.sp,
        }
    }

    /// Write a named register, keeping only the low 8 bits for 8-bit
    /// registers. F additionally drops its low nibble.
    pub fn write(&mut self, reg: Register, value: u16) {
        let byte = value as u8;
        match reg {
            Register::A => self.a = byte,
            Register::B => self.b = byte,
            Register::C => self.c = byte,
            Register::D => self.d = byte,
            Register::E => self.e = byte,
            Register::F => self.f = Flags::from_bits_truncate(byte),
            Register::H => self.h = byte,
            Register::L => self.l = byte,
            Register::PC => self.pc = value,
            Register::SP => self.sp = value,
        }
    }

    pub fn read_pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::AF => self.af(),
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
        }
    }

    pub fn write_pair(&mut self, pair: RegisterPair, value: u16) {
        match pair {
            RegisterPair::AF => self.set_af(value),
            RegisterPair::BC => self.set_bc(value),
            RegisterPair::DE => self.set_de(value),
            RegisterPair::HL => self.set_hl(value),
        }
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits() & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_truncate(f & 0xF0);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn get16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
            Reg16::SP => self.sp,
        }
    }

    #[inline]
    pub fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.set_bc(value),
            Reg16::DE => self.set_de(value),
            Reg16::HL => self.set_hl(value),
            Reg16::SP => self.sp = value,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, name: char| if set { name } else { '-' };
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} [{}{}{}{}]",
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            self.sp,
            self.pc,
            flag(self.f.contains(Flags::Z), 'Z'),
            flag(self.f.contains(Flags::N), 'N'),
            flag(self.f.contains(Flags::H), 'H'),
            flag(self.f.contains(Flags::C), 'C'),
        )
    }
}
