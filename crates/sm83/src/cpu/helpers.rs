use super::{Cpu, Flags, Reg8};

impl Cpu {
    /// Read an 8-bit operand; `(HL)` goes through memory.
    #[inline]
    pub(crate) fn read_r8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlIndirect => self.memory.read_byte(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(crate) fn write_r8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlIndirect => self.memory.write_byte(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(crate) fn fetch8(&mut self) -> u8 {
        let value = self.memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(crate) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate the condition in bits 3–4 of a conditional opcode:
    /// 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(crate) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flags::Z),
            1 => self.get_flag(Flags::Z),
            2 => !self.get_flag(Flags::C),
            _ => self.get_flag(Flags::C),
        }
    }
}
