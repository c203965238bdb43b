use crate::cpu::{Cpu, Flow, Reg16, Reg8};

impl Cpu {
    /// LD rr,d16
    pub(crate) fn exec_ld_rr_d16(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16();
        self.regs.set16(Reg16::from_opcode(opcode), value);
        Flow::Next
    }

    /// LD r,d8 and LD (HL),d8
    pub(crate) fn exec_ld_r_d8(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let value = self.fetch8();
        self.write_r8(Reg8::decode(opcode >> 3), value);
        Flow::Next
    }

    /// LD r1,r2 over 0x40–0x7F. 0x76 is HALT and never reaches here.
    pub(crate) fn exec_ld_r_r(&mut self, opcode: u8) -> Flow {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let value = self.read_r8(Reg8::decode(opcode));
        self.write_r8(Reg8::decode(opcode >> 3), value);
        Flow::Next
    }

    /// Address used by LD (BC/DE/HL+/HL-),A and its mirror, with the HL
    /// post-increment/decrement already applied.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(crate) fn exec_ld_indirect_a(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_address(opcode);
        self.memory.write_byte(addr, self.regs.a);
        Flow::Next
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(crate) fn exec_ld_a_indirect(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_address(opcode);
        self.regs.a = self.memory.read_byte(addr);
        Flow::Next
    }

    /// LD (a16),SP
    pub(crate) fn exec_ld_a16_sp(&mut self, _opcode: u8) -> Flow {
        let addr = self.fetch16();
        self.memory.write_word(addr, self.regs.sp);
        Flow::Next
    }

    /// LD (a16),A / LD A,(a16)
    pub(crate) fn exec_ld_a16_a(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch16();
        if opcode == 0xEA {
            self.memory.write_byte(addr, self.regs.a);
        } else {
            self.regs.a = self.memory.read_byte(addr);
        }
        Flow::Next
    }

    /// LDH (a8),A / LDH A,(a8)
    pub(crate) fn exec_ldh_a8(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let addr = 0xFF00 | self.fetch8() as u16;
        if opcode == 0xE0 {
            self.memory.write_byte(addr, self.regs.a);
        } else {
            self.regs.a = self.memory.read_byte(addr);
        }
        Flow::Next
    }

    /// LD (C),A / LD A,(C)
    pub(crate) fn exec_ldh_c(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            self.memory.write_byte(addr, self.regs.a);
        } else {
            self.regs.a = self.memory.read_byte(addr);
        }
        Flow::Next
    }

    pub(crate) fn exec_ld_sp_hl(&mut self, _opcode: u8) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }
}
