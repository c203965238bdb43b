use crate::cpu::{Cpu, Flow, Reg16, Reg8};

impl Cpu {
    pub(crate) fn exec_inc8(&mut self, opcode: u8) -> Flow {
        debug_assert!(
            matches!(opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C),
            "unexpected INC r opcode {opcode:#04x}"
        );

        let reg = Reg8::decode(opcode >> 3);
        let value = self.read_r8(reg);
        let result = self.alu_inc8(value);
        self.write_r8(reg, result);
        Flow::Next
    }

    pub(crate) fn exec_dec8(&mut self, opcode: u8) -> Flow {
        debug_assert!(
            matches!(opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D),
            "unexpected DEC r opcode {opcode:#04x}"
        );

        let reg = Reg8::decode(opcode >> 3);
        let value = self.read_r8(reg);
        let result = self.alu_dec8(value);
        self.write_r8(reg, result);
        Flow::Next
    }

    /// INC rr. No flags.
    pub(crate) fn exec_inc16(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let reg = Reg16::from_opcode(opcode);
        let value = self.regs.get16(reg).wrapping_add(1);
        self.regs.set16(reg, value);
        Flow::Next
    }

    /// DEC rr. No flags.
    pub(crate) fn exec_dec16(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let reg = Reg16::from_opcode(opcode);
        let value = self.regs.get16(reg).wrapping_sub(1);
        self.regs.set16(reg, value);
        Flow::Next
    }
}
