use crate::cpu::{Cpu, Flow};

impl Cpu {
    /// Relative jump. The signed displacement is relative to the address
    /// following the operand.
    fn jump_relative(&mut self, taken: bool) -> Flow {
        let offset = self.fetch8() as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            Flow::Taken
        } else {
            Flow::NotTaken
        }
    }

    fn jump_absolute(&mut self, taken: bool) -> Flow {
        let addr = self.fetch16();
        if taken {
            self.regs.pc = addr;
            Flow::Taken
        } else {
            Flow::NotTaken
        }
    }

    /// JR r8
    pub(crate) fn exec_jr(&mut self, _opcode: u8) -> Flow {
        self.jump_relative(true);
        Flow::Next
    }

    /// JR cc,r8
    pub(crate) fn exec_jr_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let taken = self.condition(opcode);
        self.jump_relative(taken)
    }

    /// JP a16
    pub(crate) fn exec_jp_a16(&mut self, _opcode: u8) -> Flow {
        self.jump_absolute(true);
        Flow::Next
    }

    /// JP cc,a16
    pub(crate) fn exec_jp_cc(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let taken = self.condition(opcode);
        self.jump_absolute(taken)
    }

    /// JP (HL)
    pub(crate) fn exec_jp_hl(&mut self, _opcode: u8) -> Flow {
        self.regs.pc = self.regs.hl();
        Flow::Next
    }
}
