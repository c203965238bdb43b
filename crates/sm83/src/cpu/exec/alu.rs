use crate::cpu::{Cpu, Flags, Flow, Reg16, Reg8};

impl Cpu {
    /// Dispatch one of ADD/ADC/SUB/SBC/AND/XOR/OR/CP by its 3-bit selector.
    fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 0x80–0xBF: ALU A,r and ALU A,(HL)
    pub(crate) fn exec_alu_reg(&mut self, opcode: u8) -> Flow {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let value = self.read_r8(Reg8::decode(opcode));
        self.alu_op(opcode >> 3, value);
        Flow::Next
    }

    /// ALU A,d8
    pub(crate) fn exec_alu_imm(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let value = self.fetch8();
        self.alu_op(opcode >> 3, value);
        Flow::Next
    }

    /// RLCA / RRCA / RLA / RRA. Z, N and H are always cleared.
    pub(crate) fn exec_rotate_a(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let carry = self.get_flag(Flags::C);
        let (result, carry_out) = match opcode {
            // RLCA: bit 7 goes to both C and bit 0.
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            // RRCA: bit 0 goes to both C and bit 7.
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            // RLA: through carry.
            0x17 => ((a << 1) | u8::from(carry), a & 0x80 != 0),
            // RRA
            _ => ((a >> 1) | (u8::from(carry) << 7), a & 0x01 != 0),
        };

        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::C, carry_out);
        Flow::Next
    }

    pub(crate) fn exec_add_hl_rr(&mut self, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.get16(Reg16::from_opcode(opcode));
        self.alu_add16_hl(value);
        Flow::Next
    }

    pub(crate) fn exec_daa(&mut self, _opcode: u8) -> Flow {
        self.alu_daa();
        Flow::Next
    }

    pub(crate) fn exec_cpl(&mut self, _opcode: u8) -> Flow {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
        Flow::Next
    }

    pub(crate) fn exec_scf(&mut self, _opcode: u8) -> Flow {
        self.set_flag(Flags::C, true);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        Flow::Next
    }

    pub(crate) fn exec_ccf(&mut self, _opcode: u8) -> Flow {
        let carry = self.get_flag(Flags::C);
        self.set_flag(Flags::C, !carry);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        Flow::Next
    }
}
