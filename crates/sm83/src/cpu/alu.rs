use super::{Cpu, Flags};

impl Cpu {
    /// 8-bit ADD/ADC on A. `use_carry` selects ADC.
    pub(crate) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// 8-bit SUB/SBC on A. `use_carry` selects SBC.
    pub(crate) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.alu_compare(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(crate) fn alu_cp(&mut self, value: u8) {
        self.alu_compare(value, false);
    }

    fn alu_compare(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.f = Flags::N;
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    pub(crate) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.regs.f = Flags::H;
        self.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    pub(crate) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    pub(crate) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, result == 0);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// Updates Z, H and C from the correction applied; N is left alone.
    pub(crate) fn alu_daa(&mut self) {
        let flags = self.regs.f;
        let a = self.regs.a;
        let subtract = flags.contains(Flags::N);

        let low_digit = flags.contains(Flags::H) || (!subtract && a & 0x0F > 0x09);
        let high_digit = flags.contains(Flags::C) || (!subtract && a > 0x99);
        let correction = (u8::from(low_digit) * 0x06) | (u8::from(high_digit) * 0x60);

        let result = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        let mut f = flags & Flags::N;
        f.set(Flags::Z, result == 0);
        f.set(Flags::C, high_digit);
        self.regs.f = f;
        self.regs.a = result;
    }

    /// INC r / INC (HL). C is unaffected.
    #[inline]
    pub(crate) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let mut f = self.regs.f & Flags::C;
        f.set(Flags::Z, result == 0);
        f.set(Flags::H, result & 0x0F == 0);
        self.regs.f = f;
        result
    }

    /// DEC r / DEC (HL). C is unaffected.
    #[inline]
    pub(crate) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let mut f = (self.regs.f & Flags::C) | Flags::N;
        f.set(Flags::Z, result == 0);
        f.set(Flags::H, result & 0x0F == 0x0F);
        self.regs.f = f;
        result
    }

    /// ADD HL,rr. Z is unaffected; H carries out of bit 11, C out of bit 15.
    #[inline]
    pub(crate) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);

        let mut f = self.regs.f & Flags::Z;
        f.set(Flags::H, (hl ^ value ^ result) & 0x1000 != 0);
        f.set(Flags::C, carry);
        self.regs.f = f;
        self.regs.set_hl(result);
    }
}
