use crate::memory::MemoryBus;

use super::{CycleCounter, Cpu, Flags, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power on: fresh memory image, boot register state, zero cycles.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: MemoryBus::new(),
            cycles: CycleCounter::default(),
        };
        cpu.apply_dmg_boot_state();
        log::debug!("power-on: {}", cpu.regs);
        cpu
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = Flags::Z | Flags::H | Flags::C; // 0xB0
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}
