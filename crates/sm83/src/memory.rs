use std::fmt;

/// Size of the flat address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory-mapped I/O registers and their DMG post-boot values.
///
/// The addresses belong to peripherals that live outside this crate (timer,
/// sound, LCD, interrupt enable). The core only guarantees that these bytes
/// are present after power-on; it never interprets them.
pub const POWER_ON_IO: &[(u16, u8)] = &[
    // Timer: TIMA, TMA, TAC.
    (0xFF05, 0x00),
    (0xFF06, 0x00),
    (0xFF07, 0x00),
    // Sound.
    (0xFF10, 0x80), // NR10
    (0xFF11, 0xBF), // NR11
    (0xFF12, 0xF3), // NR12
    (0xFF14, 0xBF), // NR14
    (0xFF16, 0x3F), // NR21
    (0xFF17, 0x00), // NR22
    (0xFF19, 0xBF), // NR24
    (0xFF1A, 0x7F), // NR30
    (0xFF1B, 0xFF), // NR31
    (0xFF1C, 0x9F), // NR32
    (0xFF1E, 0xBF), // NR34
    (0xFF20, 0xFF), // NR41
    (0xFF21, 0x00), // NR42
    (0xFF22, 0x00), // NR43
    (0xFF23, 0xBF), // NR44
    (0xFF24, 0x77), // NR50
    (0xFF25, 0xF3), // NR51
    (0xFF26, 0xF1), // NR52
    // LCD and palettes.
    (0xFF40, 0x91), // LCDC
    (0xFF42, 0x00), // SCY
    (0xFF43, 0x00), // SCX
    (0xFF45, 0x00), // LYC
    (0xFF47, 0xFC), // BGP
    (0xFF48, 0xFF), // OBP0
    (0xFF49, 0xFF), // OBP1
    (0xFF4A, 0x00), // WY
    (0xFF4B, 0x00), // WX
    // Interrupt enable.
    (0xFFFF, 0x00),
];

/// Flat, unbanked 64 KiB memory image.
///
/// Every `u16` is a valid address, so reads and writes are total. 16-bit
/// accesses are little-endian and wrap from 0xFFFF to 0x0000.
#[derive(Clone)]
pub struct MemoryBus {
    bytes: Box<[u8]>,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBus")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl MemoryBus {
    /// Create a zeroed image with the power-on I/O values applied.
    pub fn new() -> Self {
        let mut bus = Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        };
        bus.apply_power_on_io();
        bus
    }

    fn apply_power_on_io(&mut self) {
        for &(addr, value) in POWER_ON_IO {
            self.write_byte(addr, value);
        }
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Read a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Copy `data` into the image starting at `addr`, wrapping past 0xFFFF.
    ///
    /// Program loaders use this before the first tick.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let mut cursor = addr;
        for &byte in data {
            self.write_byte(cursor, byte);
            cursor = cursor.wrapping_add(1);
        }
    }

    /// The whole image, indexable by address.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
