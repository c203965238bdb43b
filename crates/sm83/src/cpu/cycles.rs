/// Running total of elapsed CPU cycles.
///
/// The counter only moves forward: each dispatched instruction adds its
/// cost, and the only way back to zero is a new power-on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleCounter(u64);

impl CycleCounter {
    #[inline]
    pub fn total(self) -> u64 {
        self.0
    }

    #[inline]
    pub(crate) fn add(&mut self, cycles: u32) {
        self.0 = self.0.saturating_add(cycles as u64);
    }
}
