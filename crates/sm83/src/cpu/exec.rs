//! Opcode handlers.
//!
//! Every handler has the [`Handler`](super::Handler) signature: it receives
//! the opcode that selected it (so one handler can serve a whole opcode
//! group by decoding register fields), consumes its own operand bytes
//! through `fetch8`/`fetch16`, and reports whether a branch was taken.
//! Cycle costs live in the opcode table, not here.

mod alu;
mod control;
mod incdec;
mod ld;

use super::{Cpu, Flow};

impl Cpu {
    pub(crate) fn exec_nop(&mut self, _opcode: u8) -> Flow {
        Flow::Next
    }
}
