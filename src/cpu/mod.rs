//! The instruction core: ALU, ModR/M decoding, per-opcode handlers, and the
//! [`Emulator`] that ties them together.

pub mod alu;
pub mod decode;
pub mod dispatch;
pub mod emulator;
pub mod execute;

pub use emulator::Emulator;
