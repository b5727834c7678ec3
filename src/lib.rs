//! EZ8086 - cycle-agnostic 8086 instruction core
//!
//! Decodes and executes one instruction per [`cpu::Emulator::emulate`] call
//! against a register file, a typed memory port and a typed I/O port, all
//! supplied by the host. No cycle timing, interrupts, or prefetch modeling.

pub mod byte_source;
pub mod cpu;
pub mod io;
pub mod memory;
pub mod registers;

pub use byte_source::ByteSource;
pub use cpu::Emulator;
pub use io::IoPort;
pub use memory::MemoryPort;
pub use registers::RegisterFile;
