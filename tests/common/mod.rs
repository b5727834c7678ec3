//! Shared black-box test harness: a flat memory/IO bus plus a FIFO byte
//! source, wired up the way a real host would, minus the device models.

use ez8086::{ByteSource, Emulator, IoPort, MemoryPort, RegisterFile};
use std::collections::VecDeque;

pub struct Fifo(VecDeque<u8>);

impl Fifo {
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().collect())
    }
}

impl ByteSource for Fifo {
    fn pop(&mut self) -> u8 {
        self.0.pop_front().expect("test instruction stream ran dry")
    }
}

pub struct FlatMemory(pub Vec<u8>);

impl FlatMemory {
    pub fn new() -> Self {
        Self(vec![0; 1 << 20])
    }
}

impl MemoryPort for FlatMemory {
    fn read_u8(&self, addr: u32) -> u8 {
        self.0[addr as usize]
    }
    fn write_u8(&mut self, addr: u32, value: u8) {
        self.0[addr as usize] = value;
    }
}

pub struct FlatIo(pub Vec<u8>);

impl FlatIo {
    pub fn new() -> Self {
        Self(vec![0; 1 << 16])
    }
}

impl IoPort for FlatIo {
    fn read_u8(&mut self, port: u16) -> u8 {
        self.0[port as usize]
    }
    fn write_u8(&mut self, port: u16, value: u8) {
        self.0[port as usize] = value;
    }
}

/// Owns registers, memory and I/O for one test; `run` decodes and executes
/// a single instruction supplied as raw bytes and returns its length.
pub struct Harness {
    pub regs: RegisterFile,
    pub mem: FlatMemory,
    pub io: FlatIo,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: FlatMemory::new(),
            io: FlatIo::new(),
        }
    }

    pub fn run(&mut self, bytes: &[u8]) -> usize {
        let mut stream = Fifo::new(bytes);
        let mut emu = Emulator::new(&mut self.regs);
        emu.set_instruction_stream(&mut stream);
        emu.set_memory(&mut self.mem);
        emu.set_io(&mut self.io);
        emu.emulate()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
