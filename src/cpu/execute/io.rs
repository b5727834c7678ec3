//! IN/OUT.

use crate::cpu::emulator::Emulator;
use crate::registers::RegisterFile;

/// 0xe4 — IN AL, imm8.
pub fn in_al_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.fetch_byte() as u16;
    let val = emu.io_mut().read_u8(port);
    emu.registers_mut().set8(RegisterFile::AL, val);
}

/// 0xe5 — IN AX, imm8.
pub fn in_ax_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.fetch_byte() as u16;
    let val = emu.io_mut().read_u16(port);
    emu.registers_mut().set16(RegisterFile::AX, val);
}

/// 0xec — IN AL, DX.
pub fn in_al_dx(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.registers().get16(RegisterFile::DX);
    let val = emu.io_mut().read_u8(port);
    emu.registers_mut().set8(RegisterFile::AL, val);
}

/// 0xed — IN AX, DX.
pub fn in_ax_dx(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.registers().get16(RegisterFile::DX);
    let val = emu.io_mut().read_u16(port);
    emu.registers_mut().set16(RegisterFile::AX, val);
}

/// 0xe6 — OUT imm8, AL.
pub fn out_imm8_al(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.fetch_byte() as u16;
    let val = emu.registers().get8(RegisterFile::AL);
    emu.io_mut().write_u8(port, val);
}

/// 0xe7 — OUT imm8, AX.
pub fn out_imm8_ax(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.fetch_byte() as u16;
    let val = emu.registers().get16(RegisterFile::AX);
    emu.io_mut().write_u16(port, val);
}

/// 0xee — OUT DX, AL.
pub fn out_dx_al(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.registers().get16(RegisterFile::DX);
    let val = emu.registers().get8(RegisterFile::AL);
    emu.io_mut().write_u8(port, val);
}

/// 0xef — OUT DX, AX.
pub fn out_dx_ax(emu: &mut Emulator<'_>, _opcode: u8) {
    let port = emu.registers().get16(RegisterFile::DX);
    let val = emu.registers().get16(RegisterFile::AX);
    emu.io_mut().write_u16(port, val);
}
