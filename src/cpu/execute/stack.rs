//! PUSH/POP (register, r/m, segment register), PUSHF/POPF.

use crate::cpu::alu::Width;
use crate::cpu::emulator::Emulator;
use crate::cpu::execute::arithmetic;

/// 0xff — shared PUSH r/m16 (sub-opcode 6) / INC r/m16 (sub-opcode 0) group.
/// Any other sub-opcode no-ops.
pub fn push_inc_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.reg == 6 {
        let val = emu.read_rm(&modrm);
        emu.push_word(val);
    } else if modrm.reg == 0 {
        arithmetic::inc_rm16(emu, &modrm);
    }
}

/// 0x50-0x57 — PUSH r16.
pub fn push_r16(emu: &mut Emulator<'_>, opcode: u8) {
    let reg = opcode & 0x7;
    let val = emu.registers().get16(reg);
    emu.push_word(val);
}

/// 0x06/0x0e/0x16/0x1e — PUSH segreg.
pub fn push_sreg(emu: &mut Emulator<'_>, opcode: u8) {
    let segnum = (opcode >> 3) & 0x3;
    let val = emu.registers().get_seg(segnum);
    emu.push_word(val);
}

/// 0x8f — POP r/m16. Only sub-opcode 0 is valid; anything else no-ops.
pub fn pop_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.reg != 0 {
        return;
    }
    let val = emu.pop_word();
    emu.write_rm(&modrm, val);
}

/// 0x58-0x5f — POP r16.
pub fn pop_r16(emu: &mut Emulator<'_>, opcode: u8) {
    let reg = opcode & 0x7;
    let val = emu.pop_word();
    emu.registers_mut().set16(reg, val);
}

/// 0x07/0x0f/0x17/0x1f — POP segreg.
pub fn pop_sreg(emu: &mut Emulator<'_>, opcode: u8) {
    let segnum = (opcode >> 3) & 0x3;
    let val = emu.pop_word();
    emu.registers_mut().set_seg(segnum, val);
}

/// 0x9c — PUSHF.
pub fn pushf(emu: &mut Emulator<'_>, _opcode: u8) {
    let flags = emu.registers().get_flags();
    emu.push_word(flags);
}

/// 0x9d — POPF.
pub fn popf(emu: &mut Emulator<'_>, _opcode: u8) {
    let val = emu.pop_word();
    emu.registers_mut().set_flags(val);
}
