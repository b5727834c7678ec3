//! MOV, XCHG, LEA, LDS/LES, XLAT, LAHF/SAHF.

use crate::cpu::alu::Width;
use crate::cpu::decode::RmType;
use crate::cpu::emulator::Emulator;
use crate::registers::{physical_address, RegisterFile};

/// 0x88 — MOV r/m8, r8.
pub fn mov_rm8_r8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    let val = emu.registers().get8(modrm.reg) as u16;
    emu.write_rm(&modrm, val);
}

/// 0x89 — MOV r/m16, r16.
pub fn mov_rm16_r16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    let val = emu.registers().get16(modrm.reg);
    emu.write_rm(&modrm, val);
}

/// 0x8a — MOV r8, r/m8.
pub fn mov_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    let val = emu.read_rm(&modrm) as u8;
    emu.registers_mut().set8(modrm.reg, val);
}

/// 0x8b — MOV r16, r/m16.
pub fn mov_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    let val = emu.read_rm(&modrm);
    emu.registers_mut().set16(modrm.reg, val);
}

/// 0xc6 — MOV r/m8, imm8. Only `reg == 0` is a valid sub-opcode; any other
/// value consumes the ModR/M byte (and displacement, if any) and stops.
pub fn mov_rm8_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    if modrm.reg != 0 {
        return;
    }
    let imm = emu.fetch_byte() as u16;
    emu.write_rm(&modrm, imm);
}

/// 0xc7 — MOV r/m16, imm16. Same sub-opcode restriction as 0xc6.
pub fn mov_rm16_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.reg != 0 {
        return;
    }
    let imm = emu.fetch_u16();
    emu.write_rm(&modrm, imm);
}

/// 0xb0-0xb7 — MOV r8, imm8.
pub fn mov_r8_imm8(emu: &mut Emulator<'_>, opcode: u8) {
    let imm = emu.fetch_byte();
    let reg = opcode & 0x7;
    emu.registers_mut().set8(reg, imm);
}

/// 0xb8-0xbf — MOV r16, imm16.
pub fn mov_r16_imm16(emu: &mut Emulator<'_>, opcode: u8) {
    let imm = emu.fetch_u16();
    let reg = opcode & 0x7;
    emu.registers_mut().set16(reg, imm);
}

/// 0xa0 — MOV AL, [disp16] (always DS-relative).
pub fn mov_al_moffs8(emu: &mut Emulator<'_>, _opcode: u8) {
    let disp = emu.fetch_u16();
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, disp);
    let val = emu.read_moffs8(addr);
    emu.registers_mut().set8(RegisterFile::AL, val);
}

/// 0xa1 — MOV AX, [disp16].
pub fn mov_ax_moffs16(emu: &mut Emulator<'_>, _opcode: u8) {
    let disp = emu.fetch_u16();
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, disp);
    let val = emu.read_moffs16(addr);
    emu.registers_mut().set16(RegisterFile::AX, val);
}

/// 0xa2 — MOV [disp16], AL.
pub fn mov_moffs8_al(emu: &mut Emulator<'_>, _opcode: u8) {
    let disp = emu.fetch_u16();
    let val = emu.registers().get8(RegisterFile::AL);
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, disp);
    emu.write_moffs8(addr, val);
}

/// 0xa3 — MOV [disp16], AX.
pub fn mov_moffs16_ax(emu: &mut Emulator<'_>, _opcode: u8) {
    let disp = emu.fetch_u16();
    let val = emu.registers().get16(RegisterFile::AX);
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, disp);
    emu.write_moffs16(addr, val);
}

/// 0x8e — MOV segreg, r/m16. The reg field's high bit is reserved (only
/// ES/CS/SS/DS, segnum 0-3, are addressable); any other value no-ops.
pub fn mov_sreg_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.reg & 0b100 != 0 {
        return;
    }
    let val = emu.read_rm(&modrm);
    emu.registers_mut().set_seg(modrm.reg, val);
}

/// 0x8c — MOV r/m16, segreg. Same reserved-segnum restriction as 0x8e.
pub fn mov_rm16_sreg(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.reg & 0b100 != 0 {
        return;
    }
    let val = emu.registers().get_seg(modrm.reg);
    emu.write_rm(&modrm, val);
}

/// 0x86 — XCHG r8, r/m8.
pub fn xchg_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    let v1 = emu.read_rm(&modrm) as u8;
    let v2 = emu.registers().get8(modrm.reg);
    emu.write_rm(&modrm, v2 as u16);
    emu.registers_mut().set8(modrm.reg, v1);
}

/// 0x87 — XCHG r16, r/m16.
pub fn xchg_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    let v1 = emu.read_rm(&modrm);
    let v2 = emu.registers().get16(modrm.reg);
    emu.write_rm(&modrm, v2);
    emu.registers_mut().set16(modrm.reg, v1);
}

/// 0x90-0x97 — XCHG AX, r16 (0x90 with reg=AX is the conventional NOP).
pub fn xchg_ax_r16(emu: &mut Emulator<'_>, opcode: u8) {
    let reg = opcode & 0x7;
    let v1 = emu.registers().get16(RegisterFile::AX);
    let v2 = emu.registers().get16(reg);
    emu.registers_mut().set16(RegisterFile::AX, v2);
    emu.registers_mut().set16(reg, v1);
}

/// 0x8d — LEA r16, m. Computes the effective address without touching
/// memory; the register-direct encoding leaves the address at its
/// unspecified default (0), matching the source.
pub fn lea(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    emu.registers_mut().set16(modrm.reg, modrm.effective_address);
}

/// 0xc5 — LDS r16, m32: loads the register and DS from a far pointer in
/// memory. No-ops on the register-direct encoding (there is no memory to
/// load from).
pub fn lds(emu: &mut Emulator<'_>, _opcode: u8) {
    load_far_pointer(emu, RegisterFile::DS);
}

/// 0xc4 — LES r16, m32, loading ES instead of DS.
pub fn les(emu: &mut Emulator<'_>, _opcode: u8) {
    load_far_pointer(emu, RegisterFile::ES);
}

fn load_far_pointer(emu: &mut Emulator<'_>, seg_reg: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    if modrm.rm_type == RmType::Reg {
        return;
    }
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, modrm.effective_address);
    let offset = emu.read_moffs16(addr);
    let seg = emu.read_moffs16(addr.wrapping_add(2));
    emu.registers_mut().set16(modrm.reg, offset);
    emu.registers_mut().set_seg(seg_reg, seg);
}

/// 0xd7 — XLAT: AL = [DS:BX + AL].
pub fn xlat(emu: &mut Emulator<'_>, _opcode: u8) {
    let al = emu.registers().get8(RegisterFile::AL);
    let table_addr = emu.registers().get16(RegisterFile::BX);
    let ds = emu.registers().get_seg(RegisterFile::DS);
    let addr = physical_address(ds, table_addr.wrapping_add(al as u16));
    let val = emu.read_moffs8(addr);
    emu.registers_mut().set8(RegisterFile::AL, val);
}

/// 0x9f — LAHF: AH = low byte of the flags word.
pub fn lahf(emu: &mut Emulator<'_>, _opcode: u8) {
    let flags = emu.registers().get_flags();
    emu.registers_mut().set8(RegisterFile::AH, flags as u8);
}

/// 0x9e — SAHF: low byte of the flags word = AH.
pub fn sahf(emu: &mut Emulator<'_>, _opcode: u8) {
    let ah = emu.registers().get8(RegisterFile::AH) as u16;
    let old = emu.registers().get_flags();
    emu.registers_mut().set_flags((old & 0xFF00) | ah);
}
