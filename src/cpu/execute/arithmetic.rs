//! ADD/ADC/SUB/SBB, the 0x80-0x83 immediate group, and INC.

use crate::cpu::alu::{self, Width};
use crate::cpu::emulator::Emulator;
use crate::registers::RegisterFile;

/// One of the four ALU ops the 0x80-0x83 group can select.
#[derive(Clone, Copy)]
enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
}

fn apply(op: AluOp, width: Width, v1: u16, v2: u16, emu: &Emulator<'_>) -> (u16, u16) {
    let carry_in = match op {
        AluOp::Adc | AluOp::Sbb => emu.registers().get_flag(RegisterFile::CF) as u8,
        AluOp::Add | AluOp::Sub => 0,
    };
    match op {
        AluOp::Add | AluOp::Adc => alu::add_with_carry(width, v1, v2, carry_in),
        AluOp::Sub | AluOp::Sbb => alu::sub_with_borrow(width, v1, v2, carry_in),
    }
}

fn set_flags(emu: &mut Emulator<'_>, new_bits: u16) {
    let old = emu.registers().get_flags();
    emu.registers_mut().set_flags(alu::merge_flags(old, new_bits));
}

/// Shared body for the four `r, r/m` / `r/m, r` encodings every ALU family
/// has: 00/02, 01/03, 10/12, 11/13, 28/2a, 29/2b, 18/1a, 19/1b.
fn rm_r(emu: &mut Emulator<'_>, width: Width, op: AluOp, dest_is_rm: bool) {
    let modrm = emu.decode_modrm(width);
    let rm_val = emu.read_rm(&modrm);
    let reg_val = match width {
        Width::W8 => emu.registers().get8(modrm.reg) as u16,
        Width::W16 => emu.registers().get16(modrm.reg),
    };
    let (result, flags) = apply(op, width, rm_val, reg_val, emu);
    set_flags(emu, flags);
    if dest_is_rm {
        emu.write_rm(&modrm, result);
    } else {
        match width {
            Width::W8 => emu.registers_mut().set8(modrm.reg, result as u8),
            Width::W16 => emu.registers_mut().set16(modrm.reg, result),
        }
    }
}

/// Shared body for the `AL/AX, imm` encodings: 04/05, 14/15, 2c/2d, 1c/1d.
/// `accumulator_width` lets 0x15 (ADC AX, imm16) replicate the source's bug
/// of running the 8-bit ALU template on 16-bit operands.
fn acc_imm(emu: &mut Emulator<'_>, fetch_width: Width, alu_width: Width, op: AluOp) {
    let v1 = emu.registers().get16(RegisterFile::AX);
    let v2 = match fetch_width {
        Width::W8 => emu.fetch_byte() as u16,
        Width::W16 => emu.fetch_u16(),
    };
    let (result, flags) = apply(op, alu_width, v1, v2, emu);
    set_flags(emu, flags);
    match fetch_width {
        Width::W8 => emu.registers_mut().set8(RegisterFile::AL, result as u8),
        Width::W16 => emu.registers_mut().set16(RegisterFile::AX, result),
    }
}

pub fn add_rm8_r8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Add, true);
}
pub fn add_rm16_r16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Add, true);
}
pub fn add_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Add, false);
}
pub fn add_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Add, false);
}
pub fn add_al_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W8, Width::W8, AluOp::Add);
}
pub fn add_ax_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W16, Width::W16, AluOp::Add);
}

pub fn adc_rm8_r8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Adc, true);
}
pub fn adc_rm16_r16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Adc, true);
}
pub fn adc_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Adc, false);
}
pub fn adc_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Adc, false);
}
pub fn adc_al_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W8, Width::W8, AluOp::Adc);
}

/// 0x15 — ADC AX, imm16. The source runs this through the 8-bit ALU
/// template despite 16-bit operands, truncating the result and computing
/// flags off bit 7/8 instead of 15/16; replicated rather than corrected
/// (see SPEC_FULL.md §9.4).
pub fn adc_ax_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W16, Width::W8, AluOp::Adc);
}

pub fn sub_rm8_r8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Sub, true);
}
pub fn sub_rm16_r16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Sub, true);
}
pub fn sub_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Sub, false);
}
pub fn sub_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Sub, false);
}
pub fn sub_al_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W8, Width::W8, AluOp::Sub);
}
pub fn sub_ax_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W16, Width::W16, AluOp::Sub);
}

pub fn sbb_rm8_r8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Sbb, true);
}
pub fn sbb_rm16_r16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Sbb, true);
}
pub fn sbb_r8_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W8, AluOp::Sbb, false);
}
pub fn sbb_r16_rm16(emu: &mut Emulator<'_>, _opcode: u8) {
    rm_r(emu, Width::W16, AluOp::Sbb, false);
}
pub fn sbb_al_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W8, Width::W8, AluOp::Sbb);
}
pub fn sbb_ax_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    acc_imm(emu, Width::W16, Width::W16, AluOp::Sbb);
}

/// Sub-opcode selector shared by the 0x80-0x83 immediate group: only
/// ADD(0)/ADC(2)/SBB(3)/SUB(5) are implemented, matching the source (which
/// leaves AND/OR/XOR/CMP's group-1 encodings unimplemented).
fn group1_op(reg: u8) -> Option<AluOp> {
    match reg {
        0 => Some(AluOp::Add),
        2 => Some(AluOp::Adc),
        3 => Some(AluOp::Sbb),
        5 => Some(AluOp::Sub),
        _ => None,
    }
}

/// 0x80 — {ADD,ADC,SBB,SUB} r/m8, imm8. Also the target of 0x82 (the
/// sign-extend bit is meaningless at 8 bits, so the source aliases 0x82
/// straight to this handler).
pub fn group1_rm8_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    let Some(op) = group1_op(modrm.reg) else {
        return;
    };
    let v1 = emu.read_rm(&modrm);
    let v2 = emu.fetch_byte() as u16;
    let (result, flags) = apply(op, Width::W8, v1, v2, emu);
    set_flags(emu, flags);
    emu.write_rm(&modrm, result);
}

/// 0x81 — {ADD,ADC,SBB,SUB} r/m16, imm16.
pub fn group1_rm16_imm16(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    let Some(op) = group1_op(modrm.reg) else {
        return;
    };
    let v1 = emu.read_rm(&modrm);
    let v2 = emu.fetch_u16();
    let (result, flags) = apply(op, Width::W16, v1, v2, emu);
    set_flags(emu, flags);
    emu.write_rm(&modrm, result);
}

/// 0x83 — {ADD,ADC,SBB,SUB} r/m16, imm8 (sign-extended to 16 bits).
pub fn group1_rm16_imm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W16);
    let Some(op) = group1_op(modrm.reg) else {
        return;
    };
    let v1 = emu.read_rm(&modrm);
    let v2 = emu.fetch_i8_as_u16();
    let (result, flags) = apply(op, Width::W16, v1, v2, emu);
    set_flags(emu, flags);
    emu.write_rm(&modrm, result);
}

fn set_inc_flags(emu: &mut Emulator<'_>, new_bits: u16) {
    let old = emu.registers().get_flags();
    emu.registers_mut()
        .set_flags(alu::merge_inc_flags(old, new_bits));
}

/// 0xfe, sub-opcode 0 — INC r/m8. Any other sub-opcode no-ops (the source
/// does not implement DEC r/m8 here).
pub fn inc_rm8(emu: &mut Emulator<'_>, _opcode: u8) {
    let modrm = emu.decode_modrm(Width::W8);
    if modrm.reg != 0 {
        return;
    }
    let v = emu.read_rm(&modrm);
    let (result, flags) = alu::add_with_carry(Width::W8, v, 1, 0);
    set_inc_flags(emu, flags);
    emu.write_rm(&modrm, result);
}

/// 0xff, sub-opcode 0 — INC r/m16. Shared with [`super::stack::push_inc_rm16`],
/// which also owns sub-opcode 6 (PUSH r/m16).
pub fn inc_rm16(emu: &mut Emulator<'_>, modrm: &crate::cpu::decode::ModRm) {
    let v = emu.read_rm(modrm);
    let (result, flags) = alu::add_with_carry(Width::W16, v, 1, 0);
    set_inc_flags(emu, flags);
    emu.write_rm(modrm, result);
}

/// 0x40-0x47 — INC r16.
pub fn inc_r16(emu: &mut Emulator<'_>, opcode: u8) {
    let reg = opcode & 0x7;
    let v = emu.registers().get16(reg);
    let (result, flags) = alu::add_with_carry(Width::W16, v, 1, 0);
    set_inc_flags(emu, flags);
    emu.registers_mut().set16(reg, result);
}
