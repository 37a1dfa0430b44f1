/*!
unofficial.rs - Undocumented NMOS 6502 opcodes.

Overview
========
Combined read-modify-write ops (SLO RLA SRE RRA DCP ISC) run the RMW half
through `modify_operand` so the dummy write is preserved, then feed the
new value into the ALU half.

Unstable opcodes
================
The 2A03 matches the widely used nestest / blargg behavior:
- XAA and LAX #imm: `A = (A | $EE) & ...`.
- SHY / SHX / AHX / TAS store `reg & (H + 1)` where H is the high byte of
  the un-indexed base address. When indexing crossed a page the stored
  value also replaces the target's high byte.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, compare, modify_operand, read_operand, write_operand};
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::Status;

/// Magic constant used by XAA and immediate LAX on the 2A03.
const UNSTABLE_MAGIC: u8 = 0xEE;

pub(super) fn slo<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::asl);
    execute::ora(cpu, v);
}

pub(super) fn rla<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::rol);
    execute::and(cpu, v);
}

pub(super) fn sre<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::lsr);
    execute::eor(cpu, v);
}

pub(super) fn rra<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::ror);
    execute::adc(cpu, v);
}

pub(super) fn dcp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::dec);
    let a = cpu.a();
    compare(cpu, a, v);
}

pub(super) fn isc<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = modify_operand(cpu, bus, operand, execute::inc);
    execute::sbc(cpu, v);
}

pub(super) fn lax<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = match operand {
        Operand::Immediate(imm) => (cpu.a() | UNSTABLE_MAGIC) & imm,
        _ => read_operand(cpu, bus, operand),
    };
    cpu.set_a(v);
    cpu.set_x(v);
    cpu.update_zn(v);
}

pub(super) fn sax<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.a() & cpu.x();
    write_operand(cpu, bus, operand, v);
}

pub(super) fn anc<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::and(cpu, v);
    let n = cpu.flag(Status::NEGATIVE);
    cpu.assign_flag(Status::CARRY, n);
}

pub(super) fn alr<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let t = cpu.a() & v;
    let r = execute::lsr(cpu, t);
    cpu.set_a(r);
}

pub(super) fn arr<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let t = cpu.a() & v;
    let r = (t >> 1) | (cpu.status().carry_bit() << 7);
    cpu.set_a(r);
    cpu.update_zn(r);
    let bit6 = r & 0x40 != 0;
    let bit5 = r & 0x20 != 0;
    cpu.assign_flag(Status::CARRY, bit6);
    cpu.assign_flag(Status::OVERFLOW, bit6 ^ bit5);
}

pub(super) fn xaa<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let r = (cpu.a() | UNSTABLE_MAGIC) & cpu.x() & v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

/// AXS (a.k.a. SBX): `X = (A & X) - imm`, carry as in CMP, V untouched.
pub(super) fn axs<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let t = cpu.a() & cpu.x();
    let r = t.wrapping_sub(v);
    cpu.assign_flag(Status::CARRY, t >= v);
    cpu.set_x(r);
    cpu.update_zn(r);
}

pub(super) fn las<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand) & cpu.sp();
    cpu.set_a(v);
    cpu.set_x(v);
    cpu.set_sp(v);
    cpu.update_zn(v);
}

/// Store `reg & (H + 1)`; on a page cross the value also becomes the
/// target's high byte.
fn unstable_store<B: Bus>(bus: &mut B, operand: Operand, page_crossed: bool, index: u8, reg: u8) {
    let Operand::Memory(addr) = operand else {
        return;
    };
    let base_hi = (addr.wrapping_sub(index as u16) >> 8) as u8;
    let v = reg & base_hi.wrapping_add(1);
    let target = if page_crossed {
        ((v as u16) << 8) | (addr & 0x00FF)
    } else {
        addr
    };
    bus.write(target, v);
}

pub(super) fn shy<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand, page_crossed: bool) {
    unstable_store(bus, operand, page_crossed, cpu.x(), cpu.y());
}

pub(super) fn shx<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand, page_crossed: bool) {
    unstable_store(bus, operand, page_crossed, cpu.y(), cpu.x());
}

pub(super) fn ahx<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand, page_crossed: bool) {
    unstable_store(bus, operand, page_crossed, cpu.y(), cpu.a() & cpu.x());
}

pub(super) fn tas<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand, page_crossed: bool) {
    let sp = cpu.a() & cpu.x();
    cpu.set_sp(sp);
    unstable_store(bus, operand, page_crossed, cpu.y(), sp);
}
