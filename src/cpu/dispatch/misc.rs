/*!
misc.rs - Transfers, register increments, stack and flag opcodes.

TXS is the only transfer that leaves Z/N alone. PHP always pushes with B
and U set; PLP drops B and forces U.
*/

use crate::bus::Bus;
use crate::cpu::execute::{pop, pull_status, push, push_status};
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::Status;

/// Register selector for the transfer and increment opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Reg {
    A,
    X,
    Y,
    Sp,
}

fn get<C: CpuRegs>(cpu: &C, r: Reg) -> u8 {
    match r {
        Reg::A => cpu.a(),
        Reg::X => cpu.x(),
        Reg::Y => cpu.y(),
        Reg::Sp => cpu.sp(),
    }
}

fn set<C: CpuRegs>(cpu: &mut C, r: Reg, v: u8) {
    match r {
        Reg::A => cpu.set_a(v),
        Reg::X => cpu.set_x(v),
        Reg::Y => cpu.set_y(v),
        Reg::Sp => cpu.set_sp(v),
    }
}

/// `dst = src`, updating Z/N unless the destination is SP.
pub(super) fn transfer<C: CpuRegs>(cpu: &mut C, src: Reg, dst: Reg) {
    let v = get(cpu, src);
    set(cpu, dst, v);
    if dst != Reg::Sp {
        cpu.update_zn(v);
    }
}

/// INX / INY / DEX / DEY.
pub(super) fn step_reg<C: CpuRegs>(cpu: &mut C, r: Reg, delta: i8) {
    let v = get(cpu, r).wrapping_add(delta as u8);
    set(cpu, r, v);
    cpu.update_zn(v);
}

pub(super) fn pha<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    push(cpu, bus, a);
}

pub(super) fn pla<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    cpu.set_a(v);
    cpu.update_zn(v);
}

pub(super) fn php<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    push_status(cpu, bus, true);
}

pub(super) fn plp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    pull_status(cpu, bus);
}

pub(super) fn set_flag<C: CpuRegs>(cpu: &mut C, flag: Status, on: bool) {
    cpu.assign_flag(flag, on);
}
