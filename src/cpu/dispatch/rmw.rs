/*!
rmw.rs - Shifts, rotates and memory INC / DEC.

Overview
========
Memory forms go through `modify_operand`, which performs read, dummy
write of the old value, then write of the new value. Memory-mapped
registers see both writes. Accumulator forms (`ASL A` etc.) touch no
memory.

Timing
======
Indexed RMW forms never pay the page-cross penalty; their base count
already includes the fix-up cycle.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, modify_operand};
use crate::cpu::regs::CpuRegs;

pub(super) fn asl<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::asl);
}

pub(super) fn lsr<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::lsr);
}

pub(super) fn rol<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::rol);
}

pub(super) fn ror<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::ror);
}

pub(super) fn inc<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::inc);
}

pub(super) fn dec<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::dec);
}
