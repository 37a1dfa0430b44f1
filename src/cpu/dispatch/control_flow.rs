/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK.

Behavior Details
================
- JMP: the resolver already produced the destination (including the
  `JMP ($xxFF)` page-wrap quirk).
- JSR pushes the address of its own last byte (PC - 1); RTS pulls and adds 1.
- RTI pulls P (B dropped, U forced) then PC, with no +1.
- BRK pushes PC + 1 relative to the byte after the opcode, skipping the
  padding byte, then P with B set. It sets I and jumps through `$FFFE`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{pop_word, pull_status, push_status, push_word};
use crate::cpu::interrupt::IRQ_VECTOR;
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::Status;

pub(super) fn jmp<C: CpuRegs>(cpu: &mut C, operand: Operand) {
    if let Operand::Memory(target) = operand {
        cpu.set_pc(target);
    }
}

pub(super) fn jsr<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    jmp(cpu, operand);
}

pub(super) fn rts<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(super) fn rti<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    pull_status(cpu, bus);
    let pc = pop_word(cpu, bus);
    cpu.set_pc(pc);
}

pub(super) fn brk<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let ret = cpu.pc().wrapping_add(1);
    push_word(cpu, bus, ret);
    push_status(cpu, bus, true);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let target = bus.read_word(IRQ_VECTOR);
    cpu.set_pc(target);
}
