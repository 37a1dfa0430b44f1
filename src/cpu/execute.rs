/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Side-effect logic shared by every dispatch family: the ALU primitives,
stack choreography, operand read/write through a resolved `Operand`, and
the read-modify-write bus sequence. Family handlers under `dispatch/`
compose these; nothing here decodes opcodes or counts cycles.

Scope
-----
Operand access:
    read_operand, write_operand, modify_operand
Stack:
    push, pop, push_word, pop_word, push_status, pull_status
ALU (value in, value out, flags updated):
    adc, sbc, compare, and, ora, eor, bit
    asl, lsr, rol, ror, inc, dec

Design Notes
============
- Generic over `CpuRegs` + `Bus`; static dispatch only.
- SBC is ADC of the one's complement; the D flag is ignored (2A03 has no
  BCD adder).
- Memory RMW issues read, dummy write of the unmodified value, then the
  final write, matching the bus traffic mappers observe on hardware.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::stack_address;
use crate::cpu::status::Status;

// ---------------------------------------------------------------------------
// Operand access
// ---------------------------------------------------------------------------

/// Fetch the byte an operand designates.
#[inline]
pub(crate) fn read_operand<C: CpuRegs, B: Bus>(cpu: &C, bus: &mut B, operand: Operand) -> u8 {
    match operand {
        Operand::Immediate(v) => v,
        Operand::Memory(addr) => bus.read(addr),
        Operand::Accumulator => cpu.a(),
        // Read-type opcodes never decode to these.
        Operand::Implied | Operand::Branch(_) => 0,
    }
}

/// Store `v` to the operand location (memory or accumulator).
#[inline]
pub(crate) fn write_operand<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand, v: u8) {
    match operand {
        Operand::Memory(addr) => bus.write(addr, v),
        Operand::Accumulator => cpu.set_a(v),
        Operand::Immediate(_) | Operand::Implied | Operand::Branch(_) => {}
    }
}

/// Read-modify-write the operand. Accumulator forms touch no memory;
/// memory forms perform read -> dummy write (old) -> write (new).
/// Returns the new value.
pub(crate) fn modify_operand<C, B, F>(cpu: &mut C, bus: &mut B, operand: Operand, transform: F) -> u8
where
    C: CpuRegs,
    B: Bus,
    F: FnOnce(&mut C, u8) -> u8,
{
    match operand {
        Operand::Memory(addr) => {
            let old = bus.read(addr);
            bus.write(addr, old);
            let newv = transform(cpu, old);
            bus.write(addr, newv);
            newv
        }
        _ => {
            let old = cpu.a();
            let newv = transform(cpu, old);
            cpu.set_a(newv);
            newv
        }
    }
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
// Stack lives on page $01; push writes then post-decrements SP, pull
// pre-increments SP then reads. SP wraps within the page.

#[inline]
pub(crate) fn push<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, v: u8) {
    let sp = cpu.sp();
    bus.write(stack_address(sp), v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(stack_address(sp))
}

/// Push high byte then low byte (return-address order).
#[inline]
pub(crate) fn push_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, v as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P. `brk` = true for BRK/PHP, false for IRQ/NMI.
#[inline]
pub(crate) fn push_status<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, brk: bool) {
    let v = cpu.status().to_stack(brk);
    push(cpu, bus, v);
}

/// Pull P (PLP/RTI): UNUSED forced, BREAK discarded.
#[inline]
pub(crate) fn pull_status<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    cpu.set_status(Status::from_stack(v));
}

// ---------------------------------------------------------------------------
// ADC / SBC / compare
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let sum = a as u16 + v as u16 + cpu.status().carry_bit() as u16;
    let result = sum as u8;

    cpu.assign_flag(Status::CARRY, sum > 0xFF);
    // Overflow: operands agree in sign and the result does not.
    cpu.assign_flag(Status::OVERFLOW, (!(a ^ v) & (a ^ result) & 0x80) != 0);
    cpu.set_a(result);
    cpu.update_zn(result);
}

#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, !v);
}

/// CMP/CPX/CPY core: C = no borrow, Z/N from the difference.
#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.assign_flag(Status::CARRY, reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Logical / BIT
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.assign_flag(Status::ZERO, (cpu.a() & v) == 0);
    cpu.assign_flag(Status::NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(Status::OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Shifts / rotates / inc / dec (value transforms used with modify_operand)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = v << 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = v >> 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.status().carry_bit();
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = (v << 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.status().carry_bit() << 7;
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = (v >> 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}
