/*!
addressing.rs - 6502 addressing modes and operand resolution

Overview
========
`resolve` turns an addressing mode plus the current registers into an
`Operand` and a page-crossed flag, consuming the operand bytes that follow
the opcode. The executor then reads/writes through the same bus.

Scope & Responsibilities
========================
- Pure operand location only. No cycle penalties are applied here; the
  crossing flag is reported and the cycle rules (`cycles.rs`) decide
  whether the opcode pays for it.
- PC must point at the first operand byte on entry (opcode already
  fetched). On return it points at the next instruction.

Hardware Quirks Reproduced
==========================
- Zero-page indexed modes wrap inside page zero (`$FF + 1 -> $00`) and
  never report a crossing.
- `(zp,X)` and `(zp),Y` read their 16-bit pointer from zero page with
  the high byte wrapping to `$00` when the pointer sits at `$FF`.
- `JMP ($xxFF)` fetches the high byte from `$xx00`, not the next page.
- Relative targets are computed from PC *after* the displacement byte.

Function Inventory
------------------
Fetch:
    fetch_byte, fetch_word
Resolution:
    resolve(mode) -> Resolved
Low-level pointer reads:
    read_word_zp(base: u8)
    read_word_indirect_bug(addr)
*/

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

/// Operand addressing modes of the NMOS 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddressingMode::Implied => "implied",
            AddressingMode::Accumulator => "accumulator",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zero-page",
            AddressingMode::ZeroPageX => "zero-page,X",
            AddressingMode::ZeroPageY => "zero-page,Y",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteX => "absolute,X",
            AddressingMode::AbsoluteY => "absolute,Y",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndexedIndirect => "(indirect,X)",
            AddressingMode::IndirectIndexed => "(indirect),Y",
            AddressingMode::Relative => "relative",
        };
        f.write_str(s)
    }
}

/// Where an instruction's operand lives once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator itself (shift/rotate `A` forms).
    Accumulator,
    /// Literal byte taken from the instruction stream.
    Immediate(u8),
    /// Effective memory address. For JMP this is the jump target.
    Memory(u16),
    /// Branch destination (already offset from the post-operand PC).
    Branch(u16),
}

/// Result of operand resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// Indexing (or a branch target) landed on a different 256-byte page.
    pub page_crossed: bool,
}

impl Resolved {
    #[inline]
    fn new(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    #[inline]
    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            operand: Operand::Memory(addr),
            page_crossed: pages_differ(base, addr),
        }
    }
}

/// True when `a` and `b` sit on different 256-byte pages.
#[inline]
pub fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc(1);
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Resolve the operand for `mode`, advancing PC past the operand bytes.
pub(crate) fn resolve<C: CpuRegs, B: Bus>(mode: AddressingMode, cpu: &mut C, bus: &mut B) -> Resolved {
    match mode {
        AddressingMode::Implied => Resolved::new(Operand::Implied),
        AddressingMode::Accumulator => Resolved::new(Operand::Accumulator),
        AddressingMode::Immediate => Resolved::new(Operand::Immediate(fetch_byte(cpu, bus))),
        AddressingMode::ZeroPage => Resolved::new(Operand::Memory(fetch_byte(cpu, bus) as u16)),
        AddressingMode::ZeroPageX => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            Resolved::new(Operand::Memory(zp as u16))
        }
        AddressingMode::ZeroPageY => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.y());
            Resolved::new(Operand::Memory(zp as u16))
        }
        AddressingMode::Absolute => Resolved::new(Operand::Memory(fetch_word(cpu, bus))),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.x() as u16))
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            Resolved::new(Operand::Memory(read_word_indirect_bug(bus, ptr)))
        }
        AddressingMode::IndexedIndirect => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            Resolved::new(Operand::Memory(read_word_zp(bus, zp)))
        }
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Relative => {
            let offset = fetch_byte(cpu, bus) as i8;
            let next = cpu.pc();
            let target = next.wrapping_add(offset as i16 as u16);
            Resolved {
                operand: Operand::Branch(target),
                page_crossed: pages_differ(next, target),
            }
        }
    }
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte.
#[inline]
pub(crate) fn read_word_zp<B: Bus>(bus: &mut B, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) page-wrap bug: when the low byte of the vector address
/// is `$FF`, the high byte comes from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug<B: Bus>(bus: &mut B, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Ram;
    use crate::cpu::state::CpuState;

    fn at(pc: u16, bytes: &[u8]) -> (CpuState, Ram) {
        let mut ram = Ram::new();
        ram.load(pc, bytes);
        let mut cpu = CpuState::new();
        cpu.pc = pc;
        (cpu, ram)
    }

    #[test]
    fn operand_lengths_match_pc_advance() {
        use AddressingMode::*;
        for mode in [
            Implied, Accumulator, Immediate, ZeroPage, ZeroPageX, ZeroPageY, Absolute, AbsoluteX,
            AbsoluteY, Indirect, IndexedIndirect, IndirectIndexed, Relative,
        ] {
            let (mut cpu, mut ram) = at(0x0400, &[0x10, 0x20]);
            resolve(mode, &mut cpu, &mut ram);
            assert_eq!(cpu.pc, 0x0400 + mode.operand_len(), "{mode}");
        }
    }

    #[test]
    fn immediate_yields_value() {
        let (mut cpu, mut ram) = at(0x0400, &[0x42]);
        let r = resolve(AddressingMode::Immediate, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Immediate(0x42));
    }

    #[test]
    fn zero_page_x_wraps_without_crossing() {
        let (mut cpu, mut ram) = at(0x0400, &[0xF0]);
        cpu.x = 0x20;
        let r = resolve(AddressingMode::ZeroPageX, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x0010));
        assert!(!r.page_crossed);
    }

    #[test]
    fn abs_x_page_cross_detection() {
        let (mut cpu, mut ram) = at(0x0400, &[0xF5, 0x80]);
        cpu.x = 0x10;
        let r = resolve(AddressingMode::AbsoluteX, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x8105));
        assert!(r.page_crossed);

        let (mut cpu, mut ram) = at(0x0400, &[0x00, 0x80]);
        cpu.x = 0x10;
        assert!(!resolve(AddressingMode::AbsoluteX, &mut cpu, &mut ram).page_crossed);
    }

    #[test]
    fn abs_y_wraps_at_top_of_memory() {
        let (mut cpu, mut ram) = at(0x0400, &[0xFF, 0xFF]);
        cpu.y = 0x02;
        let r = resolve(AddressingMode::AbsoluteY, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x0001));
        assert!(r.page_crossed);
    }

    #[test]
    fn indexed_indirect_pointer_wraps_in_zero_page() {
        // ($FE,X) with X=1 -> pointer at $FF, high byte from $00.
        let (mut cpu, mut ram) = at(0x0400, &[0xFE]);
        cpu.x = 0x01;
        ram.write(0x00FF, 0x34);
        ram.write(0x0000, 0x12);
        ram.write(0x0100, 0x99);
        let r = resolve(AddressingMode::IndexedIndirect, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x1234));
    }

    #[test]
    fn indirect_indexed_pointer_wraps_and_reports_cross() {
        let (mut cpu, mut ram) = at(0x0400, &[0xFF]);
        cpu.y = 0x01;
        ram.write(0x00FF, 0xFF);
        ram.write(0x0000, 0x12);
        ram.write(0x0100, 0x99);
        let r = resolve(AddressingMode::IndirectIndexed, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x1300));
        assert!(r.page_crossed);
    }

    #[test]
    fn indirect_jmp_bug() {
        let (mut cpu, mut ram) = at(0x0400, &[0xFF, 0x10]);
        ram.write(0x10FF, 0x34);
        ram.write(0x1000, 0x12);
        ram.write(0x1100, 0x56);
        let r = resolve(AddressingMode::Indirect, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Memory(0x1234));
    }

    #[test]
    fn relative_targets_from_next_instruction() {
        let (mut cpu, mut ram) = at(0x0400, &[0xFE]);
        let r = resolve(AddressingMode::Relative, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Branch(0x03FF));
        assert!(r.page_crossed);

        let (mut cpu, mut ram) = at(0x0410, &[0x05]);
        let r = resolve(AddressingMode::Relative, &mut cpu, &mut ram);
        assert_eq!(r.operand, Operand::Branch(0x0416));
        assert!(!r.page_crossed);
    }
}
