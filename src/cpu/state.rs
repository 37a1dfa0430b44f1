/*!
state.rs - Architectural register file of the 6502 core.

Overview
========
`CpuState` is the single owner of every architecturally visible register.
It excludes:
  - Bus / memory logic
  - Instruction decode / dispatch
  - Interrupt latches and cycle accounting (owned by the `Cpu` facade)

The struct is `Copy`, so a debugger or test harness can snapshot and
restore it wholesale (`Cpu::registers` / `Cpu::load_registers`). With the
`serde` feature it also serializes.

Invariants
==========
- SP is an offset into the fixed stack page `$0100-$01FF` and wraps mod 256.
- PC wraps mod 65536.
- `status` never holds BREAK; UNUSED is forced whenever a byte is pulled.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cpu::status::Status;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value after power-up / reset.
pub const RESET_SP: u8 = 0xFD;

/// 6502 register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: 0x0000,
            status: Status::default(),
        }
    }
}

impl CpuState {
    /// Power-up defaults (PC is loaded separately from the reset vector).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register file right after a reset sequence that fetched `reset_vector`.
    #[inline]
    pub fn after_reset(reset_vector: u16) -> Self {
        Self {
            pc: reset_vector,
            ..Self::default()
        }
    }
}

/// Absolute address of stack slot `sp` (always on page `$01`).
#[inline]
pub const fn stack_address(sp: u8) -> u16 {
    STACK_PAGE | sp as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!((s.a, s.x, s.y), (0, 0, 0));
        assert_eq!(s.sp, 0xFD);
        assert!(s.status.contains(Status::IRQ_DISABLE));
        assert!(s.status.contains(Status::UNUSED));
        assert!(!s.status.contains(Status::BREAK));
    }

    #[test]
    fn after_reset_is_power_up_with_vector_pc() {
        let s = CpuState::after_reset(0xC000);
        assert_eq!(s, CpuState { pc: 0xC000, ..CpuState::default() });
    }

    #[test]
    fn stack_address_stays_in_page_one() {
        assert_eq!(stack_address(0x00), 0x0100);
        assert_eq!(stack_address(0xFD), 0x01FD);
        assert_eq!(stack_address(0xFF), 0x01FF);
    }
}
