/*!
regs.rs - `CpuRegs` trait: register + flag surface used by the executor.

The trait deliberately excludes bus access, stack push/pull and operand
fetch; those stay explicit at call sites via `&mut impl Bus` so handlers
never hold overlapping borrows. Execution helpers are generic over
`CpuRegs` (static dispatch) and `CpuState` is the canonical implementor.
*/

use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

/// Minimal architectural register and flag API needed by instruction
/// semantic and dispatch code.
pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> Status;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: Status);

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        let pc = self.pc().wrapping_add(delta);
        self.set_pc(pc);
    }

    #[inline]
    fn flag(&self, f: Status) -> bool {
        self.status().contains(f)
    }

    #[inline]
    fn assign_flag(&mut self, f: Status, on: bool) {
        let mut p = self.status();
        p.set(f, on);
        self.set_status(p);
    }

    /// Overwrite every register from a snapshot. P goes through
    /// `set_status`, so U/B normalization still applies.
    fn load_from(&mut self, regs: CpuState) {
        self.set_a(regs.a);
        self.set_x(regs.x);
        self.set_y(regs.y);
        self.set_sp(regs.sp);
        self.set_pc(regs.pc);
        self.set_status(regs.status);
    }

    /// ZERO and NEGATIVE from a result byte.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        let mut p = self.status();
        p.set_zn(result);
        self.set_status(p);
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> Status {
        self.status
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: Status) {
        // BREAK has no latch in the live register.
        self.status = (v | Status::UNUSED) - Status::BREAK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.set_pc(0xFFFF);
        s.advance_pc(1);
        assert_eq!(s.pc(), 0x0000);
        s.advance_pc(2);
        assert_eq!(s.pc(), 0x0002);
    }

    #[test]
    fn assign_flag_toggles_single_bit() {
        let mut s = CpuState::new();
        let before = s.status();
        s.assign_flag(Status::DECIMAL, true);
        assert!(s.flag(Status::DECIMAL));
        assert_eq!(s.status() - Status::DECIMAL, before);
        s.assign_flag(Status::DECIMAL, false);
        assert_eq!(s.status(), before);
    }

    #[test]
    fn load_from_copies_registers_and_normalizes_status() {
        let mut s = CpuState::new();
        s.load_from(CpuState {
            a: 1,
            x: 2,
            y: 3,
            sp: 0x44,
            pc: 0xBEEF,
            status: Status::BREAK | Status::ZERO,
        });
        assert_eq!((s.a, s.x, s.y, s.sp, s.pc), (1, 2, 3, 0x44, 0xBEEF));
        assert_eq!(s.status, Status::ZERO | Status::UNUSED);
    }

    #[test]
    fn set_status_never_latches_break() {
        let mut s = CpuState::new();
        s.set_status(Status::from_bits_retain(0x10));
        assert!(!s.flag(Status::BREAK));
        assert!(s.flag(Status::UNUSED));
    }
}
