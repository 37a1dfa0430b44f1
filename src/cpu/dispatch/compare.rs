/*!
compare.rs - CMP / CPX / CPY.

C = register >= operand, Z and N from the 8-bit difference.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{compare, read_operand};
use crate::cpu::regs::CpuRegs;

pub(super) fn cmp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let reg = cpu.a();
    compare(cpu, reg, v);
}

pub(super) fn cpx<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let reg = cpu.x();
    compare(cpu, reg, v);
}

pub(super) fn cpy<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let reg = cpu.y();
    compare(cpu, reg, v);
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::{setup, step};

    fn flags_after(prg: &[u8]) -> Status {
        let (mut cpu, mut bus) = setup(prg);
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        cpu.status()
    }

    #[test]
    fn cmp_equal_greater_less() {
        let eq = flags_after(&[0xA9, 0x40, 0xC9, 0x40]);
        assert!(eq.contains(Status::ZERO | Status::CARRY));

        let gt = flags_after(&[0xA9, 0x41, 0xC9, 0x40]);
        assert!(gt.contains(Status::CARRY));
        assert!(!gt.contains(Status::ZERO));

        let lt = flags_after(&[0xA9, 0x00, 0xC9, 0x01]);
        assert!(!lt.contains(Status::CARRY));
        assert!(lt.contains(Status::NEGATIVE));
    }

    #[test]
    fn cpx_and_cpy() {
        let x = flags_after(&[0xA2, 0x10, 0xE0, 0x10]);
        assert!(x.contains(Status::ZERO | Status::CARRY));
        let y = flags_after(&[0xA0, 0x05, 0xC0, 0x06]);
        assert!(!y.contains(Status::CARRY));
        assert!(y.contains(Status::NEGATIVE));
    }
}
