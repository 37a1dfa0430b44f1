/*!
logical.rs - AND / ORA / EOR / BIT.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(super) fn and<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::and(cpu, v);
}

pub(super) fn ora<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ora(cpu, v);
}

pub(super) fn eor<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::eor(cpu, v);
}

pub(super) fn bit<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::bit(cpu, v);
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::status::Status;
    use crate::test_utils::{setup, step};

    #[test]
    fn and_ora_eor_chain() {
        // LDA #$F0 ; AND #$3C ; ORA #$01 ; EOR #$FF
        let (mut cpu, mut bus) = setup(&[0xA9, 0xF0, 0x29, 0x3C, 0x09, 0x01, 0x49, 0xFF]);
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a(), 0x30);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a(), 0x31);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a(), 0xCE);
        assert!(cpu.status().contains(Status::NEGATIVE));
    }

    #[test]
    fn bit_copies_memory_bits_and_tests_mask() {
        // LDA #$01 ; BIT $40
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0x24, 0x40]);
        bus.write(0x40, 0xC0);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 3);
        let p = cpu.status();
        assert!(p.contains(Status::ZERO));
        assert!(p.contains(Status::NEGATIVE));
        assert!(p.contains(Status::OVERFLOW));
        assert_eq!(cpu.a(), 0x01);
    }
}
