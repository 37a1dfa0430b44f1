/*!
load_store.rs - LDA/LDX/LDY and STA/STX/STY.

Loads set Z and N from the loaded value; stores touch no flags.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{read_operand, write_operand};
use crate::cpu::regs::CpuRegs;

pub(super) fn lda<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    cpu.set_a(v);
    cpu.update_zn(v);
}

pub(super) fn ldx<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    cpu.set_x(v);
    cpu.update_zn(v);
}

pub(super) fn ldy<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    cpu.set_y(v);
    cpu.update_zn(v);
}

pub(super) fn sta<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.a();
    write_operand(cpu, bus, operand, v);
}

pub(super) fn stx<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.x();
    write_operand(cpu, bus, operand, v);
}

pub(super) fn sty<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.y();
    write_operand(cpu, bus, operand, v);
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::status::Status;
    use crate::test_utils::{setup, step};

    #[test]
    fn lda_immediate_sets_zero_and_negative() {
        // LDA #$00 ; LDA #$80
        let (mut cpu, mut bus) = setup(&[0xA9, 0x00, 0xA9, 0x80]);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert!(cpu.status().contains(Status::ZERO));
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.status().contains(Status::NEGATIVE));
        assert!(!cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn ldx_zero_page_y_wraps_within_page() {
        // LDY #$10 ; LDX $F8,Y -> reads $0008
        let (mut cpu, mut bus) = setup(&[0xA0, 0x10, 0xB6, 0xF8]);
        bus.write(0x0008, 0x5A);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.x(), 0x5A);
    }

    #[test]
    fn lda_absolute_x_page_cross_costs_extra_cycle() {
        // LDX #$01 ; LDA $02FF,X
        let (mut cpu, mut bus) = setup(&[0xA2, 0x01, 0xBD, 0xFF, 0x02]);
        bus.write(0x0300, 0x42);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 5);
        assert_eq!(cpu.a(), 0x42);
    }

    #[test]
    fn stores_leave_flags_alone() {
        // LDA #$00 ; LDX #$7F ; LDY #$80 ; STA $10 ; STX $11 ; STY $12
        let prg = [0xA9, 0x00, 0xA2, 0x7F, 0xA0, 0x80, 0x85, 0x10, 0x86, 0x11, 0x84, 0x12];
        let (mut cpu, mut bus) = setup(&prg);
        for _ in 0..3 {
            step(&mut cpu, &mut bus);
        }
        let before = cpu.status();
        for _ in 0..3 {
            assert_eq!(step(&mut cpu, &mut bus), 3);
        }
        assert_eq!(cpu.status(), before);
        assert_eq!(bus.peek(0x10), 0x00);
        assert_eq!(bus.peek(0x11), 0x7F);
        assert_eq!(bus.peek(0x12), 0x80);
    }

    #[test]
    fn sta_indirect_indexed_uses_zero_page_pointer() {
        // LDA #$77 ; LDY #$04 ; STA ($20),Y  with ($20) = $0400
        let (mut cpu, mut bus) = setup(&[0xA9, 0x77, 0xA0, 0x04, 0x91, 0x20]);
        bus.write(0x20, 0x00);
        bus.write(0x21, 0x04);
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 6);
        assert_eq!(bus.peek(0x0404), 0x77);
    }
}
