/*!
arithmetic.rs - ADC / SBC (binary mode only).

The 2A03 has no BCD unit: D can be set and cleared but never changes the
arithmetic.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(super) fn adc<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::adc(cpu, v);
}

pub(super) fn sbc<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::sbc(cpu, v);
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::{setup, step};

    #[test]
    fn adc_signed_overflow() {
        // LDA #$50 ; ADC #$50
        let (mut cpu, mut bus) = setup(&[0xA9, 0x50, 0x69, 0x50]);
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        let p = cpu.status();
        assert_eq!(cpu.a(), 0xA0);
        assert!(p.contains(Status::OVERFLOW));
        assert!(p.contains(Status::NEGATIVE));
        assert!(!p.contains(Status::CARRY));
        assert!(!p.contains(Status::ZERO));
    }

    #[test]
    fn decimal_flag_is_ignored() {
        // SED ; LDA #$09 ; CLC ; ADC #$01
        let (mut cpu, mut bus) = setup(&[0xF8, 0xA9, 0x09, 0x18, 0x69, 0x01]);
        for _ in 0..4 {
            step(&mut cpu, &mut bus);
        }
        assert_eq!(cpu.a(), 0x0A);
        assert!(cpu.status().contains(Status::DECIMAL));
    }

    #[test]
    fn sbc_borrow_clears_carry() {
        // SEC ; LDA #$00 ; SBC #$01
        let (mut cpu, mut bus) = setup(&[0x38, 0xA9, 0x00, 0xE9, 0x01]);
        for _ in 0..3 {
            step(&mut cpu, &mut bus);
        }
        assert_eq!(cpu.a(), 0xFF);
        assert!(!cpu.status().contains(Status::CARRY));
        assert!(cpu.status().contains(Status::NEGATIVE));
    }

    #[test]
    fn unofficial_sbc_eb_matches_e9() {
        // SEC ; LDA #$10 ; SBC #$05 (0xEB)
        let (mut cpu, mut bus) = setup(&[0x38, 0xA9, 0x10, 0xEB, 0x05]);
        for _ in 0..3 {
            step(&mut cpu, &mut bus);
        }
        assert_eq!(cpu.a(), 0x0B);
        assert!(cpu.status().contains(Status::CARRY));
    }
}
