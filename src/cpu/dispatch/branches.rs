/*!
branches.rs - Conditional relative branches (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ).

The resolver has already computed the target from the post-operand PC; a
taken branch just installs it. Timing (+1 taken, +1 more on page cross)
is applied by the caller from the returned flag.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::regs::CpuRegs;

/// Jump to the branch target when `take` holds. Returns whether it did.
pub(super) fn branch<C: CpuRegs>(cpu: &mut C, operand: Operand, take: bool) -> bool {
    if let (true, Operand::Branch(target)) = (take, operand) {
        cpu.set_pc(target);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{setup, step, PROGRAM_START};

    #[test]
    fn not_taken_is_two_cycles() {
        // LDA #$01 ; BEQ +4
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0xF0, 0x04]);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + 4);
    }

    #[test]
    fn taken_same_page_is_three_cycles() {
        // LDA #$01 ; BNE +4
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0xD0, 0x04]);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 3);
        assert_eq!(cpu.pc(), PROGRAM_START + 8);
    }

    #[test]
    fn taken_backwards_across_page_is_four_cycles() {
        // At $8000: BCC -3 -> $7FFF
        let (mut cpu, mut bus) = setup(&[0x90, 0xFD]);
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.pc(), 0x7FFF);
    }

    #[test]
    fn each_condition_follows_its_flag() {
        // SEC ; BCS +0 ; CLV ; BVS +0 (not taken) ; BPL +0 (taken)
        let (mut cpu, mut bus) = setup(&[0x38, 0xB0, 0x00, 0xB8, 0x70, 0x00, 0x10, 0x00]);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 3);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(step(&mut cpu, &mut bus), 3);
    }
}
