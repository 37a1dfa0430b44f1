/*!
cycles.rs - Cycle accounting for the instruction-stepped 6502 core.

Base cycle counts live in the opcode table. This module owns the dynamic
part of the timing:
  - +1 when a read-type instruction's indexed address crosses a page
    (absolute,X / absolute,Y / (indirect),Y). Stores and read-modify-write
    forms already include that cycle in their base count and never pay it.
  - +1 when a branch is taken, +1 more when the taken target lies on a
    different page than the following instruction.
  - A fixed 7 cycles for every interrupt entry (reset, NMI, IRQ).
*/

use crate::cpu::table::{Instruction, Mnemonic};

/// Cycles consumed by an interrupt or reset sequence.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Instructions whose indexed reads take an extra cycle on a page crossing.
pub(crate) fn pays_page_penalty(m: Mnemonic) -> bool {
    use Mnemonic::*;
    matches!(
        m,
        Lda | Ldx | Ldy | Eor | And | Ora | Adc | Sbc | Cmp | Lax | Las | Nop
    )
}

/// Extra cycles for a conditional branch.
#[inline]
pub(crate) fn branch_penalty(taken: bool, crossed: bool) -> u32 {
    match (taken, crossed) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}

/// Total cycles for one executed instruction.
pub(crate) fn instruction_cycles(instr: &Instruction, page_crossed: bool, branch_taken: bool) -> u32 {
    let base = instr.cycles as u32;
    if instr.mnemonic.is_branch() {
        return base + branch_penalty(branch_taken, page_crossed);
    }
    if page_crossed && pays_page_penalty(instr.mnemonic) {
        base + 1
    } else {
        base
    }
}
