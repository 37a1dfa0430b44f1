/*!
table.rs - Fixed 256-entry opcode table.

Purpose
=======
Maps every opcode byte to an immutable `Instruction` descriptor: the
mnemonic selecting the executor branch, the addressing mode handed to the
resolver, and the base cycle count before page-cross / branch penalties.

Design
------
- `INSTRUCTIONS` is a `const` array built at compile time; `decode` is a
  plain index, so lookup is pure and can never fail.
- Undocumented opcodes are first-class entries. Their mnemonics follow the
  common NESdev naming (SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC, ANC, ALR,
  ARR, XAA, AXS, AHX, SHY, SHX, TAS, LAS).
- The twelve JAM opcodes decode to `Mnemonic::Kil` with zero cycles; the
  dispatcher turns that into a fatal-halt outcome instead of executing.
*/

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cpu::addressing::AddressingMode;

/// Operation identity. Closed set so the dispatcher match stays exhaustive.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mnemonic {
    // Documented
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Undocumented
    Ahx, Alr, Anc, Arr, Axs, Dcp, Isc, Kil, Las, Lax, Rla, Rra, Sax,
    Shx, Shy, Slo, Sre, Tas, Xaa,
}

impl Mnemonic {
    /// Upper-case assembler name.
    #[rustfmt::skip]
    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA", Ahx => "AHX", Alr => "ALR", Anc => "ANC", Arr => "ARR",
            Axs => "AXS", Dcp => "DCP", Isc => "ISC", Kil => "KIL", Las => "LAS",
            Lax => "LAX", Rla => "RLA", Rra => "RRA", Sax => "SAX", Shx => "SHX",
            Shy => "SHY", Slo => "SLO", Sre => "SRE", Tas => "TAS", Xaa => "XAA",
        }
    }

    /// True for mnemonics that only exist as undocumented opcodes.
    pub fn is_undocumented(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            Ahx | Alr | Anc | Arr | Axs | Dcp | Isc | Kil | Las | Lax | Rla | Rra | Sax | Shx
                | Shy | Slo | Sre | Tas | Xaa
        )
    }

    /// Conditional relative branches.
    pub fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bpl | Bmi | Bvc | Bvs | Bcc | Bcs | Bne | Beq)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-opcode descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Cycles before page-cross / branch penalties. Zero for KIL.
    pub cycles: u8,
}

impl Instruction {
    /// Documented opcode? Duplicate NOPs and `$EB` SBC are not.
    pub fn is_official(&self) -> bool {
        match self.mnemonic {
            Mnemonic::Nop => self.opcode == 0xEA,
            Mnemonic::Sbc => self.opcode != 0xEB,
            m => !m.is_undocumented(),
        }
    }

    /// Opcode locks the CPU when executed.
    #[inline]
    pub fn is_jam(&self) -> bool {
        self.mnemonic == Mnemonic::Kil
    }

    /// Total encoded length: opcode plus operand bytes.
    #[inline]
    pub fn byte_len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Look up the descriptor for an opcode byte.
#[inline]
pub fn decode(opcode: u8) -> &'static Instruction {
    &INSTRUCTIONS[opcode as usize]
}

const fn op(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Instruction {
    Instruction {
        opcode,
        mnemonic,
        mode,
        cycles,
    }
}

const IMP: AddressingMode = AddressingMode::Implied;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const IZX: AddressingMode = AddressingMode::IndexedIndirect;
const IZY: AddressingMode = AddressingMode::IndirectIndexed;
const REL: AddressingMode = AddressingMode::Relative;

use Mnemonic::*;

/// Opcode table indexed by opcode byte.
#[rustfmt::skip]
pub static INSTRUCTIONS: [Instruction; 256] = [
    op(0x00, Brk, IMP, 7),
    op(0x01, Ora, IZX, 6),
    op(0x02, Kil, IMP, 0),
    op(0x03, Slo, IZX, 8),
    op(0x04, Nop, ZP, 3),
    op(0x05, Ora, ZP, 3),
    op(0x06, Asl, ZP, 5),
    op(0x07, Slo, ZP, 5),
    op(0x08, Php, IMP, 3),
    op(0x09, Ora, IMM, 2),
    op(0x0A, Asl, ACC, 2),
    op(0x0B, Anc, IMM, 2),
    op(0x0C, Nop, ABS, 4),
    op(0x0D, Ora, ABS, 4),
    op(0x0E, Asl, ABS, 6),
    op(0x0F, Slo, ABS, 6),
    op(0x10, Bpl, REL, 2),
    op(0x11, Ora, IZY, 5),
    op(0x12, Kil, IMP, 0),
    op(0x13, Slo, IZY, 8),
    op(0x14, Nop, ZPX, 4),
    op(0x15, Ora, ZPX, 4),
    op(0x16, Asl, ZPX, 6),
    op(0x17, Slo, ZPX, 6),
    op(0x18, Clc, IMP, 2),
    op(0x19, Ora, ABY, 4),
    op(0x1A, Nop, IMP, 2),
    op(0x1B, Slo, ABY, 7),
    op(0x1C, Nop, ABX, 4),
    op(0x1D, Ora, ABX, 4),
    op(0x1E, Asl, ABX, 7),
    op(0x1F, Slo, ABX, 7),
    op(0x20, Jsr, ABS, 6),
    op(0x21, And, IZX, 6),
    op(0x22, Kil, IMP, 0),
    op(0x23, Rla, IZX, 8),
    op(0x24, Bit, ZP, 3),
    op(0x25, And, ZP, 3),
    op(0x26, Rol, ZP, 5),
    op(0x27, Rla, ZP, 5),
    op(0x28, Plp, IMP, 4),
    op(0x29, And, IMM, 2),
    op(0x2A, Rol, ACC, 2),
    op(0x2B, Anc, IMM, 2),
    op(0x2C, Bit, ABS, 4),
    op(0x2D, And, ABS, 4),
    op(0x2E, Rol, ABS, 6),
    op(0x2F, Rla, ABS, 6),
    op(0x30, Bmi, REL, 2),
    op(0x31, And, IZY, 5),
    op(0x32, Kil, IMP, 0),
    op(0x33, Rla, IZY, 8),
    op(0x34, Nop, ZPX, 4),
    op(0x35, And, ZPX, 4),
    op(0x36, Rol, ZPX, 6),
    op(0x37, Rla, ZPX, 6),
    op(0x38, Sec, IMP, 2),
    op(0x39, And, ABY, 4),
    op(0x3A, Nop, IMP, 2),
    op(0x3B, Rla, ABY, 7),
    op(0x3C, Nop, ABX, 4),
    op(0x3D, And, ABX, 4),
    op(0x3E, Rol, ABX, 7),
    op(0x3F, Rla, ABX, 7),
    op(0x40, Rti, IMP, 6),
    op(0x41, Eor, IZX, 6),
    op(0x42, Kil, IMP, 0),
    op(0x43, Sre, IZX, 8),
    op(0x44, Nop, ZP, 3),
    op(0x45, Eor, ZP, 3),
    op(0x46, Lsr, ZP, 5),
    op(0x47, Sre, ZP, 5),
    op(0x48, Pha, IMP, 3),
    op(0x49, Eor, IMM, 2),
    op(0x4A, Lsr, ACC, 2),
    op(0x4B, Alr, IMM, 2),
    op(0x4C, Jmp, ABS, 3),
    op(0x4D, Eor, ABS, 4),
    op(0x4E, Lsr, ABS, 6),
    op(0x4F, Sre, ABS, 6),
    op(0x50, Bvc, REL, 2),
    op(0x51, Eor, IZY, 5),
    op(0x52, Kil, IMP, 0),
    op(0x53, Sre, IZY, 8),
    op(0x54, Nop, ZPX, 4),
    op(0x55, Eor, ZPX, 4),
    op(0x56, Lsr, ZPX, 6),
    op(0x57, Sre, ZPX, 6),
    op(0x58, Cli, IMP, 2),
    op(0x59, Eor, ABY, 4),
    op(0x5A, Nop, IMP, 2),
    op(0x5B, Sre, ABY, 7),
    op(0x5C, Nop, ABX, 4),
    op(0x5D, Eor, ABX, 4),
    op(0x5E, Lsr, ABX, 7),
    op(0x5F, Sre, ABX, 7),
    op(0x60, Rts, IMP, 6),
    op(0x61, Adc, IZX, 6),
    op(0x62, Kil, IMP, 0),
    op(0x63, Rra, IZX, 8),
    op(0x64, Nop, ZP, 3),
    op(0x65, Adc, ZP, 3),
    op(0x66, Ror, ZP, 5),
    op(0x67, Rra, ZP, 5),
    op(0x68, Pla, IMP, 4),
    op(0x69, Adc, IMM, 2),
    op(0x6A, Ror, ACC, 2),
    op(0x6B, Arr, IMM, 2),
    op(0x6C, Jmp, IND, 5),
    op(0x6D, Adc, ABS, 4),
    op(0x6E, Ror, ABS, 6),
    op(0x6F, Rra, ABS, 6),
    op(0x70, Bvs, REL, 2),
    op(0x71, Adc, IZY, 5),
    op(0x72, Kil, IMP, 0),
    op(0x73, Rra, IZY, 8),
    op(0x74, Nop, ZPX, 4),
    op(0x75, Adc, ZPX, 4),
    op(0x76, Ror, ZPX, 6),
    op(0x77, Rra, ZPX, 6),
    op(0x78, Sei, IMP, 2),
    op(0x79, Adc, ABY, 4),
    op(0x7A, Nop, IMP, 2),
    op(0x7B, Rra, ABY, 7),
    op(0x7C, Nop, ABX, 4),
    op(0x7D, Adc, ABX, 4),
    op(0x7E, Ror, ABX, 7),
    op(0x7F, Rra, ABX, 7),
    op(0x80, Nop, IMM, 2),
    op(0x81, Sta, IZX, 6),
    op(0x82, Nop, IMM, 2),
    op(0x83, Sax, IZX, 6),
    op(0x84, Sty, ZP, 3),
    op(0x85, Sta, ZP, 3),
    op(0x86, Stx, ZP, 3),
    op(0x87, Sax, ZP, 3),
    op(0x88, Dey, IMP, 2),
    op(0x89, Nop, IMM, 2),
    op(0x8A, Txa, IMP, 2),
    op(0x8B, Xaa, IMM, 2),
    op(0x8C, Sty, ABS, 4),
    op(0x8D, Sta, ABS, 4),
    op(0x8E, Stx, ABS, 4),
    op(0x8F, Sax, ABS, 4),
    op(0x90, Bcc, REL, 2),
    op(0x91, Sta, IZY, 6),
    op(0x92, Kil, IMP, 0),
    op(0x93, Ahx, IZY, 6),
    op(0x94, Sty, ZPX, 4),
    op(0x95, Sta, ZPX, 4),
    op(0x96, Stx, ZPY, 4),
    op(0x97, Sax, ZPY, 4),
    op(0x98, Tya, IMP, 2),
    op(0x99, Sta, ABY, 5),
    op(0x9A, Txs, IMP, 2),
    op(0x9B, Tas, ABY, 5),
    op(0x9C, Shy, ABX, 5),
    op(0x9D, Sta, ABX, 5),
    op(0x9E, Shx, ABY, 5),
    op(0x9F, Ahx, ABY, 5),
    op(0xA0, Ldy, IMM, 2),
    op(0xA1, Lda, IZX, 6),
    op(0xA2, Ldx, IMM, 2),
    op(0xA3, Lax, IZX, 6),
    op(0xA4, Ldy, ZP, 3),
    op(0xA5, Lda, ZP, 3),
    op(0xA6, Ldx, ZP, 3),
    op(0xA7, Lax, ZP, 3),
    op(0xA8, Tay, IMP, 2),
    op(0xA9, Lda, IMM, 2),
    op(0xAA, Tax, IMP, 2),
    op(0xAB, Lax, IMM, 2),
    op(0xAC, Ldy, ABS, 4),
    op(0xAD, Lda, ABS, 4),
    op(0xAE, Ldx, ABS, 4),
    op(0xAF, Lax, ABS, 4),
    op(0xB0, Bcs, REL, 2),
    op(0xB1, Lda, IZY, 5),
    op(0xB2, Kil, IMP, 0),
    op(0xB3, Lax, IZY, 5),
    op(0xB4, Ldy, ZPX, 4),
    op(0xB5, Lda, ZPX, 4),
    op(0xB6, Ldx, ZPY, 4),
    op(0xB7, Lax, ZPY, 4),
    op(0xB8, Clv, IMP, 2),
    op(0xB9, Lda, ABY, 4),
    op(0xBA, Tsx, IMP, 2),
    op(0xBB, Las, ABY, 4),
    op(0xBC, Ldy, ABX, 4),
    op(0xBD, Lda, ABX, 4),
    op(0xBE, Ldx, ABY, 4),
    op(0xBF, Lax, ABY, 4),
    op(0xC0, Cpy, IMM, 2),
    op(0xC1, Cmp, IZX, 6),
    op(0xC2, Nop, IMM, 2),
    op(0xC3, Dcp, IZX, 8),
    op(0xC4, Cpy, ZP, 3),
    op(0xC5, Cmp, ZP, 3),
    op(0xC6, Dec, ZP, 5),
    op(0xC7, Dcp, ZP, 5),
    op(0xC8, Iny, IMP, 2),
    op(0xC9, Cmp, IMM, 2),
    op(0xCA, Dex, IMP, 2),
    op(0xCB, Axs, IMM, 2),
    op(0xCC, Cpy, ABS, 4),
    op(0xCD, Cmp, ABS, 4),
    op(0xCE, Dec, ABS, 6),
    op(0xCF, Dcp, ABS, 6),
    op(0xD0, Bne, REL, 2),
    op(0xD1, Cmp, IZY, 5),
    op(0xD2, Kil, IMP, 0),
    op(0xD3, Dcp, IZY, 8),
    op(0xD4, Nop, ZPX, 4),
    op(0xD5, Cmp, ZPX, 4),
    op(0xD6, Dec, ZPX, 6),
    op(0xD7, Dcp, ZPX, 6),
    op(0xD8, Cld, IMP, 2),
    op(0xD9, Cmp, ABY, 4),
    op(0xDA, Nop, IMP, 2),
    op(0xDB, Dcp, ABY, 7),
    op(0xDC, Nop, ABX, 4),
    op(0xDD, Cmp, ABX, 4),
    op(0xDE, Dec, ABX, 7),
    op(0xDF, Dcp, ABX, 7),
    op(0xE0, Cpx, IMM, 2),
    op(0xE1, Sbc, IZX, 6),
    op(0xE2, Nop, IMM, 2),
    op(0xE3, Isc, IZX, 8),
    op(0xE4, Cpx, ZP, 3),
    op(0xE5, Sbc, ZP, 3),
    op(0xE6, Inc, ZP, 5),
    op(0xE7, Isc, ZP, 5),
    op(0xE8, Inx, IMP, 2),
    op(0xE9, Sbc, IMM, 2),
    op(0xEA, Nop, IMP, 2),
    op(0xEB, Sbc, IMM, 2),
    op(0xEC, Cpx, ABS, 4),
    op(0xED, Sbc, ABS, 4),
    op(0xEE, Inc, ABS, 6),
    op(0xEF, Isc, ABS, 6),
    op(0xF0, Beq, REL, 2),
    op(0xF1, Sbc, IZY, 5),
    op(0xF2, Kil, IMP, 0),
    op(0xF3, Isc, IZY, 8),
    op(0xF4, Nop, ZPX, 4),
    op(0xF5, Sbc, ZPX, 4),
    op(0xF6, Inc, ZPX, 6),
    op(0xF7, Isc, ZPX, 6),
    op(0xF8, Sed, IMP, 2),
    op(0xF9, Sbc, ABY, 4),
    op(0xFA, Nop, IMP, 2),
    op(0xFB, Isc, ABY, 7),
    op(0xFC, Nop, ABX, 4),
    op(0xFD, Sbc, ABX, 4),
    op(0xFE, Inc, ABX, 7),
    op(0xFF, Isc, ABX, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_opcode_decodes_to_its_own_entry() {
        for op in 0..=255u8 {
            let i = decode(op);
            assert_eq!(i.opcode, op);
            assert_eq!(i.is_jam(), i.cycles == 0, "opcode {op:02X}");
        }
    }

    #[test]
    fn jam_opcodes() {
        let jams: Vec<u8> = (0..=255u8).filter(|&op| decode(op).is_jam()).collect();
        assert_eq!(
            jams,
            vec![0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2]
        );
    }

    #[test]
    fn official_count_is_151() {
        let n = INSTRUCTIONS.iter().filter(|i| i.is_official()).count();
        assert_eq!(n, 151);
    }

    #[test]
    fn spot_check_descriptors() {
        let jmp = decode(0x4C);
        assert_eq!((jmp.mnemonic, jmp.mode, jmp.cycles), (Jmp, ABS, 3));
        let jmp_ind = decode(0x6C);
        assert_eq!((jmp_ind.mnemonic, jmp_ind.mode, jmp_ind.cycles), (Jmp, IND, 5));
        let asl_a = decode(0x0A);
        assert_eq!(asl_a.mode, ACC);
        let lax = decode(0xB3);
        assert_eq!((lax.mnemonic, lax.mode, lax.cycles), (Lax, IZY, 5));
        assert_eq!(decode(0xEB).mnemonic, Sbc);
        assert!(!decode(0xEB).is_official());
        assert_eq!(decode(0x20).byte_len(), 3);
        assert_eq!(decode(0xD0).byte_len(), 2);
        assert_eq!(decode(0xEA).byte_len(), 1);
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(Mnemonic::Isc.to_string(), "ISC");
        assert_eq!(format!("{}", decode(0xA9).mnemonic), "LDA");
    }
}
