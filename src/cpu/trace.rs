/*!
trace.rs - Disassembler and nestest-style trace lines.

Trace line layout (columns match the nestest reference log, minus PPU):

```text
C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD CYC:7
```

Unofficial opcodes are marked with `*` immediately before the mnemonic.
*/

use std::fmt::Write as _;

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::state::CpuState;
use crate::cpu::table::decode;

fn operand_text(mode: AddressingMode, lo: u8, hi: u8, pc: u16) -> String {
    let word = u16::from_le_bytes([lo, hi]);
    match mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${lo:02X}"),
        AddressingMode::ZeroPage => format!("${lo:02X}"),
        AddressingMode::ZeroPageX => format!("${lo:02X},X"),
        AddressingMode::ZeroPageY => format!("${lo:02X},Y"),
        AddressingMode::Absolute => format!("${word:04X}"),
        AddressingMode::AbsoluteX => format!("${word:04X},X"),
        AddressingMode::AbsoluteY => format!("${word:04X},Y"),
        AddressingMode::Indirect => format!("(${word:04X})"),
        AddressingMode::IndexedIndirect => format!("(${lo:02X},X)"),
        AddressingMode::IndirectIndexed => format!("(${lo:02X}),Y"),
        AddressingMode::Relative => {
            let target = pc.wrapping_add(2).wrapping_add(lo as i8 as i16 as u16);
            format!("${target:04X}")
        }
    }
}

/// Disassemble one instruction located at `pc`. Missing operand bytes read
/// as zero. Unofficial opcodes get a leading `*`.
pub fn disassemble(opcode: u8, operand: &[u8], pc: u16) -> String {
    let instr = decode(opcode);
    let lo = operand.first().copied().unwrap_or(0);
    let hi = operand.get(1).copied().unwrap_or(0);
    let marker = if instr.is_official() { "" } else { "*" };
    let text = operand_text(instr.mode, lo, hi, pc);
    if text.is_empty() {
        format!("{marker}{}", instr.mnemonic)
    } else {
        format!("{marker}{} {text}", instr.mnemonic)
    }
}

/// Render the trace line for the instruction at `state.pc`.
pub(crate) fn trace_line<B: Bus>(state: &CpuState, bus: &mut B, cycles: u64) -> String {
    let pc = state.pc;
    let opcode = bus.read(pc);
    let instr = decode(opcode);

    let mut raw = vec![opcode];
    for i in 1..instr.byte_len() {
        raw.push(bus.read(pc.wrapping_add(i)));
    }
    let mut bytes = String::new();
    for (i, b) in raw.iter().enumerate() {
        if i > 0 {
            bytes.push(' ');
        }
        let _ = write!(bytes, "{b:02X}");
    }

    let text = disassemble(opcode, &raw[1..], pc);
    // The `*` marker eats the last separator space.
    let (sep, text) = match text.strip_prefix('*') {
        Some(rest) => ("*", rest.to_string()),
        None => (" ", text),
    };

    format!(
        "{pc:04X}  {bytes:<9}{sep}{text:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{cycles}",
        state.a,
        state.x,
        state.y,
        state.status.bits(),
        state.sp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Ram;

    #[test]
    fn disassembles_every_mode() {
        assert_eq!(disassemble(0x18, &[], 0), "CLC");
        assert_eq!(disassemble(0x0A, &[], 0), "ASL A");
        assert_eq!(disassemble(0xA9, &[0x10], 0), "LDA #$10");
        assert_eq!(disassemble(0xA5, &[0x10], 0), "LDA $10");
        assert_eq!(disassemble(0xB5, &[0x10], 0), "LDA $10,X");
        assert_eq!(disassemble(0xB6, &[0x10], 0), "LDX $10,Y");
        assert_eq!(disassemble(0xAD, &[0x34, 0x12], 0), "LDA $1234");
        assert_eq!(disassemble(0xBD, &[0x34, 0x12], 0), "LDA $1234,X");
        assert_eq!(disassemble(0xB9, &[0x34, 0x12], 0), "LDA $1234,Y");
        assert_eq!(disassemble(0x6C, &[0x34, 0x12], 0), "JMP ($1234)");
        assert_eq!(disassemble(0xA1, &[0x10], 0), "LDA ($10,X)");
        assert_eq!(disassemble(0xB1, &[0x10], 0), "LDA ($10),Y");
        assert_eq!(disassemble(0xD0, &[0xFE], 0xC000), "BNE $C000");
    }

    #[test]
    fn unofficial_marker() {
        assert_eq!(disassemble(0x04, &[0xA9], 0), "*NOP $A9");
        assert_eq!(disassemble(0xEB, &[0x01], 0), "*SBC #$01");
        assert_eq!(disassemble(0xEA, &[], 0), "NOP");
    }

    #[test]
    fn trace_line_marks_unofficial_in_separator_column() {
        let mut ram = Ram::new();
        ram.load(0xC6BD, &[0x04, 0xA9]);
        let state = CpuState { pc: 0xC6BD, ..CpuState::default() };
        let line = trace_line(&state, &mut ram, 14);
        assert!(line.starts_with("C6BD  04 A9    *NOP $A9"), "{line}");
        assert!(line.ends_with("A:00 X:00 Y:00 P:24 SP:FD CYC:14"), "{line}");
        assert_eq!(line.find("A:"), Some(48));
    }
}
