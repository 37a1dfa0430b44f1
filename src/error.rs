//! Error type surfaced by `Cpu::step`.

use thiserror::Error;

/// Distinguished outcomes the CPU reports instead of executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// A KIL/JAM opcode locked the processor. Only a reset recovers it.
    #[error("CPU jammed by opcode ${opcode:02X} at ${pc:04X}")]
    Jammed { opcode: u8, pc: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jammed_message_names_opcode_and_address() {
        let e = CpuError::Jammed {
            opcode: 0x02,
            pc: 0x8003,
        };
        assert_eq!(e.to_string(), "CPU jammed by opcode $02 at $8003");
    }
}
