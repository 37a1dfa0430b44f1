#![doc = r#"
NES 2A03 CPU core: an instruction-stepped MOS 6502 without decimal mode.

Modules:
- bus: `Bus` trait the CPU reads and writes through, plus a flat 64 KiB `Ram`
- cpu: status register, register file, opcode table, addressing, executor,
  interrupt controller, tracing and the `Cpu` facade
- error: `CpuError` (jams)

In tests, shared program/vector builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;
pub mod error;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, Ram};
pub use cpu::{
    AddressingMode, ControllerState, Cpu, CpuState, Instruction, Interrupt, Mnemonic, Status,
};
pub use error::CpuError;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
