/*!
cpu::mod - Public façade for the NES 2A03 (6502) CPU core.

Layout:

```text
    status.rs      - Processor status register (bitflags).
    state.rs       - Register file (`CpuState`) + power-up defaults.
    regs.rs        - `CpuRegs` trait: register surface used by the executor.
    table.rs       - 256-entry opcode table (mnemonic, mode, base cycles).
    addressing.rs  - Addressing modes and operand resolution.
    cycles.rs      - Page-cross / branch timing adjustments.
    execute.rs     - Shared semantic helpers (ALU, stack, RMW operand access).
    dispatch/      - Per-step orchestrator + instruction family handlers.
    interrupt.rs   - Reset / NMI / IRQ latches and entry sequences.
    trace.rs       - Disassembler and nestest-style trace lines.
    core/          - The `Cpu` facade.
```

The public surface is the `Cpu` facade; the internal split may change.

Usage:
```rust
use arness_cpu::{Cpu, Ram};

let mut bus = Ram::new();
bus.load(0x8000, &[0xA9, 0x42]); // LDA #$42
bus.write_word(0xFFFC, 0x8000);

let mut cpu = Cpu::new();
cpu.reset(&mut bus);
assert_eq!(cpu.step(&mut bus), Ok(2));
assert_eq!(cpu.a(), 0x42);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod interrupt;
pub mod regs;
pub mod state;
pub mod status;
pub mod table;
pub mod trace;

pub use addressing::AddressingMode;
pub use self::core::Cpu;
pub use interrupt::{ControllerState, Interrupt, InterruptController};
pub use state::CpuState;
pub use status::Status;
pub use table::{decode, Instruction, Mnemonic, INSTRUCTIONS};
pub use trace::disassemble;
