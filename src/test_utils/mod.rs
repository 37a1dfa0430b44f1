//! Shared test utilities: a flat RAM bus with vectors and a program loaded.
//!
//! Layout used across the CPU tests:
//! - program at `PROGRAM_START` ($8000), reset vector pointing at it
//! - NMI handler vector -> `NMI_HANDLER` ($9000)
//! - IRQ/BRK handler vector -> `IRQ_HANDLER` ($9100)
//!
//! Handlers are left as zero bytes (BRK) unless a test loads something there.

#![allow(dead_code)]

use crate::bus::Ram;
use crate::cpu::core::Cpu;
use crate::cpu::interrupt::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

pub const PROGRAM_START: u16 = 0x8000;
pub const NMI_HANDLER: u16 = 0x9000;
pub const IRQ_HANDLER: u16 = 0x9100;

/// RAM with the three vectors installed and `prg` at `PROGRAM_START`.
pub fn ram_with_program(prg: &[u8]) -> Ram {
    let mut ram = Ram::new();
    ram.load(PROGRAM_START, prg);
    ram.write_word(RESET_VECTOR, PROGRAM_START);
    ram.write_word(NMI_VECTOR, NMI_HANDLER);
    ram.write_word(IRQ_VECTOR, IRQ_HANDLER);
    ram
}

/// CPU already through its reset sequence, PC at `PROGRAM_START`.
pub fn setup(prg: &[u8]) -> (Cpu, Ram) {
    let mut bus = ram_with_program(prg);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    (cpu, bus)
}

/// Step once and unwrap the cycle count.
pub fn step(cpu: &mut Cpu, bus: &mut Ram) -> u32 {
    cpu.step(bus).expect("unexpected CPU jam")
}
