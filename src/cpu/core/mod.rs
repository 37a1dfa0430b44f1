/*!
core::Cpu - Public 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns the register file (`CpuState`), the interrupt controller, a
  jam latch and a running cycle counter.
- All instruction semantics live in `dispatch`, generic over `CpuRegs`;
  `Cpu::step` is a thin wrapper that also handles jam persistence and
  cycle accounting.
- The bus is borrowed per call (`&mut impl Bus`), never stored.

Stepping
========
Each `step` performs exactly one of:
- an interrupt entry (reset, NMI, IRQ) when one is pending and allowed, or
- one full instruction.

It returns the cycles consumed, or `CpuError::Jammed` after a KIL opcode.
A jammed CPU keeps returning the same error, without touching the bus,
until the host asserts reset.
*/

use log::warn;

use crate::bus::Bus;
use crate::cpu::dispatch;
use crate::cpu::interrupt::{service, ControllerState, Interrupt, InterruptController};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::cpu::trace;
use crate::error::CpuError;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    interrupts: InterruptController,
    jam: Option<CpuError>,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults. PC stays 0 until `reset`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the reset sequence right away (no pending-request round trip).
    /// Returns the 7 cycles it takes.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.interrupts.acknowledge(Interrupt::Reset);
        let cycles = service(Interrupt::Reset, &mut self.state, bus);
        self.interrupts.resume();
        self.jam = None;
        self.total_cycles += cycles as u64;
        cycles
    }

    /// Execute one instruction or service one interrupt.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if let Some(err) = self.jam {
            if !self.interrupts.reset_pending() {
                return Err(err);
            }
            self.jam = None;
        }
        match dispatch::step(&mut self.state, &mut self.interrupts, bus) {
            Ok(cycles) => {
                self.total_cycles += cycles as u64;
                Ok(cycles)
            }
            Err(err) => {
                warn!("{err}");
                self.jam = Some(err);
                Err(err)
            }
        }
    }

    /// Step up to `max_instructions` times. Returns the cycles consumed, or
    /// the jam that stopped execution.
    pub fn run<B: Bus>(&mut self, bus: &mut B, max_instructions: usize) -> Result<u64, CpuError> {
        let mut cycles = 0u64;
        for _ in 0..max_instructions {
            cycles += self.step(bus)? as u64;
        }
        Ok(cycles)
    }

    // ---------------------------------------------------------------------
    // Interrupt lines
    // ---------------------------------------------------------------------
    pub fn assert_nmi(&mut self) {
        self.interrupts.assert_nmi();
    }

    pub fn assert_irq(&mut self) {
        self.interrupts.assert_irq();
    }

    /// Latch a reset to be serviced at the next `step`. This is the only way
    /// out of a jam besides calling `reset` directly.
    pub fn assert_reset(&mut self) {
        self.interrupts.assert_reset();
    }

    pub fn release_irq(&mut self) {
        self.interrupts.release_irq();
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    /// What the most recent `step` did.
    pub fn interrupt_state(&self) -> ControllerState {
        self.interrupts.state()
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------
    pub fn is_jammed(&self) -> bool {
        self.jam.is_some()
    }

    /// Cycles consumed since construction, including reset sequences.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Copy of the register file.
    pub fn registers(&self) -> CpuState {
        self.state
    }

    /// Overwrite the register file. P is normalized (U set, B clear).
    pub fn load_registers(&mut self, regs: CpuState) {
        self.state.load_from(regs);
    }

    /// Trace line for the instruction at PC (reads its bytes through `bus`).
    pub fn trace_line<B: Bus>(&self, bus: &mut B) -> String {
        trace::trace_line(&self.state, bus, self.total_cycles)
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    /// U is forced on and B dropped, as with PLP.
    pub fn set_status(&mut self, v: Status) {
        CpuRegs::set_status(&mut self.state, v);
    }
}

impl From<CpuState> for Cpu {
    fn from(regs: CpuState) -> Self {
        let mut cpu = Cpu::new();
        cpu.load_registers(regs);
        cpu
    }
}
