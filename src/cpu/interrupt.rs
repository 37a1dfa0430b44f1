/*!
interrupt.rs - Reset / NMI / IRQ request latches and entry sequences.

Overview
========
Hosts assert request lines at any time; the latches are only examined at
instruction boundaries (start of `Cpu::step`), never mid-instruction.

Priority when several are pending: reset, then NMI, then IRQ.

Sequences (7 cycles each)
=========================
- Reset: registers back to power-up defaults, PC from `$FFFC`. Nothing is
  pushed. Clears a jam.
- NMI:   push PCH, PCL, P (B clear, U set), set I, PC from `$FFFA`. Honored
  regardless of I.
- IRQ:   same as NMI through `$FFFE`, but only while I is clear. A masked
  request stays latched until I clears or the host releases the line.

Each serviced request consumes its latch.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bus::Bus;
use crate::cpu::cycles::INTERRUPT_CYCLES;
use crate::cpu::execute::{push_status, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Shared by hardware IRQ and BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Interrupt request kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
}

impl Interrupt {
    /// Address of the little-endian handler pointer.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// What the controller did on the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControllerState {
    #[default]
    Running,
    ServicingReset,
    ServicingNmi,
    ServicingIrq,
}

impl From<Interrupt> for ControllerState {
    fn from(kind: Interrupt) -> Self {
        match kind {
            Interrupt::Reset => ControllerState::ServicingReset,
            Interrupt::Nmi => ControllerState::ServicingNmi,
            Interrupt::Irq => ControllerState::ServicingIrq,
        }
    }
}

/// Latched request lines plus the controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterruptController {
    reset: bool,
    nmi: bool,
    irq: bool,
    state: ControllerState,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assert_reset(&mut self) {
        self.reset = true;
    }

    pub fn assert_nmi(&mut self) {
        self.nmi = true;
    }

    pub fn assert_irq(&mut self) {
        self.irq = true;
    }

    /// Drop a pending IRQ that has not been serviced yet.
    pub fn release_irq(&mut self) {
        self.irq = false;
    }

    #[inline]
    pub fn reset_pending(&self) -> bool {
        self.reset
    }

    #[inline]
    pub fn nmi_pending(&self) -> bool {
        self.nmi
    }

    #[inline]
    pub fn irq_pending(&self) -> bool {
        self.irq
    }

    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Highest-priority request that may be taken now.
    pub fn poll(&self, irq_disabled: bool) -> Option<Interrupt> {
        if self.reset {
            Some(Interrupt::Reset)
        } else if self.nmi {
            Some(Interrupt::Nmi)
        } else if self.irq && !irq_disabled {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Mark `kind` as taken: consume its latch and enter the servicing state.
    pub(crate) fn acknowledge(&mut self, kind: Interrupt) {
        match kind {
            Interrupt::Reset => {
                // Reset supersedes anything latched before it.
                self.reset = false;
                self.nmi = false;
                self.irq = false;
            }
            Interrupt::Nmi => self.nmi = false,
            Interrupt::Irq => self.irq = false,
        }
        self.state = kind.into();
    }

    /// Back to plain instruction execution.
    pub(crate) fn resume(&mut self) {
        self.state = ControllerState::Running;
    }
}

/// Run the entry sequence for `kind` and return its cycle cost.
pub(crate) fn service<C: CpuRegs, B: Bus>(kind: Interrupt, cpu: &mut C, bus: &mut B) -> u32 {
    match kind {
        Interrupt::Reset => {
            let target = bus.read_word(RESET_VECTOR);
            cpu.load_from(CpuState::after_reset(target));
        }
        Interrupt::Nmi | Interrupt::Irq => {
            let pc = cpu.pc();
            push_word(cpu, bus, pc);
            push_status(cpu, bus, false);
            cpu.assign_flag(Status::IRQ_DISABLE, true);
            let target = bus.read_word(kind.vector());
            cpu.set_pc(target);
        }
    }
    INTERRUPT_CYCLES
}
