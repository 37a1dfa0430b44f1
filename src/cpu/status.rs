/*!
status.rs - Processor status register (P).

Bit Layout
==========
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE     bit 7 of the last result
  V = OVERFLOW     signed overflow out of ADC/SBC (also BIT bit 6)
  1 = UNUSED       no latch; always reads back as 1
  B = BREAK        no latch; only meaningful in a pushed copy (BRK/PHP set, IRQ/NMI clear)
  D = DECIMAL      stored and pushed, ignored by the 2A03 ALU
  I = IRQ_DISABLE  masks IRQ (never NMI)
  Z = ZERO         last result was 0
  C = CARRY        carry out / no borrow

The live register never holds B: `from_stack` strips it and `to_stack`
adds it back according to who pushed the byte.
*/

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Processor status flags packed into one byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Default for Status {
    /// Power-up value: IRQs masked, unused bit set (`$24`).
    fn default() -> Self {
        Status::IRQ_DISABLE | Status::UNUSED
    }
}

impl Status {
    /// Unpack a byte pulled off the stack (PLP/RTI): U forced, B dropped.
    #[inline]
    pub fn from_stack(byte: u8) -> Self {
        (Status::from_bits_retain(byte) | Status::UNUSED) - Status::BREAK
    }

    /// Pack for a push. `brk` selects BRK/PHP (B set) vs IRQ/NMI (B clear).
    #[inline]
    pub fn to_stack(self, brk: bool) -> u8 {
        let mut v = self | Status::UNUSED;
        v.set(Status::BREAK, brk);
        v.bits()
    }

    /// Set Z and N from a result byte.
    #[inline]
    pub fn set_zn(&mut self, result: u8) {
        self.set(Status::ZERO, result == 0);
        self.set(Status::NEGATIVE, result & 0x80 != 0);
    }

    /// Carry as 0 or 1 for add/rotate chains.
    #[inline]
    pub fn carry_bit(self) -> u8 {
        (self.contains(Status::CARRY)) as u8
    }
}
