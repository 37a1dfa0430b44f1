/*!
bus.rs - Memory interface consumed by the CPU core.

Overview
========
The CPU never owns memory. Every instruction reaches the address space
through a `&mut impl Bus` handed to `Cpu::step`, so a host is free to back
the 16-bit space with RAM mirrors, cartridge banks, or memory-mapped
registers of other chips.

Contract
========
- Every `u16` is a valid address. Unmapped regions are the implementor's
  concern (open bus, zero, mirror...), never an error at this layer.
- Reads may have side effects. The core issues each read and write exactly
  as the instruction performs it and never caches or reorders them.

`Ram` is a flat 64 KiB implementation used by the test suite and by hosts
that only want a scratch address space.
*/

/// Byte-addressable memory interface driven by the CPU.
pub trait Bus {
    /// Read one byte.
    fn read(&mut self, addr: u16) -> u8;

    /// Write one byte.
    fn write(&mut self, addr: u16, value: u8);

    /// Read a little-endian word (low at `addr`, high at `addr + 1`, wrapping at 16 bits).
    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Size of the full 6502 address space.
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Flat, unmirrored 64 KiB RAM covering the whole address space.
#[derive(Clone)]
pub struct Ram {
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram")
            .field("len", &ADDRESS_SPACE_SIZE)
            .finish()
    }
}

impl Ram {
    /// Create a zero-filled address space.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Copy `bytes` into memory starting at `origin`, wrapping past `$FFFF`.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &b in bytes {
            self.data[addr as usize] = b;
            addr = addr.wrapping_add(1);
        }
    }

    /// Store a little-endian word (used for vectors and pointers).
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.data[addr as usize] = value as u8;
        self.data[addr.wrapping_add(1) as usize] = (value >> 8) as u8;
    }

    /// Side-effect-free read for inspection.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Expose the backing store (read-only).
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Bus for Ram {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_word_is_little_endian_and_wraps() {
        let mut ram = Ram::new();
        ram.write(0x1234, 0xCD);
        ram.write(0x1235, 0xAB);
        assert_eq!(ram.read_word(0x1234), 0xABCD);

        ram.write(0xFFFF, 0x34);
        ram.write(0x0000, 0x12);
        assert_eq!(ram.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn load_wraps_past_top_of_memory() {
        let mut ram = Ram::new();
        ram.load(0xFFFE, &[1, 2, 3]);
        assert_eq!(ram.peek(0xFFFE), 1);
        assert_eq!(ram.peek(0xFFFF), 2);
        assert_eq!(ram.peek(0x0000), 3);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut ram = Ram::new();
        {
            let mut r = &mut ram;
            r.write(0x0200, 0x42);
            assert_eq!(Bus::read(&mut r, 0x0200), 0x42);
        }
        assert_eq!(ram.peek(0x0200), 0x42);
    }
}
