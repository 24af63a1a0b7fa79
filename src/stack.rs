//! # Stack Operations
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. SP is an 8-bit offset into
//! that page and wraps freely in both directions; there is no overflow detection.
//!
//! Multi-byte values are pushed most significant byte first, so a pushed word sits in
//! memory little-endian just above the new SP, the layout JSR/RTS and interrupts rely on.

use crate::{MemoryBus, CPU};

/// A value that can be pushed to or popped from the hardware stack.
pub trait StackValue: Copy {
    /// Width in bytes.
    const WIDTH: u8;

    fn to_word(self) -> u16;

    fn from_word(word: u16) -> Self;
}

impl StackValue for u8 {
    const WIDTH: u8 = 1;

    fn to_word(self) -> u16 {
        self as u16
    }

    fn from_word(word: u16) -> Self {
        word as u8
    }
}

impl StackValue for u16 {
    const WIDTH: u8 = 2;

    fn to_word(self) -> u16 {
        self
    }

    fn from_word(word: u16) -> Self {
        word
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Pushes `value`, writing each byte at `0x0100 | SP` and decrementing SP after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_sp(0xFF);
    /// cpu.push(0x1234u16);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert_eq!(cpu.memory().read(0x01FF), 0x12);
    /// assert_eq!(cpu.memory().read(0x01FE), 0x34);
    /// assert_eq!(cpu.pop::<u16>(), 0x1234);
    /// assert_eq!(cpu.sp(), 0xFF);
    /// ```
    pub fn push<T: StackValue>(&mut self, value: T) {
        let word = value.to_word();
        for i in (0..T::WIDTH).rev() {
            self.memory
                .write(self.regs.stack_address(), (word >> (8 * i)) as u8);
            self.regs.sp = self.regs.sp.wrapping_sub(1);
        }
    }

    /// Pops a value, incrementing SP before each byte is read.
    pub fn pop<T: StackValue>(&mut self) -> T {
        let mut word = 0u16;
        for i in 0..T::WIDTH {
            self.regs.sp = self.regs.sp.wrapping_add(1);
            let byte = self.memory.read(self.regs.stack_address());
            word |= (byte as u16) << (8 * i);
        }
        T::from_word(word)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, MemoryBus, CPU};

    #[test]
    fn test_push_pop_byte() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_sp(0xFD);
        cpu.push(0x42u8);
        assert_eq!(cpu.memory().read(0x01FD), 0x42);
        assert_eq!(cpu.sp(), 0xFC);
        assert_eq!(cpu.pop::<u8>(), 0x42);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_push_wraps_below_page() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_sp(0x00);
        cpu.push(0xBEEFu16);
        assert_eq!(cpu.sp(), 0xFE);
        assert_eq!(cpu.memory().read(0x0100), 0xBE);
        assert_eq!(cpu.memory().read(0x01FF), 0xEF);
        assert_eq!(cpu.memory().read(0x00FF), 0x00);
        assert_eq!(cpu.pop::<u16>(), 0xBEEF);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_pop_wraps_above_page() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory_mut().write(0x0100, 0x99);
        cpu.set_sp(0xFF);
        assert_eq!(cpu.pop::<u8>(), 0x99);
        assert_eq!(cpu.sp(), 0x00);
    }
}
