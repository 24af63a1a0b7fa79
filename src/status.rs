//! # Processor Status Register
//!
//! The status register (P) packs seven condition flags and one unused bit into a byte:
//!
//! ```text
//! 7 6 5 4 3 2 1 0
//! N V - B D I Z C
//! ```
//!
//! Bit 5 has no storage on the 2A03 and always reads back as 1. The B bit only has meaning
//! in copies of P pushed to the stack (set by PHP/BRK, clear for IRQ/NMI).

use bitflags::bitflags;

bitflags! {
    /// Packed 6502 status flags at their fixed bit positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry (bit 0)
        const CARRY = 0b0000_0001;
        /// Zero (bit 1)
        const ZERO = 0b0000_0010;
        /// Interrupt disable (bit 2)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode (bit 3). Stored but ignored by the 2A03 ALU.
        const DECIMAL = 0b0000_1000;
        /// Break command (bit 4)
        const BREAK = 0b0001_0000;
        /// Unused (bit 5), reads as 1
        const UNUSED = 0b0010_0000;
        /// Overflow (bit 6)
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7)
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Unpacks a status byte. Bit 5 is forced on.
    pub fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value) | Self::UNUSED
    }

    /// Packs the flags into a byte. Bit 5 always reads 1.
    pub fn to_byte(self) -> u8 {
        (self | Self::UNUSED).bits()
    }

    /// The byte pushed by PHP and BRK: B and bit 5 set.
    pub fn pushed_by_software(self) -> u8 {
        self.to_byte() | Self::BREAK.bits()
    }

    /// The byte pushed on IRQ/NMI entry: B clear, bit 5 set.
    pub fn pushed_by_hardware(self) -> u8 {
        self.to_byte() & !Self::BREAK.bits()
    }

    /// Restores flags popped by PLP/RTI. B and bit 5 of the popped byte are ignored.
    pub fn restore_from_stack(&mut self, popped: u8) {
        let kept = *self & Self::BREAK;
        *self = Self::from_byte(popped & !(Self::BREAK.bits() | Self::UNUSED.bits())) | kept;
    }

    pub fn carry(self) -> bool {
        self.contains(Self::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Self::CARRY, value);
    }

    pub fn zero(self) -> bool {
        self.contains(Self::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Self::ZERO, value);
    }

    pub fn interrupt_disable(self) -> bool {
        self.contains(Self::INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Self::INTERRUPT_DISABLE, value);
    }

    pub fn decimal(self) -> bool {
        self.contains(Self::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Self::DECIMAL, value);
    }

    pub fn break_command(self) -> bool {
        self.contains(Self::BREAK)
    }

    pub fn set_break_command(&mut self, value: bool) {
        self.set(Self::BREAK, value);
    }

    pub fn overflow(self) -> bool {
        self.contains(Self::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Self::OVERFLOW, value);
    }

    pub fn negative(self) -> bool {
        self.contains(Self::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Self::NEGATIVE, value);
    }

    /// Sets N from bit 7 of `value` and Z from `value == 0`.
    pub fn set_nz(&mut self, value: u8) {
        self.set_negative(value & 0x80 != 0);
        self.set_zero(value == 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::UNUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(Status::CARRY.bits(), 1 << 0);
        assert_eq!(Status::ZERO.bits(), 1 << 1);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 1 << 2);
        assert_eq!(Status::DECIMAL.bits(), 1 << 3);
        assert_eq!(Status::BREAK.bits(), 1 << 4);
        assert_eq!(Status::UNUSED.bits(), 1 << 5);
        assert_eq!(Status::OVERFLOW.bits(), 1 << 6);
        assert_eq!(Status::NEGATIVE.bits(), 1 << 7);
    }

    #[test]
    fn test_unused_bit_always_reads_one() {
        assert_eq!(Status::empty().to_byte(), 0b0010_0000);
        assert_eq!(Status::from_byte(0x00).to_byte(), 0x20);
        assert_eq!(Status::default().to_byte(), 0x20);
    }

    #[test]
    fn test_pushed_copies() {
        let mut p = Status::default();
        p.set_carry(true);
        assert_eq!(p.pushed_by_software(), 0b0011_0001);
        p.set_break_command(true);
        assert_eq!(p.pushed_by_hardware(), 0b0010_0001);
    }

    #[test]
    fn test_restore_ignores_break_and_unused() {
        let mut p = Status::default();
        p.restore_from_stack(0xFF);
        assert!(p.negative() && p.overflow() && p.decimal());
        assert!(p.interrupt_disable() && p.zero() && p.carry());
        assert!(!p.break_command());

        let mut p = Status::from_byte(0x34);
        p.restore_from_stack(0x00);
        assert!(p.break_command());
        assert_eq!(p.to_byte(), 0x30);
    }

    #[test]
    fn test_set_nz() {
        let mut p = Status::default();
        p.set_nz(0x00);
        assert!(p.zero() && !p.negative());
        p.set_nz(0x80);
        assert!(!p.zero() && p.negative());
        p.set_nz(0x7F);
        assert!(!p.zero() && !p.negative());
    }
}
