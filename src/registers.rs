//! # Register File
//!
//! Accumulator, index registers, stack pointer, program counter and status. A plain state
//! container; all arithmetic on it is modular.

use std::fmt;

use crate::config::STACK_BASE;
use crate::status::Status;

/// The 2A03 register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer, offset into page 1
    pub sp: u8,

    /// Program counter
    pub pc: u16,

    /// Status flags
    pub p: Status,
}

impl Registers {
    /// Full address the stack pointer refers to (`0x0100 | SP`).
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.p;
        writeln!(f, "A: {:02X}", self.a)?;
        writeln!(f, "X: {:02X}", self.x)?;
        writeln!(f, "Y: {:02X}", self.y)?;
        writeln!(f, "SP: {:02X}", self.sp)?;
        writeln!(f, "PC: {:04X}", self.pc)?;
        writeln!(f, "P: {:08b}", p.to_byte())?;
        write!(
            f,
            "C: {} Z: {} I: {} D: {} B: {} V: {} N: {}",
            p.carry() as u8,
            p.zero() as u8,
            p.interrupt_disable() as u8,
            p.decimal() as u8,
            p.break_command() as u8,
            p.overflow() as u8,
            p.negative() as u8,
        )
    }
}
