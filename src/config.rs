//! # Hardware Constants
//!
//! Fixed addresses and power-on values of the NES CPU. Everything the core needs to know
//! about where the stack, the vectors and the APU registers live is defined here once.

use std::ops::Range;

/// Base address of the stack page. The effective stack address is `STACK_BASE | SP`.
pub const STACK_BASE: u16 = 0x0100;

/// Non-maskable interrupt vector (low byte; high byte at `NMI_VECTOR + 1`).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector, read on power-up and reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer after power-up.
pub const POWER_ON_SP: u8 = 0xFD;

/// Packed status after power-up: I, B and the unused bit set (`0b0011_0100`).
pub const POWER_ON_STATUS: u8 = 0x34;

/// APU channel enable register. Writing 0 silences every channel.
pub const APU_STATUS: u16 = 0x4015;

/// APU frame counter register. Writing 0 enables the frame IRQ.
pub const APU_FRAME_COUNTER: u16 = 0x4017;

/// Pulse, triangle and noise channel registers cleared at power-up.
pub const APU_CHANNEL_REGISTERS: Range<u16> = 0x4000..0x4010;

/// Cycles consumed by the interrupt entry sequence (BRK, IRQ, NMI).
pub const INTERRUPT_CYCLES: u8 = 7;
