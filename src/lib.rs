//! # NES 6502 CPU Core
//!
//! An emulator core for the Ricoh 2A03, the NMOS 6502 variant inside the NES. It has no
//! decimal mode; everything else matches the documented 6502.
//!
//! The crate provides the register file, the flag rules, the 13 addressing modes, a
//! table-driven executor for all 151 documented opcodes, the page-1 stack, power-up, reset
//! and interrupt entry, and a small run loop for programs loaded into memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{CPU, FlatMemory, MemoryBus, StopReason};
//!
//! // Memory is owned by the caller; the CPU borrows it
//! let mut memory = FlatMemory::new();
//! let mut cpu = CPU::new(&mut memory);
//!
//! cpu.load_program(0x0000, &[
//!     0xA9, 0x01, 0x8D, 0x00, 0x02, // LDA #$01, STA $0200
//!     0xA9, 0x05, 0x8D, 0x01, 0x02, // LDA #$05, STA $0201
//!     0xA9, 0x08, 0x8D, 0x02, 0x02, // LDA #$08, STA $0202
//! ]);
//! let summary = cpu.run(1_000).unwrap();
//!
//! assert_eq!(summary.stop, StopReason::LeftCodeSegment);
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cpu.pc(), 0x000F);
//! drop(cpu);
//!
//! assert_eq!(memory.read(0x0200), 0x01);
//! assert_eq!(memory.hex_dump(0x0200..0x0203, 16), "|0200: 01 05 08|\n");
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Design**: all opcode metadata lives in [`OPCODE_TABLE`]
//! - **Pure flag rules**: arithmetic and flag computation in [`alu`] never touch the CPU
//! - **WebAssembly Portability**: no OS dependencies, deterministic execution
//!
//! ## Modules
//!
//! - `cpu` - CPU state, step and run loops
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and operand resolution
//! - `alu` - Flag engine
//! - `status`, `registers` - Register file
//! - `stack`, `interrupts` - Stack, power-up, reset, BRK/IRQ/NMI
//! - `disassembler` - Instruction decoding and formatting
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger. Every executed
//! instruction is traced at `trace` level; power-up, reset, interrupts and program loads
//! are logged at `debug`.

pub mod addressing;
pub mod alu;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Target};
pub use cpu::{CodeSegment, RunSummary, Step, StopReason, CPU};
pub use disassembler::{disassemble, format_instruction, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, OpcodeMetadata, Operation, OPCODE_TABLE};
pub use registers::Registers;
pub use stack::StackValue;
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `address` is not a documented 6502 opcode.
    UnknownOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
