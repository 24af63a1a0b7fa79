//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver that turns a
//! mode into an [`Operand`] for the instruction being executed.
//!
//! Resolution happens after the opcode byte has been fetched, so PC points at the first
//! operand byte. The resolver reads the operand bytes, advances PC past them and reports
//! whether indexing crossed a page boundary. Operand values at an effective address are
//! read lazily by the instruction, so stores never issue a read.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the following instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Instruction size including the opcode byte.
    pub const fn size_bytes(self) -> u8 {
        self.operand_bytes() + 1
    }
}

/// Where an instruction's operand lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Implied and accumulator modes: the operand is the accumulator.
    Accumulator,

    /// Immediate byte taken from the instruction stream.
    Immediate(u8),

    /// Effective memory address (for Relative and Indirect, the jump target).
    Address(u16),
}

/// Operand resolved for the current instruction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub target: Target,

    /// Indexing moved the address into a different page.
    pub page_crossed: bool,
}

impl Operand {
    fn direct(target: Target) -> Self {
        Self {
            target,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            target: Target::Address(address),
            page_crossed: crosses_page(base, address),
        }
    }

    /// Effective address, if the operand has one.
    pub fn address(&self) -> Option<u16> {
        match self.target {
            Target::Address(addr) => Some(addr),
            _ => None,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
pub fn crosses_page(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

impl<M: MemoryBus> CPU<M> {
    fn fetch_operand_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    fn fetch_operand_word(&mut self) -> u16 {
        let word = self.memory.read_u16(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        word
    }

    /// Resolves `mode` against the current registers and memory, leaving PC on the next
    /// instruction.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        use AddressingMode::*;

        match mode {
            Implicit | Accumulator => Operand::direct(Target::Accumulator),
            Immediate => Operand::direct(Target::Immediate(self.fetch_operand_byte())),
            ZeroPage => Operand::direct(Target::Address(self.fetch_operand_byte() as u16)),
            ZeroPageX => {
                let zp = self.fetch_operand_byte().wrapping_add(self.regs.x);
                Operand::direct(Target::Address(zp as u16))
            }
            ZeroPageY => {
                let zp = self.fetch_operand_byte().wrapping_add(self.regs.y);
                Operand::direct(Target::Address(zp as u16))
            }
            Relative => {
                let offset = self.fetch_operand_byte() as i8;
                let next = self.regs.pc;
                let target = next.wrapping_add_signed(offset as i16);
                Operand {
                    target: Target::Address(target),
                    page_crossed: crosses_page(next, target),
                }
            }
            Absolute => Operand::direct(Target::Address(self.fetch_operand_word())),
            AbsoluteX => {
                let base = self.fetch_operand_word();
                Operand::indexed(base, self.regs.x)
            }
            AbsoluteY => {
                let base = self.fetch_operand_word();
                Operand::indexed(base, self.regs.y)
            }
            Indirect => {
                // The high byte of the target never leaves the pointer's page.
                let pointer = self.fetch_operand_word();
                Operand::direct(Target::Address(self.memory.read_u16_in_page(pointer)))
            }
            IndirectX => {
                let zp = self.fetch_operand_byte().wrapping_add(self.regs.x);
                Operand::direct(Target::Address(self.memory.read_u16_in_page(zp as u16)))
            }
            IndirectY => {
                let zp = self.fetch_operand_byte();
                let base = self.memory.read_u16_in_page(zp as u16);
                Operand::indexed(base, self.regs.y)
            }
        }
    }

    /// Reads the operand value. Accumulator-mode operands read A.
    pub(crate) fn read_operand(&self, operand: &Operand) -> u8 {
        match operand.target {
            Target::Accumulator => self.regs.a,
            Target::Immediate(value) => value,
            Target::Address(addr) => self.memory.read(addr),
        }
    }

    /// Writes back a read-modify-write result to A or memory.
    pub(crate) fn write_operand(&mut self, operand: &Operand, value: u8) {
        match operand.target {
            Target::Accumulator => self.regs.a = value,
            Target::Address(addr) => self.memory.write(addr, value),
            // Immediate operands are never written by any documented opcode.
            Target::Immediate(_) => {}
        }
    }
}
