//! # Disassembler
//!
//! Turns machine code back into assembly text (`LDA #$01`, `STA $0200`, `BNE $8004`). Used
//! by the per-instruction trace log and by the WebAssembly bindings.
//!
//! Bytes that do not start a documented instruction are rendered as `.byte $XX` and
//! consume one byte.

pub mod decoder;
pub mod formatter;

pub use decoder::{decode_at, decode_instruction};
pub use formatter::{format_instruction, format_listing};

use crate::addressing::AddressingMode;

/// A decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub address: u16,

    pub opcode: u8,

    /// Mnemonic, or `.byte` for an unknown opcode.
    pub mnemonic: &'static str,

    pub addressing_mode: AddressingMode,

    /// Operand bytes following the opcode (0-2).
    pub operand_bytes: Vec<u8>,

    /// Opcode plus operands.
    pub size_bytes: u8,

    /// Base cycle cost, 0 for unknown opcodes.
    pub base_cycles: u8,
}

impl Instruction {
    pub(crate) fn unknown(address: u16, opcode: u8) -> Self {
        Self {
            address,
            opcode,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
        }
    }

    /// True when the opcode has no table entry.
    pub fn is_unknown(&self) -> bool {
        self.base_cycles == 0
    }

    /// Little-endian operand value: the byte for one-byte operands, the word for two.
    pub fn operand_value(&self) -> u16 {
        match self.operand_bytes.as_slice() {
            [lo] => *lo as u16,
            [lo, hi] => u16::from_le_bytes([*lo, *hi]),
            _ => 0,
        }
    }
}

/// Disassembles `bytes` as if they were loaded at `start_address`.
///
/// A truncated instruction at the end of the slice is emitted as `.byte` entries.
///
/// # Examples
///
/// ```
/// use nes6502::disassembler::{disassemble, format_instruction};
///
/// let listing = disassemble(&[0xA9, 0x01, 0x8D, 0x00, 0x02], 0x0600);
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
/// assert_eq!(text, ["LDA #$01", "STA $0200"]);
/// assert_eq!(listing[1].address, 0x0602);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::unknown(address, bytes[offset]));
        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
