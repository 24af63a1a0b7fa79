//! Instruction decoding from a byte slice or a live memory bus.

use crate::disassembler::Instruction;
use crate::opcodes::lookup;
use crate::MemoryBus;

/// Decodes the instruction at the start of `bytes`.
///
/// Returns `None` for an unknown opcode or when `bytes` is shorter than the instruction.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = lookup(opcode)?;
    let operand_len = metadata.addressing_mode.operand_bytes() as usize;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic(),
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes(),
        base_cycles: metadata.base_cycles,
    })
}

/// Decodes the instruction at `address` on `bus`. Operand reads wrap at 0xFFFF.
///
/// Never fails: unknown opcodes come back as a one-byte `.byte` entry.
pub fn decode_at<B: MemoryBus + ?Sized>(bus: &B, address: u16) -> Instruction {
    let opcode = bus.read(address);
    let Some(metadata) = lookup(opcode) else {
        return Instruction::unknown(address, opcode);
    };

    let operand_bytes = (1..metadata.size_bytes() as u16)
        .map(|i| bus.read(address.wrapping_add(i)))
        .collect();

    Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic(),
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes(),
        base_cycles: metadata.base_cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::FlatMemory;

    #[test]
    fn test_decode_lda_immediate() {
        let instr = decode_instruction(&[0xA9, 0x42], 0x8000).unwrap();
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
        assert_eq!(instr.base_cycles, 2);
    }

    #[test]
    fn test_decode_rejects_truncated_and_unknown() {
        assert!(decode_instruction(&[0x8D, 0x00], 0).is_none());
        assert!(decode_instruction(&[0xFF], 0).is_none());
        assert!(decode_instruction(&[], 0).is_none());
    }

    #[test]
    fn test_decode_at_wraps_address_space() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0x4C);
        mem.write(0x0000, 0x34);
        mem.write(0x0001, 0x12);
        let instr = decode_at(&mem, 0xFFFF);
        assert_eq!(instr.mnemonic, "JMP");
        assert_eq!(instr.operand_bytes, vec![0x34, 0x12]);
    }
}
