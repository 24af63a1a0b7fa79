//! Assembly text for decoded instructions.

use std::fmt::Write;

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Formats one instruction in conventional 6502 syntax.
///
/// Relative operands are shown as the absolute branch target.
pub fn format_instruction(instr: &Instruction) -> String {
    if instr.is_unknown() {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let operand = format_operand(instr);
    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let value = instr.operand_value();
    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", value),
        ZeroPage => format!("${:02X}", value),
        ZeroPageX => format!("${:02X},X", value),
        ZeroPageY => format!("${:02X},Y", value),
        Relative => {
            let next = instr.address.wrapping_add(instr.size_bytes as u16);
            format!("${:04X}", next.wrapping_add_signed(value as u8 as i8 as i16))
        }
        Absolute => format!("${:04X}", value),
        AbsoluteX => format!("${:04X},X", value),
        AbsoluteY => format!("${:04X},Y", value),
        Indirect => format!("(${:04X})", value),
        IndirectX => format!("(${:02X},X)", value),
        IndirectY => format!("(${:02X}),Y", value),
    }
}

/// One line per instruction: address, raw bytes and assembly text.
///
/// ```text
/// 0600  A9 01     LDA #$01
/// 0602  8D 00 02  STA $0200
/// ```
pub fn format_listing(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for instr in instructions {
        let mut raw = format!("{:02X}", instr.opcode);
        for byte in &instr.operand_bytes {
            let _ = write!(raw, " {:02X}", byte);
        }
        let _ = writeln!(out, "{:04X}  {:<8}  {}", instr.address, raw, format_instruction(instr));
    }
    out
}
