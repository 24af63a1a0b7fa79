//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and comparison operations:
//! - ADC, SBC: binary add/subtract with carry, set N, V, Z, C
//! - AND, ORA, EOR: bitwise with the accumulator, set N, Z
//! - CMP, CPX, CPY: register minus operand, set N, Z, C, discard the difference
//! - BIT: copy bits 7/6 of the operand to N/V, Z from `A & operand`
//!
//! The flag rules themselves live in [`crate::alu`].

use super::apply_flags;
use crate::addressing::Operand;
use crate::alu::{self, AluResult};
use crate::{MemoryBus, CPU};

fn accumulate<M: MemoryBus>(cpu: &mut CPU<M>, result: AluResult) {
    cpu.regs.a = result.value;
    apply_flags(cpu, &result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// The decimal flag is ignored: the 2A03 always adds in binary.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::adc(cpu.regs.a, value, cpu.regs.p.carry());
    accumulate(cpu, result);
}

/// Executes the SBC (Subtract with Carry) instruction.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    let result = alu::sbc(cpu.regs.a, value, cpu.regs.p.carry());
    accumulate(cpu, result);
}

pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = alu::and(cpu.regs.a, cpu.read_operand(operand));
    accumulate(cpu, result);
}

pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = alu::ora(cpu.regs.a, cpu.read_operand(operand));
    accumulate(cpu, result);
}

pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = alu::eor(cpu.regs.a, cpu.read_operand(operand));
    accumulate(cpu, result);
}

fn compare_with<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: &Operand) {
    let result = alu::compare(register, cpu.read_operand(operand));
    apply_flags(cpu, &result);
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let a = cpu.regs.a;
    compare_with(cpu, a, operand);
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let x = cpu.regs.x;
    compare_with(cpu, x, operand);
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let y = cpu.regs.y;
    compare_with(cpu, y, operand);
}

/// Executes the BIT (Bit Test) instruction. Carry is untouched and A is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    let (negative, overflow, zero) = alu::bit(cpu.regs.a, value);
    cpu.regs.p.set_negative(negative);
    cpu.regs.p.set_overflow(overflow);
    cpu.regs.p.set_zero(zero);
}
