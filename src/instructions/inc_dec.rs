//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory in place; INX/INY/DEX/DEY modify an index register. All wrap
//! modulo 256 and set N/Z from the result. Carry is never affected.

use crate::addressing::Operand;
use crate::alu;
use crate::{MemoryBus, CPU};

fn modify_memory<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, delta: i8) {
    let value = cpu.read_operand(operand);
    let result = alu::step_by(value, delta);
    cpu.write_operand(operand, result.value);
    cpu.regs.p.set_nz(result.value);
}

pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    modify_memory(cpu, operand, 1);
}

pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    modify_memory(cpu, operand, -1);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.p.set_nz(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.p.set_nz(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.p.set_nz(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.p.set_nz(cpu.regs.y);
}
