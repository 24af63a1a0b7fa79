//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator (accumulator mode) or read, modify and
//! write back a memory location. The bit shifted out lands in carry; N and Z follow the
//! result.

use super::apply_flags;
use crate::addressing::Operand;
use crate::alu::{self, AluResult};
use crate::{MemoryBus, CPU};

fn read_modify_write<M, F>(cpu: &mut CPU<M>, operand: &Operand, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> AluResult,
{
    let value = cpu.read_operand(operand);
    let result = op(value, cpu.regs.p.carry());
    cpu.write_operand(operand, result.value);
    apply_flags(cpu, &result);
}

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    read_modify_write(cpu, operand, |value, _| alu::asl(value));
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    read_modify_write(cpu, operand, |value, _| alu::lsr(value));
}

pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    read_modify_write(cpu, operand, alu::rol);
}

pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    read_modify_write(cpu, operand, alu::ror);
}
