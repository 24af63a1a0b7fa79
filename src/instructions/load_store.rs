//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register and set N/Z
//! - STA, STX, STY: store a register, no flags affected

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Loads A from the operand. Sets N and Z.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.p.set_nz(value);
}

/// Loads X from the operand. Sets N and Z.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.x = value;
    cpu.regs.p.set_nz(value);
}

/// Loads Y from the operand. Sets N and Z.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.y = value;
    cpu.regs.p.set_nz(value);
}

pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let a = cpu.regs.a;
    cpu.write_operand(operand, a);
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let x = cpu.regs.x;
    cpu.write_operand(operand, x);
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let y = cpu.regs.y;
    cpu.write_operand(operand, y);
}
