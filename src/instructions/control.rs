//! # Control Flow Instructions
//!
//! - JMP: load PC with the resolved target (Indirect already applies the page-wrap bug)
//! - JSR: push the address of the last operand byte, then jump
//! - RTS: pull the return address and add one
//! - RTI: pull P, then PC
//! - BRK: software interrupt through the IRQ vector

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    if let Some(target) = operand.address() {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// PC already points past the operand, so PC - 1 is the address of the operand's high
/// byte. RTS undoes this by adding one.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push(return_address);
    if let Some(target) = operand.address() {
        cpu.regs.pc = target;
    }
}

pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address: u16 = cpu.pop();
    cpu.regs.pc = return_address.wrapping_add(1);
}

pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status: u8 = cpu.pop();
    cpu.regs.p.restore_from_stack(status);
    cpu.regs.pc = cpu.pop();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte long but skips a padding byte: the pushed return address is the BRK
/// address + 2. The pushed status has B set.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.break_interrupt(return_address);
}
