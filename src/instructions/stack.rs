//! # Stack Operations
//!
//! - PHA: push A
//! - PHP: push P with B and bit 5 set
//! - PLA: pull A, set N/Z
//! - PLP: pull P, ignoring B and bit 5

use crate::{MemoryBus, CPU};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.regs.a);
}

pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.regs.p.pushed_by_software());
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value: u8 = cpu.pop();
    cpu.regs.a = value;
    cpu.regs.p.set_nz(value);
}

pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value: u8 = cpu.pop();
    cpu.regs.p.restore_from_stack(value);
}
