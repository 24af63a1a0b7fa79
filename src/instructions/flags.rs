//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear one flag and touch nothing else.
//! There is no SEV on the 6502.

use crate::opcodes::Operation;
use crate::status::Status;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_flag_op<M: MemoryBus>(cpu: &mut CPU<M>, operation: Operation) {
    use Operation::*;

    let (flag, value) = match operation {
        Clc => (Status::CARRY, false),
        Sec => (Status::CARRY, true),
        Cli => (Status::INTERRUPT_DISABLE, false),
        Sei => (Status::INTERRUPT_DISABLE, true),
        Cld => (Status::DECIMAL, false),
        Sed => (Status::DECIMAL, true),
        Clv => (Status::OVERFLOW, false),
        _ => return,
    };

    cpu.regs.p.set(flag, value);
}
