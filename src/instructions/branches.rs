//! # Branch Instructions
//!
//! All eight conditional branches use relative addressing. The resolver has already moved
//! PC past the offset byte and computed the target, so a branch only has to decide whether
//! to take it. No extra cycles are charged for a taken branch.

use crate::addressing::Operand;
use crate::opcodes::Operation;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// The flag a branch tests and the value that makes it taken.
fn condition(operation: Operation) -> Option<(Status, bool)> {
    use Operation::*;
    Some(match operation {
        Bpl => (Status::NEGATIVE, false),
        Bmi => (Status::NEGATIVE, true),
        Bvc => (Status::OVERFLOW, false),
        Bvs => (Status::OVERFLOW, true),
        Bcc => (Status::CARRY, false),
        Bcs => (Status::CARRY, true),
        Bne => (Status::ZERO, false),
        Beq => (Status::ZERO, true),
        _ => return None,
    })
}

pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operation: Operation,
    operand: &Operand,
) {
    let Some((flag, expected)) = condition(operation) else {
        return;
    };

    if cpu.regs.p.contains(flag) == expected {
        if let Some(target) = operand.address() {
            cpu.regs.pc = target;
        }
    }
}
