//! # 6502 Instruction Implementations
//!
//! Instructions are grouped by category. Each is a standalone function taking the CPU and
//! the operand already resolved for the current instruction; by the time it runs, PC
//! points at the next instruction and cycle accounting is left to the caller.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **inc_dec**: INC, INX, INY, DEC, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **stack**: PHA, PHP, PLA, PLP
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Operand;
use crate::alu::AluResult;
use crate::opcodes::Operation;
use crate::{MemoryBus, CPU};

/// Runs `operation` against the resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, operation: Operation, operand: &Operand) {
    use Operation::*;

    match operation {
        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta => load_store::execute_sta(cpu, operand),
        Stx => load_store::execute_stx(cpu, operand),
        Sty => load_store::execute_sty(cpu, operand),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),

        Inc => inc_dec::execute_inc(cpu, operand),
        Dec => inc_dec::execute_dec(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Adc => alu::execute_adc(cpu, operand),
        Sbc => alu::execute_sbc(cpu, operand),
        And => alu::execute_and(cpu, operand),
        Ora => alu::execute_ora(cpu, operand),
        Eor => alu::execute_eor(cpu, operand),
        Cmp => alu::execute_cmp(cpu, operand),
        Cpx => alu::execute_cpx(cpu, operand),
        Cpy => alu::execute_cpy(cpu, operand),
        Bit => alu::execute_bit(cpu, operand),

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Bpl | Bmi | Bvc | Bvs | Bcc | Bcs | Bne | Beq => {
            branches::execute_branch(cpu, operation, operand)
        }

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => {}

        Clc | Sec | Cli | Sei | Cld | Sed | Clv => flags::execute_flag_op(cpu, operation),
    }
}

/// Copies the flags an ALU result defines into P. Undefined flags are left alone.
pub(crate) fn apply_flags<M: MemoryBus>(cpu: &mut CPU<M>, result: &AluResult) {
    let p = &mut cpu.regs.p;
    p.set_negative(result.negative);
    p.set_zero(result.zero);
    if let Some(carry) = result.carry {
        p.set_carry(carry);
    }
    if let Some(overflow) = result.overflow {
        p.set_overflow(overflow);
    }
}
