//! # CPU State and Execution
//!
//! This module contains the CPU struct and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Register file**: A, X, Y, SP, PC and the packed status register (see [`Registers`])
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Code segment**: the region written by the last [`CPU::load_program`], used by [`CPU::run`]
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction
//! - `run_for_cycles()`: execute until a cycle budget is exhausted
//! - `run()`: execute the loaded program from its start until PC leaves it, a BRK executes
//!   or the budget runs out
//!
//! An opcode without a table entry is the only fault. It is reported as
//! [`ExecutionError::UnknownOpcode`] and leaves the CPU untouched.

use log::{debug, log_enabled, trace, warn, Level};

use crate::config::INTERRUPT_CYCLES;
use crate::disassembler::{decode_at, format_instruction};
use crate::instructions;
use crate::opcodes::{lookup, Operation};
use crate::registers::Registers;
use crate::status::Status;
use crate::{ExecutionError, MemoryBus};

/// 6502 CPU state and execution context.
///
/// The CPU owns its register file and cycle counter and is generic over the memory bus.
/// Passing `&mut FlatMemory` instead of `FlatMemory` leaves the memory owned by the caller.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - performs power-up and loads PC from the reset vector
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) memory: M,

    code_segment: Option<CodeSegment>,
}

/// Address range of the loaded program, `[start, end)`.
///
/// `end` is 32-bit so a program ending exactly at 0xFFFF is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSegment {
    pub start: u16,
    pub end: u32,
}

impl CodeSegment {
    pub fn contains(&self, pc: u16) -> bool {
        (self.start as u32..self.end).contains(&(pc as u32))
    }

    pub fn len(&self) -> usize {
        (self.end - self.start as u32) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one successful [`CPU::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Address of the executed opcode.
    pub address: u16,

    pub opcode: u8,

    pub operation: Operation,

    /// Cycles consumed, including the page-cross penalty and any IRQ serviced afterwards.
    pub cycles: u8,
}

/// Why [`CPU::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// PC is outside the loaded code segment.
    LeftCodeSegment,

    /// A BRK instruction executed. Its interrupt entry has already happened.
    Break,

    /// The cycle budget was consumed.
    BudgetExhausted,

    /// Nothing has been loaded with [`CPU::load_program`].
    NoProgram,
}

/// Totals for one [`CPU::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub instructions: u64,
    pub stop: StopReason,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU on the given memory bus and performs [`CPU::power_up`].
    ///
    /// Power-up writes the APU registers (0x4000-0x400F, 0x4015, 0x4017) and loads PC from
    /// the reset vector at 0xFFFC/0xFFFD (little-endian).
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// // Memory stays with the caller
    /// let mut cpu = CPU::new(&mut mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// cpu.memory_mut().write(0x0200, 0x01);
    /// drop(cpu);
    /// assert_eq!(mem.read(0x0200), 0x01);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            cycles: 0,
            memory,
            code_segment: None,
        };
        cpu.power_up();
        cpu
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in opcode table
    /// 3. Resolve the operand, advancing PC past it
    /// 4. Execute the operation
    /// 5. Charge base cycles plus the page-cross penalty where it applies
    /// 6. Service a pending IRQ from the bus if I is clear
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnknownOpcode` if the byte at PC is not a documented opcode. PC still
    /// points at that byte and no cycles are charged.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // not a 6502 instruction
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// let step = cpu.step().unwrap();
    /// assert_eq!(step.cycles, 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    ///
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<Step, ExecutionError> {
        let address = self.regs.pc;
        let opcode = self.memory.read(address);

        let Some(metadata) = lookup(opcode) else {
            warn!("unknown opcode {:02X} at {:04X}", opcode, address);
            return Err(ExecutionError::UnknownOpcode { opcode, address });
        };

        if log_enabled!(Level::Trace) {
            trace!(
                "{:04X}  {:<14} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
                address,
                format_instruction(&decode_at(&self.memory, address)),
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.regs.p.to_byte(),
                self.regs.sp,
                self.cycles
            );
        }

        self.regs.pc = address.wrapping_add(1);
        let operand = self.resolve_operand(metadata.addressing_mode);
        instructions::execute(self, metadata.operation, &operand);

        let mut cycles = metadata.base_cycles;
        if operand.page_crossed && metadata.operation.pays_page_cross_penalty() {
            cycles += 1;
        }
        self.cycles += cycles as u64;

        // irq() charges its own cycles to the counter
        if self.memory.irq_active() && self.irq() {
            cycles += INTERRUPT_CYCLES;
        }

        Ok(Step {
            address,
            opcode,
            operation: metadata.operation,
            cycles,
        })
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    ///
    /// This is useful for frame-locked execution models where the CPU must run for
    /// an exact number of cycles per frame (e.g., 29780 cycles for 60Hz NTSC).
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0x4C, 0x00, 0x80]); // JMP $8000
    ///
    /// let mut cpu = CPU::new(mem);
    /// let consumed = cpu.run_for_cycles(29780).unwrap();
    /// assert!(consumed >= 29780);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Copies `bytes` into memory at `base` and makes `[base, base + len)` the code segment.
    ///
    /// Registers are not touched. Bytes past 0xFFFF wrap to 0x0000 in memory, but the
    /// segment does not wrap with them: [`CPU::run`] stops with
    /// [`StopReason::LeftCodeSegment`] once PC wraps to 0x0000.
    pub fn load_program(&mut self, base: u16, bytes: &[u8]) {
        self.memory.load(base, bytes);
        let segment = CodeSegment {
            start: base,
            end: base as u32 + bytes.len() as u32,
        };
        debug!(
            "loaded {} bytes at {:04X}..{:05X}",
            bytes.len(),
            segment.start,
            segment.end
        );
        self.code_segment = Some(segment);
    }

    /// Runs the loaded program from the start of its code segment.
    ///
    /// PC is set to the segment start; every other register keeps its current value. The
    /// loop stops before fetching when PC is outside the segment or `cycle_budget` cycles
    /// have been consumed, and after a BRK.
    ///
    /// # Errors
    ///
    /// Halts on the first unknown opcode and returns the fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, StopReason};
    ///
    /// let mut mem = FlatMemory::new();
    /// let mut cpu = CPU::new(&mut mem);
    /// cpu.load_program(0x0000, &[0xA9, 0x01, 0x8D, 0x00, 0x02]);
    ///
    /// let summary = cpu.run(1_000).unwrap();
    /// assert_eq!(summary.stop, StopReason::LeftCodeSegment);
    /// assert_eq!(summary.instructions, 2);
    /// assert_eq!(summary.cycles, 6);
    /// assert_eq!(cpu.pc(), 0x0005);
    /// ```
    pub fn run(&mut self, cycle_budget: u64) -> Result<RunSummary, ExecutionError> {
        let Some(segment) = self.code_segment else {
            return Ok(RunSummary {
                cycles: 0,
                instructions: 0,
                stop: StopReason::NoProgram,
            });
        };

        self.regs.pc = segment.start;
        let start_cycles = self.cycles;
        let mut instructions = 0;

        let stop = loop {
            if !segment.contains(self.regs.pc) {
                break StopReason::LeftCodeSegment;
            }
            if self.cycles - start_cycles >= cycle_budget {
                break StopReason::BudgetExhausted;
            }

            let step = self.step()?;
            instructions += 1;
            if step.operation == Operation::Brk {
                break StopReason::Break;
            }
        };

        let summary = RunSummary {
            cycles: self.cycles - start_cycles,
            instructions,
            stop,
        };
        debug!("run stopped: {:?}", summary);
        Ok(summary)
    }

    /// The segment recorded by the last [`CPU::load_program`].
    pub fn code_segment(&self) -> Option<CodeSegment> {
        self.code_segment
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0b0011_0100);
    /// ```
    pub fn status(&self) -> u8 {
        self.regs.p.to_byte()
    }

    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Snapshot of the full register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.overflow()
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.p.break_command()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.carry()
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces P with `value`. Bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = Status::from_byte(value);
    }

    // ========== Status Flag Setters ==========

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.p.set_negative(value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.p.set_overflow(value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.p.set_break_command(value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.p.set_decimal(value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.p.set_interrupt_disable(value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.p.set_zero(value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.p.set_carry(value);
    }
}
