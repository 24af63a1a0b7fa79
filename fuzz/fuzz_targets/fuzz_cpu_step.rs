//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, executes one instruction and checks
//! the invariants that must hold whatever the opcode was.

#![no_main]

use arbitrary::Arbitrary;
use nes6502::{lookup, ExecutionError, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction and operands at 0x8000
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.write_u16(0xFFFC, 0x8000);
    memory.write_u16(0xFFFE, 0x9000);
    memory.write_u16(0xFFFA, 0xA000);

    let mut cpu = CPU::new(memory);
    let mem = cpu.memory_mut();
    mem.load(0x8000, &input.memory.instruction_bytes);
    mem.load(0x0000, &input.memory.zero_page);
    mem.load(0x0100, &input.memory.stack_page);
    mem.load(0x4000, &input.memory.main_memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    let before = cpu.registers();

    match cpu.step() {
        Ok(step) => {
            let metadata = lookup(opcode).expect("executed opcode must be in the table");
            assert_eq!(step.opcode, opcode);
            assert!(step.cycles >= metadata.base_cycles);
            assert!(step.cycles <= metadata.base_cycles + 1);
            assert_eq!(cpu.cycles(), step.cycles as u64);
        }
        Err(ExecutionError::UnknownOpcode { opcode: op, address }) => {
            assert_eq!(op, opcode);
            assert_eq!(address, 0x8000);
            assert!(lookup(opcode).is_none());
            assert_eq!(cpu.registers(), before);
            assert_eq!(cpu.cycles(), 0);
        }
    }

    // Bit 5 of P always reads 1
    assert_eq!(cpu.status() & 0x20, 0x20);
});
