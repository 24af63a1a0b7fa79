//! Tests for JMP, JSR and RTS.
//!
//! Includes the indirect JMP page-wrap bug: a pointer at $xxFF takes its high byte from
//! $xx00 of the same page.

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]);

    let step = cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(step.cycles, 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0x20, 0x01]);
    cpu.memory_mut().write_u16(0x0120, 0xC000);

    let step = cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(step.cycles, 5);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x30]);
    cpu.memory_mut().write(0x30FF, 0x80);
    cpu.memory_mut().write(0x3000, 0x50);
    cpu.memory_mut().write(0x3100, 0x40);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x5080);
}

#[test]
fn test_jsr_pushes_last_operand_address() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);

    let step = cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.memory().read(0x01FC), 0x02);
    assert_eq!(step.cycles, 6);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    // JSR $9000 ; LDX #$01        $9000: LDA #$42 ; RTS
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90, 0xA2, 0x01]);
    cpu.memory_mut().load(0x9000, &[0xA9, 0x42, 0x60]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    let rts = cpu.step().unwrap();
    assert_eq!(rts.cycles, 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.cycles(), 6 + 2 + 6 + 2);
}

#[test]
fn test_nested_subroutines() {
    let mut cpu = setup_cpu();
    // $8000: JSR $8100        $8100: JSR $8200 ; RTS        $8200: RTS
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x81]);
    cpu.memory_mut().load(0x8100, &[0x20, 0x00, 0x82, 0x60]);
    cpu.memory_mut().write(0x8200, 0x60);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0xF9);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8103);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    let before = cpu.registers();

    let step = cpu.step().unwrap();
    assert_eq!(step.cycles, 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), before.a);
    assert_eq!(cpu.status(), before.p.to_byte());
}
