//! Tests for PHA, PHP, PLA and PLP.

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA ; LDA #$00 ; PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x9C);

    assert_eq!(cpu.step().unwrap().cycles, 3);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.memory().read(0x01FD), 0x9C);

    cpu.step().unwrap();
    assert!(cpu.flag_z());

    assert_eq!(cpu.step().unwrap().cycles, 4);
    assert_eq!(cpu.a(), 0x9C);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0b1100_0011);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FD), 0b1111_0011);
    assert_eq!(cpu.sp(), 0xFC);
}

#[test]
fn test_plp_ignores_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FE, 0b1100_1011);
    cpu.set_flag_b(false);

    assert_eq!(cpu.step().unwrap().cycles, 4);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(!cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_b());
    assert_eq!(cpu.status() & 0x20, 0x20);
}

#[test]
fn test_plp_keeps_current_break_bit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FE, 0x00);
    assert!(cpu.flag_b());

    cpu.step().unwrap();
    assert!(cpu.flag_b());
    assert_eq!(cpu.status(), 0b0011_0000);
}

#[test]
fn test_push_wraps_through_page_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x48, 0x48]);
    cpu.set_sp(0x00);
    cpu.set_a(0x77);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0100), 0x77);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x77);
    assert_eq!(cpu.sp(), 0xFE);
}
