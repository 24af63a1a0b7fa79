//! Tests for INC, DEC, INX, INY, DEX and DEY.

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_inc_zero_page_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE6, 0x20]);
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.set_flag_c(false);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xFE, 0x00, 0x03]);
    cpu.memory_mut().write(0x0305, 0x7F);
    cpu.set_x(0x05);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0305), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_dec_absolute_to_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCE, 0x00, 0x02]);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0200), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_dec_zero_page_x_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xD6, 0x10]);
    cpu.memory_mut().write(0x0013, 0x01);
    cpu.set_x(0x03);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0013), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inx_iny_wrap() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE8, 0xC8]);
    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_dex_dey_wrap() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCA, 0x88]);
    cpu.set_x(0x00);
    cpu.set_y(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}
