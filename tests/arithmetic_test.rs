//! Tests for ADC and SBC.
//!
//! Tests cover:
//! - Carry in and carry out
//! - Signed overflow in both directions
//! - Binary arithmetic with the decimal flag set
//! - Memory addressing modes and their cycle costs

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn adc_immediate(a: u8, operand: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

fn sbc_immediate(a: u8, operand: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE9, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

// ========== ADC ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc_immediate(0x10, 0x05, false);
    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc_immediate(0x10, 0x05, true);
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_positive_overflow() {
    let cpu = adc_immediate(0x7F, 0x01, false);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_carry_out_to_zero() {
    let cpu = adc_immediate(0x01, 0xFF, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_negative_overflow() {
    let cpu = adc_immediate(0x80, 0x80, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_unsigned_carry_without_overflow() {
    let cpu = adc_immediate(0xC0, 0xC4, false);
    assert_eq!(cpu.a(), 0x84);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_flag_d(true);
    cpu.set_a(0x09);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

#[test]
fn test_adc_zero_page_x_and_absolute_y() {
    let mut cpu = setup_cpu();
    // ADC $10,X ; ADC $02FF,Y
    cpu.memory_mut().load(0x8000, &[0x75, 0x10, 0x79, 0xFF, 0x02]);
    cpu.memory_mut().write(0x0012, 0x03);
    cpu.memory_mut().write(0x0300, 0x04);
    cpu.set_x(0x02);
    cpu.set_y(0x01);
    cpu.set_a(0x01);

    assert_eq!(cpu.step().unwrap().cycles, 4);
    assert_eq!(cpu.a(), 0x04);
    assert_eq!(cpu.step().unwrap().cycles, 5);
    assert_eq!(cpu.a(), 0x08);
}

// ========== SBC ==========

#[test]
fn test_sbc_no_borrow() {
    let cpu = sbc_immediate(0x50, 0x10, true);
    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_with_borrow_in() {
    let cpu = sbc_immediate(0x50, 0x10, false);
    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let cpu = sbc_immediate(0x10, 0x20, true);
    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_equal_is_zero() {
    let cpu = sbc_immediate(0x42, 0x42, true);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_overflow() {
    let cpu = sbc_immediate(0x80, 0x01, true);
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());

    let cpu = sbc_immediate(0x7F, 0xFF, true);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_indirect_y() {
    let mut cpu = setup_cpu();
    // SBC ($30),Y
    cpu.memory_mut().load(0x8000, &[0xF1, 0x30]);
    cpu.memory_mut().write_u16(0x0030, 0x0400);
    cpu.memory_mut().write(0x0402, 0x01);
    cpu.set_y(0x02);
    cpu.set_a(0x03);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step().unwrap().cycles, 5);
    assert_eq!(cpu.a(), 0x02);
}
