//! # Flag Engine
//!
//! Pure arithmetic and flag rules shared by the instruction implementations. Nothing here
//! touches the CPU; every function maps inputs to a result plus the flags it defines.
//!
//! The 2A03 has no BCD circuitry, so ADC and SBC are always binary regardless of the
//! decimal flag.

/// Result of an ALU operation and the flags it produces.
///
/// Flags an operation does not define are `None` and must be left untouched by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub carry: Option<bool>,
    pub overflow: Option<bool>,
    pub negative: bool,
    pub zero: bool,
}

impl AluResult {
    fn with_nz(value: u8) -> Self {
        let (negative, zero) = nz(value);
        Self {
            value,
            carry: None,
            overflow: None,
            negative,
            zero,
        }
    }
}

/// Negative and zero flags for `value`: N is bit 7, Z is `value == 0`.
pub fn nz(value: u8) -> (bool, bool) {
    (value & 0x80 != 0, value == 0)
}

/// Add with carry.
///
/// Carry is bit 8 of the 9-bit sum. Overflow is set when both inputs share a sign that
/// differs from the result's.
pub fn adc(a: u8, operand: u8, carry_in: bool) -> AluResult {
    let sum = a as u16 + operand as u16 + carry_in as u16;
    let result = sum as u8;

    AluResult {
        carry: Some(sum > 0xFF),
        overflow: Some((operand ^ result) & (a ^ result) & 0x80 != 0),
        ..AluResult::with_nz(result)
    }
}

/// Subtract with borrow, where borrow = 1 - carry.
///
/// Carry set afterwards means no borrow occurred. Overflow is set when the operands have
/// different signs and the result's sign differs from the accumulator's.
pub fn sbc(a: u8, operand: u8, carry_in: bool) -> AluResult {
    let borrow = (!carry_in) as i16;
    let diff = a as i16 - operand as i16 - borrow;
    let result = diff as u8;

    AluResult {
        carry: Some(diff >= 0),
        overflow: Some((a ^ operand) & (a ^ result) & 0x80 != 0),
        ..AluResult::with_nz(result)
    }
}

/// CMP/CPX/CPY: `register - operand` without storing the difference.
///
/// Carry is set when no borrow occurs (`register >= operand`). Overflow is untouched.
pub fn compare(register: u8, operand: u8) -> AluResult {
    AluResult {
        carry: Some(register >= operand),
        ..AluResult::with_nz(register.wrapping_sub(operand))
    }
}

/// Flags produced by BIT: `(negative, overflow, zero)`.
///
/// N and V are copied from bits 7 and 6 of the operand; Z reflects `a & operand`.
pub fn bit(a: u8, operand: u8) -> (bool, bool, bool) {
    (operand & 0x80 != 0, operand & 0x40 != 0, a & operand == 0)
}

pub fn and(a: u8, operand: u8) -> AluResult {
    AluResult::with_nz(a & operand)
}

pub fn ora(a: u8, operand: u8) -> AluResult {
    AluResult::with_nz(a | operand)
}

pub fn eor(a: u8, operand: u8) -> AluResult {
    AluResult::with_nz(a ^ operand)
}

/// Arithmetic shift left: bit 7 goes to carry, bit 0 becomes 0.
pub fn asl(value: u8) -> AluResult {
    AluResult {
        carry: Some(value & 0x80 != 0),
        ..AluResult::with_nz(value << 1)
    }
}

/// Logical shift right: bit 0 goes to carry, bit 7 becomes 0.
pub fn lsr(value: u8) -> AluResult {
    AluResult {
        carry: Some(value & 0x01 != 0),
        ..AluResult::with_nz(value >> 1)
    }
}

/// Rotate left through carry.
pub fn rol(value: u8, carry_in: bool) -> AluResult {
    AluResult {
        carry: Some(value & 0x80 != 0),
        ..AluResult::with_nz((value << 1) | carry_in as u8)
    }
}

/// Rotate right through carry.
pub fn ror(value: u8, carry_in: bool) -> AluResult {
    AluResult {
        carry: Some(value & 0x01 != 0),
        ..AluResult::with_nz((value >> 1) | ((carry_in as u8) << 7))
    }
}

/// Increment or decrement by `delta`, wrapping modulo 256.
pub fn step_by(value: u8, delta: i8) -> AluResult {
    AluResult::with_nz(value.wrapping_add_signed(delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nz_for_all_bytes() {
        for v in 0..=u8::MAX {
            let (n, z) = nz(v);
            assert_eq!(n, v >= 0x80);
            assert_eq!(z, v == 0);
        }
    }

    #[test]
    fn test_adc_signed_overflow() {
        let r = adc(0x7F, 0x01, false);
        assert_eq!(r.value, 0x80);
        assert_eq!(r.overflow, Some(true));
        assert_eq!(r.carry, Some(false));
        assert!(r.negative);
        assert!(!r.zero);
    }

    #[test]
    fn test_adc_unsigned_carry() {
        let r = adc(0xC0, 0xC4, false);
        assert_eq!(r.value, 0x84);
        assert_eq!(r.carry, Some(true));
        assert_eq!(r.overflow, Some(false));
        assert!(r.negative);

        let r = adc(0xFF, 0x00, true);
        assert_eq!(r.value, 0x00);
        assert_eq!(r.carry, Some(true));
        assert!(r.zero);
    }

    #[test]
    fn test_adc_negative_overflow() {
        // -128 + -1 = +127 with overflow
        let r = adc(0x80, 0xFF, false);
        assert_eq!(r.value, 0x7F);
        assert_eq!(r.overflow, Some(true));
        assert_eq!(r.carry, Some(true));
    }

    #[test]
    fn test_sbc_no_borrow() {
        let r = sbc(0x50, 0x10, true);
        assert_eq!(r.value, 0x40);
        assert_eq!(r.carry, Some(true));
        assert_eq!(r.overflow, Some(false));
    }

    #[test]
    fn test_sbc_borrow_in_and_out() {
        let r = sbc(0x00, 0x00, false);
        assert_eq!(r.value, 0xFF);
        assert_eq!(r.carry, Some(false));
        assert!(r.negative);

        let r = sbc(0x10, 0x20, true);
        assert_eq!(r.value, 0xF0);
        assert_eq!(r.carry, Some(false));
    }

    #[test]
    fn test_sbc_overflow() {
        // +80 - (-48) = +128 overflows
        let r = sbc(0x50, 0xD0, true);
        assert_eq!(r.value, 0x80);
        assert_eq!(r.overflow, Some(true));

        // -128 - 1 = -129 overflows
        let r = sbc(0x80, 0x01, true);
        assert_eq!(r.value, 0x7F);
        assert_eq!(r.overflow, Some(true));
    }

    #[test]
    fn test_sbc_matches_adc_of_complement() {
        for a in [0x00, 0x01, 0x7F, 0x80, 0xC3, 0xFF] {
            for m in [0x00, 0x01, 0x40, 0x7F, 0x80, 0xFE] {
                for c in [false, true] {
                    assert_eq!(sbc(a, m, c), adc(a, !m, c), "a={a:02X} m={m:02X} c={c}");
                }
            }
        }
    }

    #[test]
    fn test_compare() {
        let r = compare(0x40, 0x40);
        assert_eq!(r.carry, Some(true));
        assert!(r.zero);
        assert_eq!(r.overflow, None);

        let r = compare(0x40, 0x41);
        assert_eq!(r.carry, Some(false));
        assert!(r.negative);
        assert!(!r.zero);

        let r = compare(0x01, 0xFF);
        assert_eq!(r.carry, Some(false));
        assert_eq!(r.value, 0x02);
    }

    #[test]
    fn test_bit() {
        assert_eq!(bit(0x01, 0xC0), (true, true, true));
        assert_eq!(bit(0xFF, 0x01), (false, false, false));
        assert_eq!(bit(0x00, 0x40), (false, true, true));
    }

    #[test]
    fn test_shifts_and_rotates() {
        assert_eq!(asl(0x81).value, 0x02);
        assert_eq!(asl(0x81).carry, Some(true));
        assert_eq!(lsr(0x01).value, 0x00);
        assert!(lsr(0x01).zero);
        assert_eq!(rol(0x80, true).value, 0x01);
        assert_eq!(rol(0x80, true).carry, Some(true));
        assert_eq!(ror(0x01, true).value, 0x80);
        assert!(ror(0x01, true).negative);
    }

    #[test]
    fn test_step_by_wraps() {
        assert_eq!(step_by(0xFF, 1).value, 0x00);
        assert!(step_by(0xFF, 1).zero);
        assert_eq!(step_by(0x00, -1).value, 0xFF);
        assert!(step_by(0x00, -1).negative);
    }
}
