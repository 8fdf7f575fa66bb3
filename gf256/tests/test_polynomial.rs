use gf256::field::polynomial::{Polynomial, carryless_mul, mul_mod, reduce, write_polynomial};

/// Стандартный модуль AES: x⁸ + x⁴ + x³ + x + 1
const AES_MODULUS: u16 = 0x11B;
const FIELD_MODULUS: u16 = 0x1C3;

fn render(bits: u16) -> String {
    let mut text = String::new();
    write_polynomial(&mut text, bits).unwrap();
    text
}

#[test]
fn test_carryless_mul_basic() {
    assert_eq!(carryless_mul(0, 0xFF), 0);
    assert_eq!(carryless_mul(1, 0xAB), 0xAB);
    // (x + 1)(x + 1) = x² + 1, без переноса
    assert_eq!(carryless_mul(0b11, 0b11), 0b101);
    assert_eq!(carryless_mul(0x57, 0x83), 0x2B79);
}

#[test]
fn test_carryless_mul_commutative() {
    let values = [1u8, 2, 3, 0x10, 0x57, 0x83, 0xAA, 0xFF];
    for &a in &values {
        for &b in &values {
            assert_eq!(carryless_mul(a, b), carryless_mul(b, a), "{} * {}", a, b);
        }
    }
}

#[test]
fn test_reduce_below_degree_eight_is_identity() {
    for byte in 0..=255u16 {
        assert_eq!(reduce(byte, FIELD_MODULUS) as u16, byte);
    }
}

#[test]
fn test_reduce_leading_term() {
    // x^8 ≡ x^7 + x^6 + x + 1
    assert_eq!(reduce(0x100, FIELD_MODULUS), 0xC3);
    assert_eq!(reduce(0x100, AES_MODULUS), 0x1B);
}

#[test]
fn test_mul_mod_known_values() {
    // FIPS-197, раздел 4.2
    assert_eq!(mul_mod(0x57, 0x83, AES_MODULUS), 0xC1);
    assert_eq!(mul_mod(0x80, 0x02, FIELD_MODULUS), 0xC3);
    assert_eq!(mul_mod(0xFF, 0xFF, FIELD_MODULUS), 0x06);
    assert_eq!(mul_mod(0x03, 0x07, FIELD_MODULUS), 0x09);
}

#[test]
fn test_write_polynomial() {
    assert_eq!(render(0), "0");
    assert_eq!(render(0b1), "1");
    assert_eq!(render(0b10), "x");
    assert_eq!(render(0b1001), "x^3 + 1");
    assert_eq!(render(0xFF), "x^7 + x^6 + x^5 + x^4 + x^3 + x^2 + x + 1");
}

#[test]
fn test_polynomial_display_of_modulus() {
    assert_eq!(Polynomial(FIELD_MODULUS).to_string(), "x^8 + x^7 + x^6 + x + 1");
    assert_eq!(Polynomial(AES_MODULUS).to_string(), "x^8 + x^4 + x^3 + x + 1");
}
