use reed_solomon_erasure::galois_8;

use crate::field::config::{DEFAULT_PARAMETERS, FieldParameters};
use crate::field::polynomial::mul_mod;

/// Сторонняя реализация GF(256) над байтами, с которой сравнивается
/// скорость в бенчмарке.
pub trait ReferenceField {
    fn name(&self) -> &str;
    fn add(&self, a: u8, b: u8) -> u8;
    fn mul(&self, a: u8, b: u8) -> u8;
    fn inv(&self, a: u8) -> u8;

    fn supports_pow(&self) -> bool {
        false
    }

    /// `None`, если реализация не умеет возводить в степень.
    fn pow(&self, _base: u8, _power: u32) -> Option<u8> {
        None
    }
}

/// Табличная арифметика `galois_8` из `reed-solomon-erasure`.
///
/// Поле построено по модулю 0x11D, поэтому результаты не совпадают с
/// нашими и годятся только для сравнения времени.
#[derive(Debug, Clone, Copy, Default)]
pub struct Galois8;

impl ReferenceField for Galois8 {
    fn name(&self) -> &str {
        "reed-solomon-erasure"
    }

    fn add(&self, a: u8, b: u8) -> u8 {
        galois_8::add(a, b)
    }

    fn mul(&self, a: u8, b: u8) -> u8 {
        galois_8::mul(a, b)
    }

    /// Для нуля паникует, как и `galois_8::div`.
    fn inv(&self, a: u8) -> u8 {
        galois_8::div(1, a)
    }

    fn supports_pow(&self) -> bool {
        true
    }

    fn pow(&self, base: u8, power: u32) -> Option<u8> {
        Some(galois_8::exp(base, power as usize))
    }
}

/// Умножение без таблиц: сдвиг и сложение с редукцией по модулю поля.
#[derive(Debug, Clone, Copy)]
pub struct ShiftAndAdd {
    polynomial: u16,
}

impl ShiftAndAdd {
    pub fn new(parameters: FieldParameters) -> Self {
        Self {
            polynomial: parameters.polynomial,
        }
    }

    // быстрое возведение в степень (square-and-multiply)
    fn power(&self, base: u8, power: u32) -> u8 {
        let mut result = 1u8;
        let mut base = base;
        let mut exponent = power;
        while exponent > 0 {
            if exponent & 1 != 0 {
                result = mul_mod(result, base, self.polynomial);
            }
            base = mul_mod(base, base, self.polynomial);
            exponent >>= 1;
        }
        result
    }
}

impl Default for ShiftAndAdd {
    fn default() -> Self {
        Self::new(DEFAULT_PARAMETERS)
    }
}

impl ReferenceField for ShiftAndAdd {
    fn name(&self) -> &str {
        "shift-and-add"
    }

    fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    fn mul(&self, a: u8, b: u8) -> u8 {
        mul_mod(a, b, self.polynomial)
    }

    /// a^-1 = a^254, для нуля возвращает 0.
    fn inv(&self, a: u8) -> u8 {
        self.power(a, 254)
    }

    fn supports_pow(&self) -> bool {
        true
    }

    fn pow(&self, base: u8, power: u32) -> Option<u8> {
        Some(self.power(base, power))
    }
}
