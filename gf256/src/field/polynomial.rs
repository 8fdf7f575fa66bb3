//! Полиномы над GF(2), упакованные в биты: бит i — коэффициент при x^i.
//!
//! Здесь только то, что нужно до появления таблиц: умножение без переносов
//! и редукция по модулю степени 8. Всё `const fn`, так как таблицы строятся
//! на этапе компиляции.

use std::fmt;

/// Произведение полиномов над GF(2): сложение заменено на XOR, переносов нет.
pub const fn carryless_mul(a: u8, b: u8) -> u16 {
    let mut result = 0u16;
    let mut shifted = a as u16;
    let mut rest = b;
    while rest != 0 {
        if rest & 1 != 0 {
            result ^= shifted;
        }
        shifted <<= 1;
        rest >>= 1;
    }
    result
}

/// Остаток от деления произведения (степень не выше 14) на модуль степени 8.
///
/// Модуль обязан иметь старший бит 8, иначе результат не имеет смысла.
pub const fn reduce(product: u16, modulus: u16) -> u8 {
    let mut rest = product;
    let mut bit = 14;
    while bit >= 8 {
        if rest & (1 << bit) != 0 {
            rest ^= modulus << (bit - 8);
        }
        bit -= 1;
    }
    rest as u8
}

/// (a * b) mod modulus
pub const fn mul_mod(a: u8, b: u8, modulus: u16) -> u8 {
    reduce(carryless_mul(a, b), modulus)
}

/// Запись полинома в виде `x^k + ... + x + 1`, ноль записывается как `0`.
pub fn write_polynomial<W: fmt::Write>(out: &mut W, bits: u16) -> fmt::Result {
    if bits == 0 {
        return out.write_char('0');
    }
    let mut first = true;
    for degree in (0..u16::BITS).rev() {
        if (bits >> degree) & 1 == 0 {
            continue;
        }
        if !first {
            out.write_str(" + ")?;
        }
        first = false;
        match degree {
            0 => out.write_char('1')?,
            1 => out.write_char('x')?,
            k => write!(out, "x^{}", k)?,
        }
    }
    Ok(())
}

/// Обёртка для печати упакованного полинома через `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polynomial(pub u16);

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_polynomial(f, self.0)
    }
}
