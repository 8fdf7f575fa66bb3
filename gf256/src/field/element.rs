use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::field::config::DEFAULT_PARAMETERS;
use crate::field::polynomial::write_polynomial;
use crate::field::tables::{GROUP_ORDER, NO_LOG, TABLES};

const ORDER: u16 = GROUP_ORDER as u16;

/// Элемент GF(256).
///
/// Хранит аддитивное представление (байт) и кэш дискретного логарифма.
/// Результаты умножения, деления, степени и обращения получают логарифм
/// бесплатно. У суммы кэш пуст (`NO_LOG`): сложение не обращается
/// к таблицам, логарифм ищется, только когда он понадобится.
///
/// Равенство, порядок и хэш определяются только байтом, кэш на них
/// не влияет.
#[derive(Clone, Copy)]
pub struct Element {
    additive: u8,
    log: u8,
}

impl Element {
    /// Аддитивный ноль
    pub const ZERO: Element = Element { additive: 0, log: NO_LOG };
    /// Мультипликативная единица, g^0
    pub const ONE: Element = Element { additive: 1, log: 0 };
    /// Примитивный корень g, его логарифм равен 1 по построению таблиц
    pub const PRIMITIVE_ROOT: Element = Element {
        additive: DEFAULT_PARAMETERS.generator,
        log: 1,
    };

    /// Элемент с заданным аддитивным представлением.
    pub fn new(additive: u8) -> Self {
        Self {
            additive,
            log: TABLES.log_of(additive),
        }
    }

    /// Элемент из целого числа: чётные дают ноль, нечётные — единицу.
    ///
    /// Это не вложение целых чисел в поле, а приведение по модулю
    /// характеристики: байт 3 получается только через [`Element::new`].
    pub const fn from_int(value: i64) -> Self {
        if value & 1 == 0 { Self::ZERO } else { Self::ONE }
    }

    #[inline]
    fn from_log(log: u16) -> Self {
        debug_assert!(log < ORDER);
        Self {
            additive: TABLES.antilog_of(log as u8),
            log: log as u8,
        }
    }

    #[inline]
    fn log(self) -> u16 {
        let log = if self.log != NO_LOG {
            self.log
        } else {
            TABLES.log_of(self.additive)
        };
        u16::from(log)
    }

    pub const fn is_zero(self) -> bool {
        self.additive == 0
    }

    /// Возведение в целую степень, отрицательные показатели допустимы.
    ///
    /// Логарифм результата — `(log(e) * n) mod 255`, приведённый в [0, 254].
    /// Ноль в неотрицательной степени даёт ноль, в отрицательной — паника,
    /// как у [`Element::inverse`].
    pub fn pow(self, power: i32) -> Self {
        if self.is_zero() {
            if power < 0 {
                panic!("inversion of the zero element");
            }
            return Self::ZERO;
        }
        let exponent = power.rem_euclid(i32::from(ORDER)) as u32;
        let log = (u32::from(self.log()) * exponent) % u32::from(ORDER);
        Self::from_log(log as u16)
    }

    /// Мультипликативный обратный.
    ///
    /// # Panics
    ///
    /// У нуля обратного нет.
    pub fn inverse(self) -> Self {
        match self.checked_inverse() {
            Some(inverse) => inverse,
            None => panic!("inversion of the zero element"),
        }
    }

    pub fn checked_inverse(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(Self::from_log((ORDER - self.log()) % ORDER))
    }

    /// Деление; `None`, если делитель — ноль (в том числе 0 / 0).
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        Some(Self::from_log((self.log() + ORDER - rhs.log()) % ORDER))
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u8> for Element {
    fn from(additive: u8) -> Self {
        Self::new(additive)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.additive == other.additive
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.additive.cmp(&other.additive)
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.additive.hash(state);
    }
}

impl Add for Element {
    type Output = Element;

    fn add(self, rhs: Element) -> Element {
        Element {
            additive: self.additive ^ rhs.additive,
            log: NO_LOG,
        }
    }
}

// Характеристика 2: a - b == a + b
impl Sub for Element {
    type Output = Element;

    fn sub(self, rhs: Element) -> Element {
        self + rhs
    }
}

impl Neg for Element {
    type Output = Element;

    fn neg(self) -> Element {
        self
    }
}

impl Mul for Element {
    type Output = Element;

    fn mul(self, rhs: Element) -> Element {
        if self.is_zero() || rhs.is_zero() {
            return Element::ZERO;
        }
        Element::from_log((self.log() + rhs.log()) % ORDER)
    }
}

impl Div for Element {
    type Output = Element;

    fn div(self, rhs: Element) -> Element {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("division by the zero element"),
        }
    }
}

impl AddAssign for Element {
    fn add_assign(&mut self, rhs: Element) {
        *self = *self + rhs;
    }
}

impl SubAssign for Element {
    fn sub_assign(&mut self, rhs: Element) {
        *self = *self - rhs;
    }
}

impl MulAssign for Element {
    fn mul_assign(&mut self, rhs: Element) {
        *self = *self * rhs;
    }
}

impl DivAssign for Element {
    fn div_assign(&mut self, rhs: Element) {
        *self = *self / rhs;
    }
}

impl Sum for Element {
    fn sum<I: Iterator<Item = Element>>(iter: I) -> Element {
        iter.fold(Element::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Element> for Element {
    fn sum<I: Iterator<Item = &'a Element>>(iter: I) -> Element {
        iter.copied().sum()
    }
}

impl Product for Element {
    fn product<I: Iterator<Item = Element>>(iter: I) -> Element {
        iter.fold(Element::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Element> for Element {
    fn product<I: Iterator<Item = &'a Element>>(iter: I) -> Element {
        iter.copied().product()
    }
}

/// Полиномиальная запись: `x^3 + 1`, `x`, `1`, `0`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_polynomial(f, u16::from(self.additive))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({:#04x})", self.additive)
    }
}

pub const fn zero_element() -> Element {
    Element::ZERO
}

pub const fn neutral_mult_element() -> Element {
    Element::ONE
}

pub const fn primitive_root() -> Element {
    Element::PRIMITIVE_ROOT
}

pub fn pow(base: Element, power: i32) -> Element {
    base.pow(power)
}

pub fn inv(element: Element) -> Element {
    element.inverse()
}

pub fn to_string_as_polynom(element: Element) -> String {
    element.to_string()
}
