//! Таблицы перехода между аддитивным (байт) и мультипликативным
//! (дискретный логарифм) представлениями элементов поля.

use thiserror::Error;

use crate::field::config::{DEFAULT_PARAMETERS, FieldParameters};
use crate::field::polynomial::mul_mod;

/// Порядок мультипликативной группы GF(256).
pub const GROUP_ORDER: usize = 255;

/// Метка отсутствия логарифма: у нуля дискретного логарифма нет.
pub const NO_LOG: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("modulus {polynomial:#05x} is not a polynomial of degree 8")]
    NotDegreeEight { polynomial: u16 },
    #[error("orbit of the generator reached zero at step {step}, the modulus is reducible")]
    ZeroProduct { step: usize },
    #[error("orbit of the generator closes after {length} steps instead of 255")]
    ShortCycle { length: usize },
    #[error("orbit of the generator did not return to 1 after 255 steps (stopped at {last:#04x})")]
    NotClosed { last: u8 },
}

/// Пара таблиц `log_of` / `antilog_of`.
///
/// `log_of[0] == NO_LOG`, для остальных байтов `antilog_of[log_of[b]] == b`.
/// В `antilog_of` 256 ячеек: последняя повторяет нулевую (g^255 = 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationTables {
    log_of: [u8; 256],
    antilog_of: [u8; 256],
}

impl RepresentationTables {
    /// Строит таблицы, последовательно умножая единицу на `generator`
    /// по модулю `polynomial`.
    ///
    /// За 255 шагов орбита обязана обойти все ненулевые байты ровно один раз
    /// и вернуться в 1, иначе либо модуль приводим, либо `generator`
    /// не порождает группу.
    pub const fn build(polynomial: u16, generator: u8) -> Result<Self, TableError> {
        if polynomial >> 8 != 1 {
            return Err(TableError::NotDegreeEight { polynomial });
        }

        let mut log_of = [NO_LOG; 256];
        let mut antilog_of = [0u8; 256];
        let mut current: u8 = 1;
        let mut step = 0;

        while step < GROUP_ORDER {
            if current == 0 {
                return Err(TableError::ZeroProduct { step });
            }
            if log_of[current as usize] != NO_LOG {
                return Err(TableError::ShortCycle { length: step });
            }
            log_of[current as usize] = step as u8;
            antilog_of[step] = current;
            current = mul_mod(current, generator, polynomial);
            step += 1;
        }

        if current != 1 {
            return Err(TableError::NotClosed { last: current });
        }
        antilog_of[GROUP_ORDER] = 1;

        Ok(Self { log_of, antilog_of })
    }

    pub const fn from_parameters(parameters: FieldParameters) -> Result<Self, TableError> {
        Self::build(parameters.polynomial, parameters.generator)
    }

    /// Дискретный логарифм байта; для нуля — `NO_LOG`.
    #[inline]
    pub const fn log_of(&self, additive: u8) -> u8 {
        self.log_of[additive as usize]
    }

    #[inline]
    pub const fn antilog_of(&self, log: u8) -> u8 {
        self.antilog_of[log as usize]
    }
}

/// Таблицы поля с параметрами по умолчанию.
///
/// Вычисляются при компиляции: неподходящая пара модуль/корень
/// останавливает сборку.
pub static TABLES: RepresentationTables =
    match RepresentationTables::from_parameters(DEFAULT_PARAMETERS) {
        Ok(tables) => tables,
        Err(_) => panic!("field parameters do not generate the multiplicative group of GF(256)"),
    };
