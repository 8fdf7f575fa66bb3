//! Арифметика конечного поля GF(256) = GF(2)[x] / (x^8 + x^7 + x^6 + x + 1).
//!
//! Умножение, деление, возведение в степень и обращение выполняются через
//! таблицы дискретных логарифмов, сложение — обычный XOR байтов.

pub mod field;
pub mod suite;

pub use field::config::{DEFAULT_PARAMETERS, FieldParameters};
pub use field::element::{
    Element, inv, neutral_mult_element, pow, primitive_root, to_string_as_polynom, zero_element,
};
pub use field::tables::{RepresentationTables, TABLES, TableError};
pub use suite::benchmark::{BenchmarkConfig, BenchmarkReport, run_benchmark, run_benchmark_with};
pub use suite::reference::{Galois8, ReferenceField, ShiftAndAdd};
pub use suite::self_check::{run_self_check, run_self_check_to, run_self_check_with};
