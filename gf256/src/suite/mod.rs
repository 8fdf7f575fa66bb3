//! Самопроверка и замер производительности, вызываемые из командной строки.

pub mod benchmark;
pub mod reference;
pub mod self_check;

pub use self::benchmark::{BenchmarkConfig, BenchmarkReport, run_benchmark, run_benchmark_with};
pub use self::reference::{Galois8, ReferenceField, ShiftAndAdd};
pub use self::self_check::{run_self_check, run_self_check_to, run_self_check_with};
