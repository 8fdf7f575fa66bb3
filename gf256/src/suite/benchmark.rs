//! Замер скорости сложения, умножения, степени и обращения на полном
//! попарном произведении псевдослучайной выборки.
//!
//! Только диагностика: корректность результатов здесь не проверяется.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{debug, error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::field::element::Element;
use crate::suite::reference::{Galois8, ReferenceField};

/// Байт, которым заменяется ноль в выборке для обращения.
const INVERTIBLE_SUBSTITUTE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Размер выборки; каждая секция делает `elements^2` операций
    pub elements: usize,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            elements: 10_000,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTiming {
    pub name: &'static str,
    pub operations: u64,
    pub elapsed_ms: u128,
    /// `None`, если эталон не задан или не реализует операцию
    pub reference_ms: Option<u128>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub sections: Vec<SectionTiming>,
}

impl BenchmarkReport {
    pub fn section(&self, name: &str) -> Option<&SectionTiming> {
        self.sections.iter().find(|section| section.name == name)
    }
}

struct Workload {
    elements: Vec<Element>,
    bytes: Vec<u8>,
    invertible: Vec<Element>,
    invertible_bytes: Vec<u8>,
}

impl Workload {
    fn generate(config: &BenchmarkConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut workload = Workload {
            elements: Vec::with_capacity(config.elements),
            bytes: Vec::with_capacity(config.elements),
            invertible: Vec::with_capacity(config.elements),
            invertible_bytes: Vec::with_capacity(config.elements),
        };

        for _ in 0..config.elements {
            let byte: u8 = rng.random();
            workload.elements.push(Element::new(byte));
            workload.bytes.push(byte);

            let byte = if byte == 0 { INVERTIBLE_SUBSTITUTE } else { byte };
            workload.invertible.push(Element::new(byte));
            workload.invertible_bytes.push(byte);
        }
        workload
    }
}

/// Замер одной секции до вывода в отчёт.
struct Measurement {
    name: &'static str,
    noun: &'static str,
    operations: u64,
    elapsed: Duration,
    reference_elapsed: Option<Duration>,
}

fn measure<F: FnMut()>(mut body: F) -> Duration {
    let start = Instant::now();
    body();
    start.elapsed()
}

/// Бенчмарк с настройками по умолчанию и сравнением с [`Galois8`].
pub fn run_benchmark() {
    let reference: &dyn ReferenceField = &Galois8;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_benchmark_with(&BenchmarkConfig::default(), Some(reference), &mut out) {
        error!("failed to write benchmark report: {}", err);
    }
}

pub fn run_benchmark_with(
    config: &BenchmarkConfig,
    reference: Option<&dyn ReferenceField>,
    out: &mut dyn Write,
) -> io::Result<BenchmarkReport> {
    writeln!(out, "{:=^75}", "BENCHMARK SUITE")?;
    if let Some(reference) = reference {
        writeln!(out, "Comparing with {} implementation", reference.name())?;
    }

    debug!(
        "generating workload of {} elements with seed {}",
        config.elements, config.seed
    );
    let workload = Workload::generate(config);
    let operations = (config.elements as u64) * (config.elements as u64);
    let mut report = BenchmarkReport::default();

    let elapsed = measure(|| {
        for &a in &workload.elements {
            for &b in &workload.elements {
                black_box(a + b);
            }
        }
    });
    let reference_elapsed = reference.map(|reference| {
        measure(|| {
            for &a in &workload.bytes {
                for &b in &workload.bytes {
                    black_box(reference.add(a, b));
                }
            }
        })
    });
    let addition = Measurement {
        name: "ADDITION",
        noun: "additions",
        operations,
        elapsed,
        reference_elapsed,
    };
    push_section(out, &mut report, reference, addition)?;

    let elapsed = measure(|| {
        for &a in &workload.elements {
            for &b in &workload.elements {
                black_box(a * b);
            }
        }
    });
    let reference_elapsed = reference.map(|reference| {
        measure(|| {
            for &a in &workload.bytes {
                for &b in &workload.bytes {
                    black_box(reference.mul(a, b));
                }
            }
        })
    });
    let multiplication = Measurement {
        name: "MULTIPLICATION",
        noun: "multiplications",
        operations,
        elapsed,
        reference_elapsed,
    };
    push_section(out, &mut report, reference, multiplication)?;

    let elapsed = measure(|| {
        for &base in &workload.elements {
            for power in 0..workload.elements.len() {
                black_box(base.pow(power as i32));
            }
        }
    });
    let reference_elapsed = reference
        .filter(|reference| reference.supports_pow())
        .map(|reference| {
            measure(|| {
                for &base in &workload.bytes {
                    for power in 0..workload.bytes.len() {
                        black_box(reference.pow(base, power as u32));
                    }
                }
            })
        });
    let power = Measurement {
        name: "POWER",
        noun: "powers",
        operations,
        elapsed,
        reference_elapsed,
    };
    push_section(out, &mut report, reference, power)?;

    let elapsed = measure(|| {
        for i in 0..workload.invertible.len() {
            for &element in &workload.invertible {
                black_box(element.inverse());
                black_box(i);
            }
        }
    });
    let reference_elapsed = reference.map(|reference| {
        measure(|| {
            for i in 0..workload.invertible_bytes.len() {
                for &byte in &workload.invertible_bytes {
                    black_box(reference.inv(byte));
                    black_box(i);
                }
            }
        })
    });
    let inversion = Measurement {
        name: "INVERSION",
        noun: "inversions",
        operations,
        elapsed,
        reference_elapsed,
    };
    push_section(out, &mut report, reference, inversion)?;

    Ok(report)
}

fn push_section(
    out: &mut dyn Write,
    report: &mut BenchmarkReport,
    reference: Option<&dyn ReferenceField>,
    measurement: Measurement,
) -> io::Result<()> {
    writeln!(out, "SECTION: {}", measurement.name)?;
    writeln!(out, "  Performing {} {}", measurement.operations, measurement.noun)?;
    writeln!(out, "  GF256 time: {}", measurement.elapsed.as_millis())?;
    if let Some(reference) = reference {
        match measurement.reference_elapsed {
            Some(time) => writeln!(out, "  {} time: {}", reference.name(), time.as_millis())?,
            None => writeln!(out, "  {} time: NOT IMPLEMENTED", reference.name())?,
        }
    }
    debug!(
        "section {} finished in {:?}",
        measurement.name, measurement.elapsed
    );

    report.sections.push(SectionTiming {
        name: measurement.name,
        operations: measurement.operations,
        elapsed_ms: measurement.elapsed.as_millis(),
        reference_ms: measurement.reference_elapsed.map(|time| time.as_millis()),
    });
    Ok(())
}
