//! Самопроверка поля: цикличность группы, согласованность умножения,
//! обращения, деления и сложения.

use std::collections::HashSet;
use std::io::{self, Write};

use log::{error, info};

use crate::field::element::{Element, neutral_mult_element, primitive_root};

const RULE: &str = "===========================================================================";

/// Запускает самопроверку с выводом в stdout.
pub fn run_self_check() -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_self_check_to(&mut out) {
        Ok(passed) => passed,
        Err(err) => {
            error!("failed to write self-check transcript: {}", err);
            false
        }
    }
}

/// Запускает самопроверку, записывая протокол в `out`.
pub fn run_self_check_to<W: Write>(out: &mut W) -> io::Result<bool> {
    run_self_check_with(primitive_root(), out)
}

/// Самопроверка относительно произвольного корня `root`.
///
/// Проверка останавливается на первой проваленной секции. Для любого
/// элемента, кроме порождающего, проваливается уже секция POWER.
pub fn run_self_check_with<W: Write>(root: Element, out: &mut W) -> io::Result<bool> {
    writeln!(out, "{:=^75}", "TEST SUITE")?;

    let passed = check_power(root, out)?
        && check_multiplication(root, out)?
        && check_inverse(out)?
        && check_division(root, out)?
        && check_addition(root, out)?;

    writeln!(out, "{}", RULE)?;
    if passed {
        writeln!(out, "TEST RESULT: OK!")?;
        info!("self-check passed");
    } else {
        writeln!(out, "TEST RESULT: ERROR!")?;
        error!("self-check failed");
    }
    Ok(passed)
}

fn section_passed<W: Write>(out: &mut W, section: &str) -> io::Result<bool> {
    writeln!(out, "SECTION RESULT: {}: OK!", section)?;
    info!("section {} passed", section);
    Ok(true)
}

fn section_failed<W: Write>(out: &mut W, section: &str, reason: &str) -> io::Result<bool> {
    writeln!(out, "SECTION RESULT: {}: ERROR: {}", section, reason)?;
    error!("section {} failed: {}", section, reason);
    Ok(false)
}

fn verdict(ok: bool) -> &'static str {
    if ok { "OK" } else { "ERROR" }
}

/// Имя корня для протокола; многочленные корни берутся в скобки.
fn root_label(root: Element) -> String {
    let text = root.to_string();
    if text.contains(' ') { format!("({})", text) } else { text }
}

// g^0 ... g^254 попарно различны
fn check_power<W: Write>(root: Element, out: &mut W) -> io::Result<bool> {
    writeln!(out, "SECTION: POWER")?;
    let label = root_label(root);
    let mut seen = HashSet::with_capacity(255);

    for i in 0..255 {
        let power = root.pow(i);
        writeln!(out, "  {}^{} = {}", label, i, power)?;
        if !seen.insert(power) {
            return section_failed(
                out,
                "POWER",
                &format!("{} is not a generator of the multiplicative group", label),
            );
        }
    }
    section_passed(out, "POWER")
}

// накопленное произведение g * g * ... совпадает с g^i
fn check_multiplication<W: Write>(root: Element, out: &mut W) -> io::Result<bool> {
    writeln!(out, "SECTION: MULTIPLICATION")?;
    let label = root_label(root);
    let mut product = neutral_mult_element();

    for i in 1..=255 {
        let previous = product;
        product *= root;
        let ok = root.pow(i) == product;
        writeln!(
            out,
            "  {}^{} = ({}) * {} = {} : {}",
            label,
            i,
            previous,
            label,
            product,
            verdict(ok)
        )?;
        if !ok {
            return section_failed(out, "MULTIPLICATION", "multiplication produced wrong result");
        }
    }
    section_passed(out, "MULTIPLICATION")
}

fn check_inverse<W: Write>(out: &mut W) -> io::Result<bool> {
    writeln!(out, "SECTION: INVERSE")?;
    let one = neutral_mult_element();
    let mut inverses = HashSet::with_capacity(255);

    for byte in 1..=255u8 {
        let element = Element::new(byte);
        let inverse = element.inverse();
        let product = element * inverse;
        let ok = product == one;
        writeln!(out, "  ({})^-1 = {}", element, inverse)?;
        writeln!(
            out,
            "  ({}) * ({}) = {} : {}",
            element,
            inverse,
            product,
            verdict(ok)
        )?;
        if !ok {
            return section_failed(out, "INVERSE", "inverse * base != 1");
        }
        if !inverses.insert(inverse) {
            return section_failed(out, "INVERSE", "inverse operation is not bijective");
        }
    }
    section_passed(out, "INVERSE")
}

// 1 / g / g / ... совпадает с (g^-1)^i
fn check_division<W: Write>(root: Element, out: &mut W) -> io::Result<bool> {
    writeln!(out, "SECTION: DIVISION")?;
    let label = root_label(root);
    let inverse_root = root.inverse();
    let mut quotient = neutral_mult_element();

    for i in 1..=255 {
        let previous = quotient;
        quotient /= root;
        let ok = inverse_root.pow(i) == quotient;
        writeln!(
            out,
            "  {}^-{} = ({}) / {} = {} : {}",
            label,
            i,
            previous,
            label,
            quotient,
            verdict(ok)
        )?;
        if !ok {
            return section_failed(out, "DIVISION", "division produced wrong result");
        }
    }
    section_passed(out, "DIVISION")
}

// 1 + g + ... + g^n == (g^(n+1) - 1) / (g - 1)
fn check_addition<W: Write>(root: Element, out: &mut W) -> io::Result<bool> {
    writeln!(out, "SECTION: ADDITION")?;
    let label = root_label(root);
    let one = neutral_mult_element();
    let denominator = root - one;
    let mut sum = Element::ZERO;

    for n in 0..=254 {
        sum += root.pow(n);
        let expected = (root.pow(n + 1) - one) / denominator;
        let ok = sum == expected;
        writeln!(out, "  1 + ... + {}^{} = {} : {}", label, n, sum, verdict(ok))?;
        if !ok {
            return section_failed(out, "ADDITION", "addition produced wrong result");
        }
    }
    section_passed(out, "ADDITION")
}
