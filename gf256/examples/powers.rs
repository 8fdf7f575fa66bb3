// examples/powers.rs

use gf256::{DEFAULT_PARAMETERS, Element, primitive_root};

fn main() {
    println!("{}", DEFAULT_PARAMETERS.describe());
    println!();

    // Таблица степеней примитивного корня
    let root = primitive_root();
    for i in 0..16 {
        let power = root.pow(i);
        println!("x^{:<3} = {:<40} inverse = {}", i, power.to_string(), power.inverse());
    }

    let a = Element::new(0x57);
    let b = Element::new(0x83);
    println!();
    println!("({}) + ({}) = {}", a, b, a + b);
    println!("({}) * ({}) = {}", a, b, a * b);
    println!("({}) / ({}) = {}", a, b, a / b);
}
