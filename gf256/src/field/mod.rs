//! Поле GF(256): параметры, таблицы представлений и сам элемент поля.

pub mod config;
pub mod element;
pub mod polynomial;
pub mod tables;

pub use self::element::Element;
pub use self::tables::{RepresentationTables, TABLES};
