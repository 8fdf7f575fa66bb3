use crate::field::polynomial::Polynomial;

/// Параметры поля: неприводимый модуль степени 8 и порождающий элемент
/// мультипликативной группы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParameters {
    /// Полный модуль, бит 8 установлен: 0x1C3 = x^8 + x^7 + x^6 + x + 1
    pub polynomial: u16,
    /// Аддитивное представление примитивного корня
    pub generator: u8,
}

/// Модуль x^8 + x^7 + x^6 + x + 1, примитивный корень x.
pub const DEFAULT_PARAMETERS: FieldParameters = FieldParameters {
    polynomial: 0x1C3,
    generator: 0x02,
};

impl FieldParameters {
    /// Текстовое описание реализации (печатается по `-h`).
    pub fn describe(&self) -> String {
        format!(
            "This GF256 is implemented as a GF(2)[x] / ({}) factor ring\nPrimitive root is {}",
            Polynomial(self.polynomial),
            Polynomial(u16::from(self.generator)),
        )
    }
}

impl Default for FieldParameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}
