/// Ordered, zero-indexed sequence of display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameTable(&'static [&'static str]);

/// Month names, `enero` at index 0.
pub const MONTHS: NameTable = NameTable::new(&[
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
]);

/// Weekday names, `domingo` at index 0.
pub const WEEKDAYS: NameTable = NameTable::new(&[
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
]);

impl NameTable {
    /// Wraps a static list of names.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self(names)
    }

    /// Returns name at `index`, or `None` if the index is out of the table.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.0.get(index).copied()
    }

    /// Number of names in the table.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no names.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }
}
