//! Display adapters for monetary amounts, percentages and slices.

use std::fmt::{Display, Formatter};

/// Monetary amount with a currency symbol, e.g. `$77.28` or `-$24.32`. The sign is
/// hoisted ahead of the symbol.
pub struct DisplayCurrency<'a> {
    pub value: f64,
    pub symbol: &'a str,
}
impl Display for DisplayCurrency<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value.is_sign_negative() {
            write!(f, "-{}{:.2}", self.symbol, -self.value)
        } else {
            write!(f, "{}{:.2}", self.symbol, self.value)
        }
    }
}

pub struct DisplayPercent(pub f64);
impl Display for DisplayPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}
impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let len = self.items.len();
        for (index, item) in self.items.iter().enumerate() {
            write!(f, "{item}")?;
            if index != len - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}
