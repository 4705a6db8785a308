use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of trailing characters left visible when a masked value is printed.
const VISIBLE_TAIL: usize = 4;

/// Wraps personal data (customer phone numbers, mostly) so it does not leak through
/// `{:?}` or `{}` in log lines. Serialization still emits the real value, since
/// the courier view needs the number to call the customer.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the underlying value. Callers own the decision to display it.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

fn redact(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= VISIBLE_TAIL {
        return "*".repeat(chars.len());
    }
    let hidden = chars.len() - VISIBLE_TAIL;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{}", "*".repeat(hidden), tail)
}

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", redact(&self.0.to_string()))
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(&self.0.to_string()))
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
