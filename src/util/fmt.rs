use std::fmt::{self, Debug, Formatter};

/// Wraps an already formatted string so that [`Debug`] writes it verbatim, without the quotes and
/// escaping a [`String`] would get.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
