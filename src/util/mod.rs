pub mod fmt;
#[cfg(test)]
pub mod hash;
