// Adapters layer: concrete implementations of the domain ports.

pub mod http;
#[cfg(test)]
pub(crate) mod recording;
