//! # fablab_core
//!
//! Core chat logic for the FabLab UTMN site: canned-reply classification
//! and the relay to the chat-completion provider.

pub mod classifier;
pub mod facts;
pub mod provider;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
