//! Cross-component tests with crate access.
