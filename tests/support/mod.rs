// tests/support/mod.rs
// Shared helpers and mocks used by multiple integration test binaries. Some
// symbols are unused in individual test crates, which would otherwise produce
// dead_code warnings.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
