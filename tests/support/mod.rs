// tests/support/mod.rs
// The helpers and mocks modules are shared by several integration test
// binaries; not every binary uses every symbol.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
