//! Cross-compiling the proxy binary.
//!
//! `build` drives the release table, `build_386` is the fixed single-target
//! build. Both go through [`invoke::Runner`] so the loop can be exercised
//! without a toolchain.

pub mod build;
pub mod build_386;
pub mod invoke;
pub mod report;
pub mod targets;
