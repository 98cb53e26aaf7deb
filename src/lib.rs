// Library target exists for the criterion benchmarks and integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// harnesses can import types via `attendr::engine::*` / `attendr::roster::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by benchmarks and tests/
pub mod engine;
pub mod feedback;
pub mod roster;

// Private: required transitively by the app modules
mod app;
mod config;
mod event;
mod ui;
