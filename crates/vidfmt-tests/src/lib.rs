//! Integration tests for vidfmt crates.
//!
//! Properties checked here hold for the whole descriptor table rather than
//! for single formats, so they live outside the per-module unit tests.
