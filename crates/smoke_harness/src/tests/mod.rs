//! Crate-level tests exercising the whole harness against the fake backend
