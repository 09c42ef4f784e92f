//! Foundation utilities shared by the harness
//!
//! - **Logging**: `log` facade bootstrap
//! - **Time**: tick-based second counting and frame statistics

pub mod logging;
pub mod time;
