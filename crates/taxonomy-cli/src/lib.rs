//! Reusable pieces of the course taxonomy CLI.

pub mod logging;
