#![forbid(unsafe_code)]

pub mod cli;
pub mod greeting;
pub mod logging;
