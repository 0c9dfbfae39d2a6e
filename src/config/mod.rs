//! JSON configuration for the bank tooling.

pub mod bank;
