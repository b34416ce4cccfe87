//! HTTP API
//!
//! Calls to the Heartmap host.

pub mod client;

pub use client::*;
