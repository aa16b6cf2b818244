//! Code shared between the dashboard clients and the backend

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
mod macros;
pub mod req_args;
pub mod session;
pub mod token;
pub mod uac;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
