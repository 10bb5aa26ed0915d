#![deny(clippy::all)]

pub mod domain;
pub mod ops;
pub mod ports;
