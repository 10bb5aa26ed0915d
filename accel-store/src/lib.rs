#![deny(clippy::all)]

mod moka_store;

pub use moka_store::MokaQuoteStore;
