//! Typed client for the swaprouter contract.
//!
//! [`SwaprouterQueryClient`] wraps any [`WasmClient`] and exposes the contract
//! queries. [`SwaprouterClient`] embeds a query client over a
//! [`SigningWasmClient`] and adds the contract's execute messages.
//!
//! [`WasmClient`]: swaprouter_chain_client_utils::cosmos::wasm_client::WasmClient
//! [`SigningWasmClient`]: swaprouter_chain_client_utils::cosmos::wasm_client::SigningWasmClient

pub mod client;
pub mod query_client;

#[cfg(test)]
mod testing;

pub use client::SwaprouterClient;
pub use query_client::SwaprouterQueryClient;
