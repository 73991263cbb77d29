//! Types and pure logic shared by the `backend` proxy server and the Yew
//! `frontend`.
//!
//! Nothing in this crate touches the network or the DOM, so the list-view
//! derivation and session rules are tested natively here and reused verbatim
//! by the wasm client.

pub mod listing;
pub mod model;
pub mod requests;
pub mod routes;
pub mod session;
