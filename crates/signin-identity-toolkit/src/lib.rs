//! Backend authentication service over the Identity Toolkit REST API.

mod client;
mod wire;

pub use client::IdentityToolkitClient;
