//! Clientes HTTP de APIs externas

pub mod legacy_client;

pub use legacy_client::{LegacyApi, LegacyClient, LegacyError, LegacyReply};
