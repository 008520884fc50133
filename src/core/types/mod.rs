//! Value types handed to key encoders.
//!
//! - [`Password`] - Validated, zeroizing password bytes
//! - [`KeySerializationEncryption`] - How a private key is protected at rest
//! - [`TunedEncryption`] - Builder-produced encryption with KDF tuning

mod encryption;
mod password;

pub use encryption::{KeySerializationEncryption, TunedEncryption};
pub use password::Password;
