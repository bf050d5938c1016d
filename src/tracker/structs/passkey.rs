//! User passkey.

/// The 32-character opaque passkey identifying and authenticating a user.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Passkey(pub [u8; 32]);
