//! Player credentials sent with every request.

use derive_new::new;

/// Player identifier (IDUL) and secret token.
#[derive(Clone, PartialEq, Eq, new)]
pub struct Credentials {
    idul: String,
    secret: String,
}

impl Credentials {
    /// Gets the player identifier.
    pub fn idul(&self) -> &str {
        &self.idul
    }

    /// Gets the secret token.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("idul", &self.idul)
            .field("secret", &"***")
            .finish()
    }
}
