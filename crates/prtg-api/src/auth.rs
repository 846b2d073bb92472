use secrecy::{ExposeSecret, SecretString};

/// The secret half of a PRTG login.
///
/// PRTG accepts either the account password or its pre-computed passhash.
/// Exactly one of the two is sent with every request.
#[derive(Debug, Clone)]
pub enum Secret {
    /// Plain account password, sent as `password=`.
    Password(SecretString),
    /// Pre-hashed password, sent as `passhash=`.
    PassHash(SecretString),
}

/// Credentials attached to every PRTG API request.
///
/// PRTG has no session: the username and secret travel in the query string
/// of each call.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    secret: Secret,
}

impl Credentials {
    /// Authenticate with a username and password.
    pub fn password(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            secret: Secret::Password(password),
        }
    }

    /// Authenticate with a username and passhash.
    pub fn passhash(username: impl Into<String>, passhash: SecretString) -> Self {
        Self {
            username: username.into(),
            secret: Secret::PassHash(passhash),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The query parameters that carry these credentials.
    pub(crate) fn query_pairs(&self) -> [(&'static str, &str); 2] {
        let secret = match &self.secret {
            Secret::Password(pw) => ("password", pw.expose_secret()),
            Secret::PassHash(hash) => ("passhash", hash.expose_secret()),
        };
        [("username", self.username.as_str()), secret]
    }
}
