//! Authenticator contract shared by generated applications.

use serde_json::Value;

/// Turns raw credentials into a user.
///
/// `validate` checks the shape of an untyped payload (typically a request
/// body) and produces typed credentials; `authenticate` looks the user up.
/// Returning `None` means the credentials are well-formed but do not match
/// any user.
pub trait Authenticator {
    type Credentials;
    type User;
    type Error;

    fn validate(&self, payload: &Value) -> Result<Self::Credentials, Self::Error>;

    fn authenticate(&self, credentials: &Self::Credentials) -> Option<Self::User>;

    /// Validate then authenticate in one call.
    fn login(&self, payload: &Value) -> Result<Option<Self::User>, Self::Error> {
        let credentials = self.validate(payload)?;
        Ok(self.authenticate(&credentials))
    }
}
