//! services/api/src/web/session.rs
//!
//! Tamper-evident session cookie values. There is exactly one valid token
//! value system-wide (`"ok"`); possession of a correctly signed copy of it is
//! the whole admin session model. Cookies are signed with HMAC-SHA256 and
//! carried as `<value>.<hex mac>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the admin session cookie.
pub const COOKIE_NAME: &str = "study_admin";

/// The single valid session token value.
pub const TOKEN_VALUE: &str = "ok";

/// Signs and verifies session cookie values with a shared secret.
#[derive(Clone)]
pub struct CookieSigner {
    secret: Vec<u8>,
}

impl CookieSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    fn mac_hex(&self, value: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take a key of any length");
        mac.update(value.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Produces the signed cookie value for `value`.
    pub fn sign(&self, value: &str) -> String {
        format!("{}.{}", value, self.mac_hex(value))
    }

    /// Recovers the original value from a signed cookie value, returning
    /// `None` for unsigned, malformed, or tampered input.
    pub fn verify(&self, signed: &str) -> Option<String> {
        let (value, mac) = signed.rsplit_once('.')?;
        // Constant-time comparison via the Mac verify API.
        let mut check = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take a key of any length");
        check.update(value.as_bytes());
        let provided = hex::decode(mac).ok()?;
        check.verify_slice(&provided).ok()?;
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_round_trips() {
        let signer = CookieSigner::new("change-this-secret-key");
        let signed = signer.sign(TOKEN_VALUE);
        assert_eq!(signer.verify(&signed).as_deref(), Some(TOKEN_VALUE));
    }

    #[test]
    fn verify_rejects_unsigned_and_malformed_values() {
        let signer = CookieSigner::new("s3cret");
        assert_eq!(signer.verify("ok"), None);
        assert_eq!(signer.verify("ok.not-hex"), None);
        assert_eq!(signer.verify(""), None);
    }

    #[test]
    fn verify_rejects_tampered_values() {
        let signer = CookieSigner::new("s3cret");
        let signed = signer.sign(TOKEN_VALUE);
        let tampered = signed.replacen("ok", "no", 1);
        assert_eq!(signer.verify(&tampered), None);
    }

    #[test]
    fn verify_rejects_signatures_from_another_secret() {
        let ours = CookieSigner::new("s3cret");
        let theirs = CookieSigner::new("other-secret");
        assert_eq!(ours.verify(&theirs.sign(TOKEN_VALUE)), None);
    }
}
