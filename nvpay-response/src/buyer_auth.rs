/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Buyer-authentication (3-D Secure) response fields.

use crate::claimer::FieldClaimer;
use nvpay_nvp::ResponseFieldPool;

/// Typed view of the buyer-authentication handshake results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerAuthResponse {
    /// Access-control server URL to redirect the cardholder to.
    pub acsurl: Option<String>,
    /// Authentication transaction id.
    pub authentication_id: Option<String>,
    /// Authentication status letter.
    pub authentication_status: Option<String>,
    /// Cardholder authentication verification value.
    pub cavv: Option<String>,
    /// Electronic commerce indicator.
    pub eci: Option<String>,
    /// Merchant data blob echoed through the redirect.
    pub md: Option<String>,
    /// Payer authentication request blob.
    pub pareq: Option<String>,
    /// Authentication transaction identifier from the card network.
    pub xid: Option<String>,
}

impl FieldClaimer for BuyerAuthResponse {
    const KEYS: &'static [&'static str] = &[
        "ACSURL",
        "AUTHENTICATION_ID",
        "AUTHENTICATION_STATUS",
        "CAVV",
        "ECI",
        "MD",
        "PAREQ",
        "XID",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            acsurl: pool.take("ACSURL"),
            authentication_id: pool.take("AUTHENTICATION_ID"),
            authentication_status: pool.take("AUTHENTICATION_STATUS"),
            cavv: pool.take("CAVV"),
            eci: pool.take("ECI"),
            md: pool.take("MD"),
            pareq: pool.take("PAREQ"),
            xid: pool.take("XID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_auth_claim() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("ACSURL", "https://acs.example/pareq".to_string());
        pool.insert("ECI", "05".to_string());

        let auth = BuyerAuthResponse::claim(&mut pool);
        assert_eq!(auth.acsurl.as_deref(), Some("https://acs.example/pareq"));
        assert_eq!(auth.eci.as_deref(), Some("05"));
        assert_eq!(auth.cavv, None);
        assert!(pool.is_empty());
    }
}
