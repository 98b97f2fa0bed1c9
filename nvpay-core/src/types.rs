/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Transaction vocabulary for gateway requests.
//!
//! This module provides:
//! - [`TrxType`]: transaction type letter (TRXTYPE)
//! - [`TenderType`]: payment method letter (TENDER)
//! - [`TransactionFamily`]: the branch the response claimer pipeline takes
//! - [`GatewayRequest`]: trait tying a request object to its family

use crate::error::VocabError;
use crate::field::ContributesFields;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction type (TRXTYPE parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrxType {
    /// Sale (S): authorize and capture in one step.
    #[default]
    Sale,
    /// Authorization (A): reserve funds without capturing.
    Authorization,
    /// Credit (C): refund a prior transaction.
    Credit,
    /// Delayed Capture (D): capture a prior authorization.
    DelayedCapture,
    /// Void (V): cancel an uncaptured transaction.
    Void,
    /// Voice Authorization (F): record an auth code obtained by phone.
    VoiceAuth,
    /// Inquiry (I): look up the state of a prior transaction.
    Inquiry,
    /// Recurring (R): manage a recurring billing profile.
    Recurring,
}

impl TrxType {
    /// Returns the wire letter for this transaction type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "S",
            Self::Authorization => "A",
            Self::Credit => "C",
            Self::DelayedCapture => "D",
            Self::Void => "V",
            Self::VoiceAuth => "F",
            Self::Inquiry => "I",
            Self::Recurring => "R",
        }
    }

    /// Returns the claimer-pipeline branch this type belongs to.
    #[must_use]
    pub const fn family(self) -> TransactionFamily {
        match self {
            Self::Recurring => TransactionFamily::Recurring,
            _ => TransactionFamily::General,
        }
    }
}

impl FromStr for TrxType {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::Sale),
            "A" => Ok(Self::Authorization),
            "C" => Ok(Self::Credit),
            "D" => Ok(Self::DelayedCapture),
            "V" => Ok(Self::Void),
            "F" => Ok(Self::VoiceAuth),
            "I" => Ok(Self::Inquiry),
            "R" => Ok(Self::Recurring),
            other => Err(VocabError::UnknownTrxType(other.to_string())),
        }
    }
}

impl fmt::Display for TrxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method (TENDER parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenderType {
    /// Credit or purchase card (C).
    CreditCard,
    /// Automated clearing house (A).
    Ach,
    /// PayPal account (P).
    PayPal,
}

impl TenderType {
    /// Returns the wire letter for this tender type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "C",
            Self::Ach => "A",
            Self::PayPal => "P",
        }
    }
}

impl FromStr for TenderType {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::CreditCard),
            "A" => Ok(Self::Ach),
            "P" => Ok(Self::PayPal),
            other => Err(VocabError::UnknownTenderType(other.to_string())),
        }
    }
}

impl fmt::Display for TenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The branch the response claimer pipeline takes after the generic claimers.
///
/// Recurring-family responses run the Recurring claimer; every other family
/// runs the four ExpressCheckout claimers, since the caller does not declare
/// in advance which EC action produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionFamily {
    /// Recurring billing profile operations.
    Recurring,
    /// Everything else, including the ExpressCheckout actions.
    General,
}

/// A typed request object the client facade can submit.
pub trait GatewayRequest: ContributesFields {
    /// Returns the claimer-pipeline branch for responses to this request.
    fn family(&self) -> TransactionFamily;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trx_type_round_trip() {
        for trx in [
            TrxType::Sale,
            TrxType::Authorization,
            TrxType::Credit,
            TrxType::DelayedCapture,
            TrxType::Void,
            TrxType::VoiceAuth,
            TrxType::Inquiry,
            TrxType::Recurring,
        ] {
            assert_eq!(trx.as_str().parse::<TrxType>().unwrap(), trx);
        }
    }

    #[test]
    fn test_trx_type_unknown() {
        assert!(matches!(
            "X".parse::<TrxType>(),
            Err(VocabError::UnknownTrxType(_))
        ));
    }

    #[test]
    fn test_family_branch() {
        assert_eq!(TrxType::Recurring.family(), TransactionFamily::Recurring);
        assert_eq!(TrxType::Sale.family(), TransactionFamily::General);
        assert_eq!(TrxType::Inquiry.family(), TransactionFamily::General);
    }

    #[test]
    fn test_tender_type_letters() {
        assert_eq!(TenderType::CreditCard.to_string(), "C");
        assert_eq!("P".parse::<TenderType>().unwrap(), TenderType::PayPal);
        assert!("Z".parse::<TenderType>().is_err());
    }
}
