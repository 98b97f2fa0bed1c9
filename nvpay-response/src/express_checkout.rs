/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! ExpressCheckout response fields.
//!
//! The caller does not declare in advance which EC action produced a response,
//! so the pipeline attempts all four claimers in Get, Set, Do, Update order.
//! Their key sets are disjoint by convention; ownership transfer through the
//! pool guarantees at-most-once observation either way.

use crate::claimer::FieldClaimer;
use nvpay_nvp::ResponseFieldPool;

/// Fields returned by the GetExpressCheckoutDetails action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcGetResponse {
    /// Buyer's email address.
    pub email: Option<String>,
    /// Buyer's payer id.
    pub payerid: Option<String>,
    /// Buyer's account status.
    pub payerstatus: Option<String>,
    /// Buyer's first name.
    pub firstname: Option<String>,
    /// Buyer's last name.
    pub lastname: Option<String>,
    /// Shipping recipient name.
    pub shiptoname: Option<String>,
    /// Shipping street address.
    pub shiptostreet: Option<String>,
    /// Shipping city.
    pub shiptocity: Option<String>,
    /// Shipping state or province.
    pub shiptostate: Option<String>,
    /// Shipping postal code.
    pub shiptozip: Option<String>,
    /// Shipping country.
    pub shiptocountry: Option<String>,
    /// Buyer's country code.
    pub countrycode: Option<String>,
    /// Address confirmation status.
    pub addrstatus: Option<String>,
    /// Buyer's phone number.
    pub phonenum: Option<String>,
    /// Billing-agreement acceptance flag.
    pub ba_flag: Option<String>,
}

impl FieldClaimer for EcGetResponse {
    const KEYS: &'static [&'static str] = &[
        "EMAIL",
        "PAYERID",
        "PAYERSTATUS",
        "FIRSTNAME",
        "LASTNAME",
        "SHIPTONAME",
        "SHIPTOSTREET",
        "SHIPTOCITY",
        "SHIPTOSTATE",
        "SHIPTOZIP",
        "SHIPTOCOUNTRY",
        "COUNTRYCODE",
        "ADDRSTATUS",
        "PHONENUM",
        "BA_FLAG",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            email: pool.take("EMAIL"),
            payerid: pool.take("PAYERID"),
            payerstatus: pool.take("PAYERSTATUS"),
            firstname: pool.take("FIRSTNAME"),
            lastname: pool.take("LASTNAME"),
            shiptoname: pool.take("SHIPTONAME"),
            shiptostreet: pool.take("SHIPTOSTREET"),
            shiptocity: pool.take("SHIPTOCITY"),
            shiptostate: pool.take("SHIPTOSTATE"),
            shiptozip: pool.take("SHIPTOZIP"),
            shiptocountry: pool.take("SHIPTOCOUNTRY"),
            countrycode: pool.take("COUNTRYCODE"),
            addrstatus: pool.take("ADDRSTATUS"),
            phonenum: pool.take("PHONENUM"),
            ba_flag: pool.take("BA_FLAG"),
        }
    }
}

/// Fields returned by the SetExpressCheckout action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcSetResponse {
    /// Session token to redirect the buyer with.
    pub token: Option<String>,
}

impl FieldClaimer for EcSetResponse {
    const KEYS: &'static [&'static str] = &["TOKEN"];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            token: pool.take("TOKEN"),
        }
    }
}

/// Fields returned by the DoExpressCheckoutPayment action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcDoResponse {
    /// PayPal-side transaction reference.
    pub ppref: Option<String>,
    /// Fee charged on the payment.
    pub feeamt: Option<String>,
    /// Amount deposited after fees.
    pub settleamt: Option<String>,
    /// Exchange rate applied, for cross-currency payments.
    pub exchangerate: Option<String>,
    /// Date the payment was made.
    pub paymentdate: Option<String>,
    /// Status of the payment.
    pub paymentstatus: Option<String>,
    /// Billing-agreement id created by the payment.
    pub baid: Option<String>,
}

impl FieldClaimer for EcDoResponse {
    const KEYS: &'static [&'static str] = &[
        "PPREF",
        "FEEAMT",
        "SETTLEAMT",
        "EXCHANGERATE",
        "PAYMENTDATE",
        "PAYMENTSTATUS",
        "BAID",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            ppref: pool.take("PPREF"),
            feeamt: pool.take("FEEAMT"),
            settleamt: pool.take("SETTLEAMT"),
            exchangerate: pool.take("EXCHANGERATE"),
            paymentdate: pool.take("PAYMENTDATE"),
            paymentstatus: pool.take("PAYMENTSTATUS"),
            baid: pool.take("BAID"),
        }
    }
}

/// Fields returned by the UpdateExpressCheckout action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcUpdateResponse {
    /// Updated billing-agreement status.
    pub ba_status: Option<String>,
    /// Updated billing-agreement description.
    pub ba_desc: Option<String>,
}

impl FieldClaimer for EcUpdateResponse {
    const KEYS: &'static [&'static str] = &["BA_STATUS", "BA_DESC"];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            ba_status: pool.take("BA_STATUS"),
            ba_desc: pool.take("BA_DESC"),
        }
    }
}

/// The four ExpressCheckout views claimed from one general-family response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressCheckoutResponse {
    /// GetExpressCheckoutDetails fields.
    pub get: EcGetResponse,
    /// SetExpressCheckout fields.
    pub set: EcSetResponse,
    /// DoExpressCheckoutPayment fields.
    pub do_payment: EcDoResponse,
    /// UpdateExpressCheckout fields.
    pub update: EcUpdateResponse,
}

impl ExpressCheckoutResponse {
    /// Claims all four EC views in Get, Set, Do, Update order.
    #[must_use]
    pub fn claim_all(pool: &mut ResponseFieldPool) -> Self {
        Self {
            get: EcGetResponse::claim(pool),
            set: EcSetResponse::claim(pool),
            do_payment: EcDoResponse::claim(pool),
            update: EcUpdateResponse::claim(pool),
        }
    }
}
