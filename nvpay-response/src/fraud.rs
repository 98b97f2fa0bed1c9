/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fraud-filter response fields.

use crate::claimer::FieldClaimer;
use nvpay_nvp::ResponseFieldPool;

/// Typed view of the fraud-filter screening results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FraudResponse {
    /// Filter message for the pre-processing screen.
    pub prefpsmsg: Option<String>,
    /// Filter message for the post-processing screen.
    pub postfpsmsg: Option<String>,
    /// Raw XML detail for the pre-processing screen.
    pub fps_prexmldata: Option<String>,
    /// Raw XML detail for the post-processing screen.
    pub fps_postxmldata: Option<String>,
}

impl FieldClaimer for FraudResponse {
    const KEYS: &'static [&'static str] = &[
        "PREFPSMSG",
        "POSTFPSMSG",
        "FPS_PREXMLDATA",
        "FPS_POSTXMLDATA",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            prefpsmsg: pool.take("PREFPSMSG"),
            postfpsmsg: pool.take("POSTFPSMSG"),
            fps_prexmldata: pool.take("FPS_PREXMLDATA"),
            fps_postxmldata: pool.take("FPS_POSTXMLDATA"),
        }
    }
}
