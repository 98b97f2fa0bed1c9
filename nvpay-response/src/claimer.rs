/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The field-claimer contract.

use nvpay_nvp::ResponseFieldPool;

/// A typed decoder that extracts its fixed key set from the shared pool.
///
/// Claiming transfers ownership: every owned key found in the pool is removed,
/// so later claimers and the extended-data list never observe it. A missing
/// key means absent (`None`) in the typed result, not a failure.
pub trait FieldClaimer: Sized {
    /// The fixed set of keys this claimer owns.
    const KEYS: &'static [&'static str];

    /// Builds the typed result, removing every owned key from `pool`.
    fn claim(pool: &mut ResponseFieldPool) -> Self;
}
