//! Fingerprint generator
//!
//! The banking backend exposes no persistent transaction ID, so a stateless
//! fingerprint is recomputed from the transaction's text and date fields on
//! every run.
//!
//! The monetary value is deliberately not part of the fingerprint: two
//! transactions that share name, purpose, date and currency but differ in
//! amount get the same fingerprint.

use crate::types::{Fingerprint, NormalizedTransaction};

const DJB2_SEED: u64 = 5381;

/// djb2 string hash with wrapping `u64` arithmetic
///
/// `h = 5381; for each byte c: h = h * 33 + c`
pub fn djb2(input: &str) -> u64 {
    input.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

/// Hash of an optional field; absent hashes like the empty string
fn hash_field(field: Option<&str>) -> u64 {
    djb2(field.unwrap_or(""))
}

/// Compute the fingerprint of a normalized transaction
///
/// Sum (wrapping) of the per-field djb2 hashes of remote name, purpose,
/// formatted date and currency. An unresolved date hashes as its epoch
/// placeholder, i.e. the same text the listing prints.
pub fn fingerprint(transaction: &NormalizedTransaction) -> Fingerprint {
    let date = transaction.formatted_date();
    let hash = hash_field(transaction.remote_name.as_deref())
        .wrapping_add(hash_field(transaction.purpose.as_deref()))
        .wrapping_add(djb2(&date))
        .wrapping_add(hash_field(transaction.currency.as_deref()));
    Fingerprint(hash)
}
