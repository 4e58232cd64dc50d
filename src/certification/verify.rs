//! Tier bucketing for the public certificate-verification endpoint.
//!
//! A certificate being verified was already issued, so there is no "none"
//! tier and no SDK gate here. Keep this separate from
//! [`CertificationGrader`](super::CertificationGrader): the two contracts
//! look similar but answer different questions ("what tier is this
//! certificate" vs "does this system certify at all"), and their thresholds
//! are maintained independently.

use super::CertificationLevel;

/// Bucket an issued certificate's score into a display tier.
pub fn verified_tier(score: f64) -> CertificationLevel {
    if score >= 95.0 {
        CertificationLevel::Gold
    } else if score >= 85.0 {
        CertificationLevel::Silver
    } else {
        CertificationLevel::Bronze
    }
}
