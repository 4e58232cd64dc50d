use crate::certification::verified_tier;
use anyhow::Result;

/// Public certificate verification: bucket an issued certificate's score into
/// a display tier. No SDK gate applies here.
pub fn run_verify(score: f64) -> Result<()> {
    let tier = verified_tier(score);
    log::info!("verified certificate score {score} as {}", tier.as_str());
    println!("{}", tier.as_str());
    Ok(())
}
