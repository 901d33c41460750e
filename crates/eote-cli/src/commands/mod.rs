pub mod analyze;
pub mod cancel;
pub mod roll;

use eote_dice::DicePool;

/// Parse a pool string, mapping errors to a printable message.
fn parse_pool(codes: &str) -> Result<DicePool, String> {
    let pool = DicePool::from_codes(codes.trim()).map_err(|e| e.to_string())?;
    if pool.is_empty() {
        return Err("dice pool is empty".into());
    }
    Ok(pool)
}
