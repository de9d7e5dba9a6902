//! Review rating coercion
//!
//! Stored ratings are either empty or an integer in `[MIN_RATING, MAX_RATING]`.
//! Display ratings are in `[0, MAX_RATING]` with a missing rating shown as 0.

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Coerce raw editor input into a stored rating.
///
/// Integers are clamped into range, decimals are truncated, and anything
/// that is not a number yields `None`.
pub fn parse_rating(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let f = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
            f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64
        }
    };
    Some(value.clamp(MIN_RATING, MAX_RATING))
}

/// Clamp an already-numeric rating on write
pub fn clamp_stored(rating: Option<i64>) -> Option<i64> {
    rating.map(|r| r.clamp(MIN_RATING, MAX_RATING))
}

/// Rating as rendered: `[0, 5]`, missing treated as 0
pub fn display_rating(rating: Option<i64>) -> u8 {
    rating.unwrap_or(0).clamp(0, MAX_RATING) as u8
}
