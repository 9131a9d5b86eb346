//! Star Rating Display
//!
//! Shared between the reviews list, the top-rated panel, and recipe
//! summaries.

/// Five-star string for a rating, rounded to the nearest whole star
/// and clamped to 0..=5.
pub fn star_string(rating: f64) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    let mut out = String::new();
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(star_string(4.5), "★★★★★");
        assert_eq!(star_string(4.4), "★★★★☆");
        assert_eq!(star_string(1.0), "★☆☆☆☆");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(star_string(0.0), "☆☆☆☆☆");
        assert_eq!(star_string(9.0), "★★★★★");
        assert_eq!(star_string(-1.0), "☆☆☆☆☆");
    }
}
