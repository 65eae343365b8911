//! Static difficulty table: each level pins an opponent strength band.

/// Search and degradation parameters for one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub level: u8,
    pub target_elo: u32,
    pub search_depth: u8,
    pub error_rate: f64,
    pub blunder_rate: f64,
}

/// Fallback profile for a level outside the table.
pub const DEFAULT_PROFILE: DifficultyProfile = DifficultyProfile {
    level: 4,
    target_elo: 1000,
    search_depth: 2,
    error_rate: 0.30,
    blunder_rate: 0.15,
};

/// Levels 1-10, weakest to strongest. Strength comes from both the
/// search depth and the shrinking error/blunder injection rates.
pub static PROFILES: [DifficultyProfile; 10] = [
    DifficultyProfile { level: 1, target_elo: 400, search_depth: 1, error_rate: 0.45, blunder_rate: 0.30 },
    DifficultyProfile { level: 2, target_elo: 600, search_depth: 1, error_rate: 0.40, blunder_rate: 0.25 },
    DifficultyProfile { level: 3, target_elo: 800, search_depth: 2, error_rate: 0.35, blunder_rate: 0.20 },
    DifficultyProfile { level: 4, target_elo: 1000, search_depth: 2, error_rate: 0.30, blunder_rate: 0.15 },
    DifficultyProfile { level: 5, target_elo: 1200, search_depth: 2, error_rate: 0.25, blunder_rate: 0.10 },
    DifficultyProfile { level: 6, target_elo: 1400, search_depth: 3, error_rate: 0.18, blunder_rate: 0.07 },
    DifficultyProfile { level: 7, target_elo: 1600, search_depth: 3, error_rate: 0.12, blunder_rate: 0.05 },
    DifficultyProfile { level: 8, target_elo: 1800, search_depth: 3, error_rate: 0.08, blunder_rate: 0.03 },
    DifficultyProfile { level: 9, target_elo: 2000, search_depth: 4, error_rate: 0.05, blunder_rate: 0.02 },
    DifficultyProfile { level: 10, target_elo: 2200, search_depth: 4, error_rate: 0.02, blunder_rate: 0.01 },
];

/// Clamp an adjusted level back into the 1-10 table range.
pub fn clamp_level(level: i32) -> u8 {
    level.clamp(1, 10) as u8
}

impl DifficultyProfile {
    /// Profile for a level, or [`DEFAULT_PROFILE`] when the level is
    /// outside the table.
    pub fn for_level(level: u8) -> DifficultyProfile {
        PROFILES
            .get((level as usize).wrapping_sub(1))
            .copied()
            .unwrap_or(DEFAULT_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_monotone_in_strength() {
        for pair in PROFILES.windows(2) {
            assert!(pair[0].target_elo < pair[1].target_elo);
            assert!(pair[0].search_depth <= pair[1].search_depth);
            assert!(pair[0].error_rate >= pair[1].error_rate);
            assert!(pair[0].blunder_rate >= pair[1].blunder_rate);
        }
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        assert_eq!(DifficultyProfile::for_level(0), DEFAULT_PROFILE);
        assert_eq!(DifficultyProfile::for_level(11), DEFAULT_PROFILE);
        assert_eq!(DifficultyProfile::for_level(4).target_elo, 1000);
    }

    #[test]
    fn test_clamp_level_bounds() {
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(7), 7);
        assert_eq!(clamp_level(12), 10);
    }
}
