/// Tunable parameters of the decision engine.
///
/// Defaults reproduce the shipped bot; every field can be overridden from a
/// TOML file (see `game-content`) or the simulator's environment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Half-width of the square scanned for firewall cells.
    pub hazard_scan_radius: i32,
    /// Half-width of the square scanned for chests.
    pub chest_scan_radius: i32,
    /// Half-width of the square scanned for fallback ground cells.
    pub ground_scan_radius: i32,
    /// Euclidean range at which hostiles become movement targets.
    pub attack_radius: f64,
    /// Distance at or below which a chest is opened instead of approached.
    pub chest_reach: f64,
    /// Health below which explosives are used regardless of hostile count.
    pub low_health: u32,
    /// Firewall centroids closer than this to the origin mean center expansion.
    pub center_threshold: f64,
    /// Firewall spread below this means a concentrated (corner/side) collapse.
    pub spread_threshold: f64,
    /// Coordinate magnitude of the four far corners.
    pub corner_extent: i32,
    /// Base seed for exploration shuffles.
    pub game_seed: u64,
}

impl AgentConfig {
    pub const DEFAULT_HAZARD_SCAN_RADIUS: i32 = 15;
    pub const DEFAULT_CHEST_SCAN_RADIUS: i32 = 20;
    pub const DEFAULT_GROUND_SCAN_RADIUS: i32 = 8;
    pub const DEFAULT_ATTACK_RADIUS: f64 = 2.0;
    pub const DEFAULT_CHEST_REACH: f64 = 1.0;
    pub const DEFAULT_LOW_HEALTH: u32 = 30;
    pub const DEFAULT_CENTER_THRESHOLD: f64 = 5.0;
    pub const DEFAULT_SPREAD_THRESHOLD: f64 = 10.0;
    pub const DEFAULT_CORNER_EXTENT: i32 = 50;
    /// Upper bound for every radius and the corner extent.
    pub const MAX_RADIUS: i32 = 1000;

    pub fn new() -> Self {
        Self {
            hazard_scan_radius: Self::DEFAULT_HAZARD_SCAN_RADIUS,
            chest_scan_radius: Self::DEFAULT_CHEST_SCAN_RADIUS,
            ground_scan_radius: Self::DEFAULT_GROUND_SCAN_RADIUS,
            attack_radius: Self::DEFAULT_ATTACK_RADIUS,
            chest_reach: Self::DEFAULT_CHEST_REACH,
            low_health: Self::DEFAULT_LOW_HEALTH,
            center_threshold: Self::DEFAULT_CENTER_THRESHOLD,
            spread_threshold: Self::DEFAULT_SPREAD_THRESHOLD,
            corner_extent: Self::DEFAULT_CORNER_EXTENT,
            game_seed: 0,
        }
    }

    pub fn with_game_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    /// Checks that every radius and threshold is usable.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radii = [
            ("hazard_scan_radius", self.hazard_scan_radius),
            ("chest_scan_radius", self.chest_scan_radius),
            ("ground_scan_radius", self.ground_scan_radius),
            ("corner_extent", self.corner_extent),
        ];
        for (field, value) in radii {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field });
            }
            if value > Self::MAX_RADIUS {
                return Err(ConfigError::TooLarge {
                    field,
                    max: Self::MAX_RADIUS,
                });
            }
        }

        let distances = [
            ("attack_radius", self.attack_radius),
            ("chest_reach", self.chest_reach),
            ("center_threshold", self.center_threshold),
            ("spread_threshold", self.spread_threshold),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { field });
            }
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: i32 },

    #[error("{field} must be a finite, non-negative distance")]
    InvalidDistance { field: &'static str },
}
