// Data-driven game configuration.
//
// Tunable cadence parameters live here in `GameConfig`, loaded from JSON at
// startup by the session layer. The core never uses magic timing numbers —
// it reads from the config. `WINDOW_SIZE` is intentionally *not* a config
// value: the window, the marker, and the essay record all share the one
// compile-time constant, so the three cannot drift.
//
// See also: `marker.rs` which consumes `ticks_per_column`, `game.rs` which
// owns the config as part of `GameState`.

use serde::{Deserialize, Serialize};

/// Tunable parameters for a play session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Clock ticks per one-column marker advance. At the nominal 60 Hz
    /// drive, 2 gives the classic half-rate motion (30 columns/sec).
    #[serde(default = "GameConfig::default_ticks_per_column")]
    pub ticks_per_column: u32,
    /// Nominal drive rate in ticks per second. Informational — the core
    /// counts ticks, it never measures time. The runner uses this to pace
    /// its loop.
    #[serde(default = "GameConfig::default_tick_rate_hz")]
    pub tick_rate_hz: u32,
}

impl GameConfig {
    fn default_ticks_per_column() -> u32 {
        2
    }

    fn default_tick_rate_hz() -> u32 {
        60
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticks_per_column: Self::default_ticks_per_column(),
            tick_rate_hz: Self::default_tick_rate_hz(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_cadence() {
        let config = GameConfig::default();
        assert_eq!(config.ticks_per_column, 2);
        assert_eq!(config.tick_rate_hz, 60);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.ticks_per_column, 2);
        let config: GameConfig = serde_json::from_str(r#"{"ticks_per_column": 4}"#).unwrap();
        assert_eq!(config.ticks_per_column, 4);
        assert_eq!(config.tick_rate_hz, 60);
    }
}
