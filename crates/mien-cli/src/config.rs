use mien_core::SweepConfig;

/// CLI configuration, loaded from environment variables.
pub struct Config {
    /// Threshold sweep shared across every subgroup of a run.
    pub sweep: SweepConfig,
}

impl Config {
    /// Load configuration from `MIEN_*` environment variables with defaults.
    pub fn from_env() -> Self {
        let defaults = SweepConfig::default();
        Self {
            sweep: SweepConfig {
                lower: env_f64("MIEN_SWEEP_LOWER", defaults.lower),
                upper: env_f64("MIEN_SWEEP_UPPER", defaults.upper),
                count: env_usize("MIEN_SWEEP_COUNT", defaults.count),
            },
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
