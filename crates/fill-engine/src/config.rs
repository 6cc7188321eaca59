use std::time::Duration;

/// Scheduling knobs for a fill run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Number of resolve+inject sweeps over the suggestion list.
    pub max_passes: u32,
    /// Pause between passes, giving late-rendering controls time to appear.
    pub pass_interval: Duration,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            max_passes: 3,
            pass_interval: Duration::from_secs(1),
        }
    }
}

impl FillConfig {
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_pass_interval(mut self, pass_interval: Duration) -> Self {
        self.pass_interval = pass_interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_production_schedule() {
        let config = FillConfig::default();
        assert_eq!(config.max_passes, 3);
        assert_eq!(config.pass_interval, Duration::from_secs(1));
    }
}
