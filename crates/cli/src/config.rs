//! Process configuration, read once at startup.

use warehouse_observability::LogConfig;

/// Environment variable toggling the demonstration sequence.
pub const DEMO_VAR: &str = "WAREHOUSE_DEMO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log: LogConfig,
    /// Run the demonstration sequence before the menu.
    pub run_demo: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            run_demo: true,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let run_demo = match lookup(DEMO_VAR) {
            Some(raw) => !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ),
            None => true,
        };

        Self {
            log: LogConfig::from_lookup(&lookup),
            run_demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_by_default() {
        assert_eq!(CliConfig::from_lookup(|_| None), CliConfig::default());
    }

    #[test]
    fn demo_can_be_switched_off() {
        for value in ["0", "false", "OFF", " no "] {
            let config = CliConfig::from_lookup(|key| (key == DEMO_VAR).then(|| value.to_string()));
            assert!(!config.run_demo, "{value:?} should disable the demo");
        }
        let config = CliConfig::from_lookup(|key| (key == DEMO_VAR).then(|| "1".to_string()));
        assert!(config.run_demo);
    }
}
