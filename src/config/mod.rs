/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption] which notes the range of values permitted.

```rust
# use clausal::config::Config;
# use clausal::context::Context;
let mut config = Config::default();
config.tautology_elimination.value = true;
config.time_limit.value = std::time::Duration::from_secs(5);

let the_context = Context::from_config(config);
assert!(the_context.config.tautology_elimination.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The time limit for a proof attempt.
    ///
    /// A limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,

    /// Remove tautological clauses from premises and the negated goal before a proof attempt.
    ///
    /// Tautological resolvents are always discarded, regardless of this option.
    pub tautology_elimination: ConfigOption<bool>,

    /// Keep a log of each resolution step taken during a proof attempt.
    pub record_steps: ConfigOption<bool>,
}

impl Config {
    /// The time limit, if some (non-zero) limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            tautology_elimination: ConfigOption {
                name: "tautology_elimination",
                min: false,
                max: true,
                value: false,
            },

            record_steps: ConfigOption {
                name: "record_steps",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_time_limit_by_default() {
        assert_eq!(Config::default().time_limit(), None);
    }

    #[test]
    fn set_within_range() {
        let mut config = Config::default();
        assert!(config.time_limit.set(Duration::from_millis(10)).is_ok());
        assert_eq!(config.time_limit(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn set_outside_range() {
        let mut option = ConfigOption {
            name: "bounded",
            min: 1_u32,
            max: 4,
            value: 2,
        };
        assert!(option.set(5).is_err());
        assert_eq!(option.value, 2);
        assert!(option.set(4).is_ok());
        assert_eq!(option.value, 4);
    }
}
