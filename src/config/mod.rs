/*!
Configuration of a knowledge base.

All configuration for a knowledge base is contained within a [Config].
Each objective solver (one per sphere, and one for the real world) is built from a copy of the configuration of the knowledge base.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation of the activity of a clause.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The multiplier applied to the activity of all clauses on each decay.
    pub activity_decay: ConfigOption<Activity>,

    /// Test whether a query holds without splitting before trying any split.
    pub eager_sound_check: ConfigOption<bool>,

    /// The minimum number of names beyond those mentioned for each sort mentioned in a query.
    pub plus_names: ConfigOption<usize>,

    /// When consistency is assumed, restrict splits to terms connected to the query through shared clauses.
    pub relevant_split_terms: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activity_decay: ConfigOption {
                name: "activity_decay",
                min: 0.0,
                max: 1.0,
                value: 0.95,
            },

            eager_sound_check: ConfigOption {
                name: "eager_sound_check",
                min: false,
                max: true,
                value: true,
            },

            plus_names: ConfigOption {
                name: "plus_names",
                min: 1,
                max: usize::MAX,
                value: 1,
            },

            relevant_split_terms: ConfigOption {
                name: "relevant_split_terms",
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
    fn bounds_are_respected() {
        let mut config = Config::default();
        assert!(config.plus_names.set(3).is_ok());
        assert_eq!(config.plus_names.value, 3);

        assert!(config.plus_names.set(0).is_err());
        assert_eq!(config.plus_names.value, 3);

        assert!(config.activity_decay.set(1.5).is_err());
        assert_eq!(config.activity_decay.min_max(), (0.0, 1.0));
    }
}
