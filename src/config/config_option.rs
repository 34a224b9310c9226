use crate::{misc::log::targets, types::err};

/// A named option, bounded by some minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, so long as the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || self.max < value {
            log::error!(target: targets::CONFIG, "{value:?} is outside the bounds of {}", self.name);
            return Err(err::ConfigError::OutOfBounds);
        }
        log::info!(target: targets::CONFIG, "{} set to {value:?}", self.name);
        self.value = value;
        Ok(())
    }
}
