/// A configurable value, together with its name and the range of values permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    /// Sets the value of the option to `value`, if `value` is within the range of the option.
    ///
    /// Otherwise, the value is unchanged and an error noting the permitted range is returned.
    pub fn set(&mut self, value: T) -> Result<(), String> {
        let (min, max) = self.min_max();
        match min <= value && value <= max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(format!(
                "{} must be between {min:?} and {max:?}, but {value:?} was given",
                self.name
            )),
        }
    }
}
