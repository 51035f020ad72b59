//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for `city`; the outcome carries `seq` back
    FetchWeather { seq: u64, city: String },
}
