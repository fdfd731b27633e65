/// Marker trait for intents: user selections and query completions.
pub trait Intent: Send + 'static {}
