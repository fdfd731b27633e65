/// Marker trait for section state.
///
/// `Default` is the freshly mounted state and lets `App` move the value out
/// with `std::mem::take` while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
