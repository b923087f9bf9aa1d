/// Marker trait for intent objects.
///
/// Intents are either commands issued by the user (submit, reset) or
/// events produced by the system (a network call settling).
pub trait Intent: Send + 'static {}
