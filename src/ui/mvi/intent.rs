//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, drags, form edits)
/// - Timer callbacks (toast expiry ticks, settle delays)
/// - Results of external service calls
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
