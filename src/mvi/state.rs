/// Marker trait for renderable state.
///
/// States are cloned snapshots; `PartialEq` lets consumers skip redraws
/// when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
