//! Handle types for widget storage

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a button owned by the `ButtonManager`
    pub struct ButtonId;

    /// Stable handle to a text instance owned by the `SceneManager`
    pub struct TextId;

    /// Stable handle to a generic UI element owned by the `SceneManager`
    pub struct ElementId;
}
