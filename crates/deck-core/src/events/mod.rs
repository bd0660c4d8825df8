use crate::registry::SectionKey;

/// Discrete user interactions dispatched by the UI, one per input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// A navigation control was pressed
    SelectSection(SectionKey),

    /// Move to the next section in registry order
    NextSection,

    /// Move to the previous section in registry order
    PreviousSection,

    /// The show/hide code control was pressed
    ToggleCode,
}
