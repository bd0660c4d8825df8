//! Core functionality for the DSNOW slide deck
//!
//! This crate provides the content model, the section registry and the
//! view state that drives what the presentation shows.

pub mod content;
pub mod events;
pub mod registry;
pub mod settings;
pub mod state;

mod error;

// Re-export commonly used types
pub use content::{
    ChartKind, ChartSpec, Channel, CodeSample, ContentNode, Datum, GroupStyle,
    HeadingLevel, Paragraph, Record, Reference, Rgb, Swatch, SwatchCard, TextTone,
};
pub use error::{DeckError, Result};
pub use events::DeckEvent;
pub use registry::{DeckChrome, Presentation, Section, SectionKey, SectionRegistry, SectionRegistryBuilder};
pub use settings::{DeckSettings, ThemeSettings, WindowSettings};
pub use state::ViewState;
