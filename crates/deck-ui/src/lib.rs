//! User interface components for the slide deck
//!
//! Theme, the header/body/footer shell, the section navigation strip and
//! [`PresentationView`], which ties them to the view state.

pub mod navigation_strip;
pub mod presentation_view;
pub mod shell;
pub mod theme;
pub mod widget_utils;

pub use navigation_strip::NavigationStrip;
pub use presentation_view::PresentationView;
pub use shell::{keyboard_events, show_frame};
pub use theme::{accent_color, apply_theme, Theme};
pub use widget_utils::{section_id, WidgetId};
