//! Widget ids for the deck's panels and scroll areas
//!
//! Every section gets its own scroll area and plot ids, so switching slides
//! never reuses scroll offsets or plot memory from a different slide.

use egui::Id;
use std::fmt::Display;

/// Id builder joining its components with `_`
#[derive(Debug, Clone)]
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Id root for everything drawn inside a section body
pub fn section_id(section: impl Display) -> WidgetId {
    WidgetId::new("deck").with("section").with(section)
}
