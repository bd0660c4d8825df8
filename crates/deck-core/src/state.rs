//! View state: which section is showing and whether code is revealed

use crate::error::{DeckError, Result};
use crate::events::DeckEvent;
use crate::registry::{SectionKey, SectionRegistry};

/// The minimal mutable state driving what is rendered
///
/// Owned by a single presentation and changed only through the transitions
/// below. `active_section` is always a key of the registry it was created
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_section: SectionKey,
    show_code: bool,
}

impl ViewState {
    /// Initial state: first section, code hidden
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            active_section: registry.first_key(),
            show_code: false,
        }
    }

    pub fn active_section(&self) -> SectionKey {
        self.active_section
    }

    pub fn show_code(&self) -> bool {
        self.show_code
    }

    /// Make `key` the active section
    pub fn select_section(&mut self, registry: &SectionRegistry, key: &str) -> Result<()> {
        let key = registry
            .resolve(key)
            .ok_or_else(|| DeckError::InvalidKey(key.to_string()))?;

        if key != self.active_section {
            tracing::debug!("Active section: {} -> {}", self.active_section, key);
            self.active_section = key;
        }
        Ok(())
    }

    /// Flip code visibility
    pub fn toggle_code(&mut self) {
        self.show_code = !self.show_code;
        tracing::debug!("Code visibility: {}", self.show_code);
    }

    /// Step forward in registry order; false when already on the last section
    pub fn select_next(&mut self, registry: &SectionRegistry) -> bool {
        let next = registry
            .position(self.active_section.as_str())
            .and_then(|idx| registry.key_at(idx + 1));
        self.step_to(next)
    }

    /// Step backward in registry order; false when already on the first section
    pub fn select_previous(&mut self, registry: &SectionRegistry) -> bool {
        let previous = registry
            .position(self.active_section.as_str())
            .and_then(|idx| idx.checked_sub(1))
            .and_then(|idx| registry.key_at(idx));
        self.step_to(previous)
    }

    fn step_to(&mut self, key: Option<SectionKey>) -> bool {
        match key {
            Some(key) => {
                tracing::debug!("Active section: {} -> {}", self.active_section, key);
                self.active_section = key;
                true
            }
            None => false,
        }
    }

    /// Apply a UI event
    pub fn apply(&mut self, registry: &SectionRegistry, event: DeckEvent) -> Result<()> {
        match event {
            DeckEvent::SelectSection(key) => self.select_section(registry, key.as_str()),
            DeckEvent::NextSection => {
                self.select_next(registry);
                Ok(())
            }
            DeckEvent::PreviousSection => {
                self.select_previous(registry);
                Ok(())
            }
            DeckEvent::ToggleCode => {
                self.toggle_code();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::builder()
            .section("intro", "Intro", vec![])
            .section("body", "Body", vec![])
            .section("outro", "Outro", vec![])
            .build()
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let registry = registry();
        let state = ViewState::new(&registry);
        assert_eq!(state.active_section().as_str(), "intro");
        assert!(!state.show_code());
    }

    #[test]
    fn test_select_section_is_idempotent() {
        let registry = registry();
        let mut state = ViewState::new(&registry);

        state.select_section(&registry, "body").unwrap();
        assert_eq!(state.active_section().as_str(), "body");

        let before = state.clone();
        state.select_section(&registry, "body").unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_key_leaves_state_unchanged() {
        let registry = registry();
        let mut state = ViewState::new(&registry);
        state.toggle_code();
        let before = state.clone();

        let err = state.select_section(&registry, "doesNotExist").unwrap_err();
        assert_eq!(err, DeckError::InvalidKey("doesNotExist".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_code_is_an_involution() {
        let registry = registry();
        let mut state = ViewState::new(&registry);

        state.toggle_code();
        assert!(state.show_code());
        state.toggle_code();
        assert!(!state.show_code());
    }

    #[test]
    fn test_code_visibility_survives_section_change() {
        let registry = registry();
        let mut state = ViewState::new(&registry);
        state.toggle_code();
        state.select_section(&registry, "outro").unwrap();
        assert!(state.show_code());
    }

    #[test]
    fn test_next_and_previous_stop_at_the_ends() {
        let registry = registry();
        let mut state = ViewState::new(&registry);

        assert!(!state.select_previous(&registry));
        assert_eq!(state.active_section().as_str(), "intro");

        assert!(state.select_next(&registry));
        assert!(state.select_next(&registry));
        assert_eq!(state.active_section().as_str(), "outro");
        assert!(!state.select_next(&registry));

        assert!(state.select_previous(&registry));
        assert_eq!(state.active_section().as_str(), "body");
    }

    #[test]
    fn test_apply_dispatches_events() {
        let registry = registry();
        let mut state = ViewState::new(&registry);

        let outro = registry.resolve("outro").unwrap();
        state.apply(&registry, DeckEvent::SelectSection(outro)).unwrap();
        state.apply(&registry, DeckEvent::PreviousSection).unwrap();
        state.apply(&registry, DeckEvent::ToggleCode).unwrap();

        assert_eq!(state.active_section().as_str(), "body");
        assert!(state.show_code());
    }
}
