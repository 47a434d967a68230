//! In-progress calculator selection
//!
//! The selection is the calculator's whole state: what the user has picked so
//! far and which step they are on. Events update it in place; none of them
//! validate against the catalog, since the quote resolves unknown ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, DEFAULT_PACKAGE, DEFAULT_TIMELINE};
use crate::models::{AddonId, DirectionId, PackageId, TimelineId};
use crate::pricing::{compute_quote, Quote};

use super::step::WizardStep;

/// A user action inside the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
    SelectDirection(DirectionId),
    SelectPackage(PackageId),
    SelectTimeline(TimelineId),
    ToggleAddon(AddonId),
}

/// Session-scoped choices plus the current step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub direction: DirectionId,
    pub package: PackageId,
    pub timeline: TimelineId,
    pub addons: BTreeSet<AddonId>,
    pub step: WizardStep,
}

impl Selection {
    /// Fresh selection on step 1 with default package and timeline
    pub fn new(direction: DirectionId) -> Self {
        Self {
            direction,
            package: PackageId::new(DEFAULT_PACKAGE),
            timeline: TimelineId::new(DEFAULT_TIMELINE),
            addons: BTreeSet::new(),
            step: WizardStep::FIRST,
        }
    }

    /// Apply an event, returning whether it was accepted
    ///
    /// `Next` on the last step and `Back` on the first are rejected and leave
    /// the selection untouched. Changing direction keeps the package id; the
    /// quote re-resolves it within the new direction.
    pub fn apply(&mut self, event: WizardEvent) -> bool {
        match event {
            WizardEvent::Next => match self.step.next() {
                Some(step) => {
                    self.step = step;
                    true
                }
                None => false,
            },
            WizardEvent::Back => match self.step.prev() {
                Some(step) => {
                    self.step = step;
                    true
                }
                None => false,
            },
            WizardEvent::SelectDirection(id) => {
                self.direction = id;
                true
            }
            WizardEvent::SelectPackage(id) => {
                self.package = id;
                true
            }
            WizardEvent::SelectTimeline(id) => {
                self.timeline = id;
                true
            }
            WizardEvent::ToggleAddon(id) => {
                if !self.addons.remove(&id) {
                    self.addons.insert(id);
                }
                true
            }
        }
    }

    pub fn has_addon(&self, id: &AddonId) -> bool {
        self.addons.contains(id)
    }

    /// Quote for the current choices
    pub fn quote(&self, catalog: &Catalog) -> Quote {
        compute_quote(
            catalog,
            &self.direction,
            &self.package,
            &self.timeline,
            &self.addons,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = Selection::new("web-design".into());
        assert_eq!(s.step, WizardStep::Direction);
        assert_eq!(s.package, "standard");
        assert_eq!(s.timeline, "standard");
        assert!(s.addons.is_empty());
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let mut s = Selection::new("logo".into());
        let before = s.clone();
        assert!(!s.apply(WizardEvent::Back));
        assert_eq!(s, before);
    }

    #[test]
    fn test_next_on_last_step_is_noop() {
        let mut s = Selection::new("logo".into());
        for _ in 0..3 {
            assert!(s.apply(WizardEvent::Next));
        }
        assert_eq!(s.step, WizardStep::ContactRequest);
        assert!(!s.apply(WizardEvent::Next));
        assert_eq!(s.step, WizardStep::ContactRequest);
    }

    #[test]
    fn test_next_then_back() {
        let mut s = Selection::new("logo".into());
        s.apply(WizardEvent::Next);
        s.apply(WizardEvent::Next);
        assert_eq!(s.step, WizardStep::TimelineAndAddons);
        s.apply(WizardEvent::Back);
        assert_eq!(s.step, WizardStep::Package);
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut s = Selection::new("logo".into());
        s.apply(WizardEvent::ToggleAddon("support".into()));
        let before = s.addons.clone();

        s.apply(WizardEvent::ToggleAddon("handoff".into()));
        assert!(s.has_addon(&"handoff".into()));
        s.apply(WizardEvent::ToggleAddon("handoff".into()));
        assert_eq!(s.addons, before);
    }

    #[test]
    fn test_direction_change_keeps_other_choices() {
        let mut s = Selection::new("logo".into());
        s.apply(WizardEvent::SelectPackage("pro".into()));
        s.apply(WizardEvent::SelectTimeline("rush".into()));
        s.apply(WizardEvent::ToggleAddon("assets".into()));

        s.apply(WizardEvent::SelectDirection("ui-kit".into()));
        assert_eq!(s.direction, "ui-kit");
        assert_eq!(s.package, "pro");
        assert_eq!(s.timeline, "rush");
        assert!(s.has_addon(&"assets".into()));
    }

    #[test]
    fn test_direction_change_recomputes_with_new_tier() {
        let catalog = Catalog::builtin();
        let mut s = Selection::new("logo".into());
        s.apply(WizardEvent::SelectPackage("pro".into()));
        assert_eq!(s.quote(&catalog).total.dollars(), 5250);

        s.apply(WizardEvent::SelectDirection("ui-kit".into()));
        assert_eq!(s.quote(&catalog).total.dollars(), 4900);
    }

    #[test]
    fn test_field_updates_do_not_move_step() {
        let mut s = Selection::new("logo".into());
        s.apply(WizardEvent::SelectTimeline("flex".into()));
        s.apply(WizardEvent::SelectPackage("essential".into()));
        assert_eq!(s.step, WizardStep::Direction);
    }
}
