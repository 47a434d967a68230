//! Calculator session
//!
//! A session is created when the calculator opens and discarded when it
//! closes. It owns its [`Selection`] exclusively and reads the display
//! currency and starting direction from an explicit [`SessionConfig`].

use crate::catalog::Catalog;
use crate::models::{CurrencyId, DirectionId};
use crate::pricing::{format_money, Quote};

use super::selection::{Selection, WizardEvent};
use super::step::WizardStep;
use super::submit::{ContactFields, SubmissionRequest, Submitter};

/// Settings a session starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Direction preselected on step 1
    pub initial_direction: DirectionId,

    /// Display currency for rendered prices
    pub currency: CurrencyId,
}

/// An open calculator
pub struct Calculator<'c> {
    catalog: &'c Catalog,
    config: SessionConfig,
    selection: Selection,
}

impl<'c> Calculator<'c> {
    /// Open a calculator with a fresh selection
    pub fn open(catalog: &'c Catalog, config: SessionConfig) -> Self {
        tracing::debug!(
            direction = %config.initial_direction,
            currency = %config.currency,
            "calculator opened"
        );
        let selection = Selection::new(config.initial_direction.clone());
        Self {
            catalog,
            config,
            selection,
        }
    }

    /// Reopen from a (possibly different) starting direction
    ///
    /// Everything picked so far is discarded.
    pub fn reopen(&mut self, initial_direction: DirectionId) {
        tracing::debug!(direction = %initial_direction, "calculator reopened");
        self.config.initial_direction = initial_direction;
        self.selection = Selection::new(self.config.initial_direction.clone());
    }

    /// Close the calculator, discarding its state
    pub fn close(self) {
        tracing::debug!(step = self.selection.step.number(), "calculator closed");
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn step(&self) -> WizardStep {
        self.selection.step
    }

    pub fn currency(&self) -> &CurrencyId {
        &self.config.currency
    }

    /// Switch the display currency; the selection is unaffected
    pub fn set_currency(&mut self, currency: CurrencyId) {
        self.config.currency = currency;
    }

    /// Apply a user action, returning whether it was accepted
    pub fn apply(&mut self, event: WizardEvent) -> bool {
        let accepted = self.selection.apply(event.clone());
        tracing::debug!(
            event = ?event,
            accepted,
            step = self.selection.step.number(),
            "wizard transition"
        );
        accepted
    }

    /// Current estimate in USD
    pub fn quote(&self) -> Quote {
        self.selection.quote(self.catalog)
    }

    /// Current total formatted in the session currency
    pub fn formatted_total(&self) -> String {
        format_money(self.catalog, self.quote().total, &self.config.currency)
    }

    /// Hand the current selection and contact fields to a submitter
    ///
    /// Only available on the last step; elsewhere nothing is sent and `None`
    /// is returned. The returned request is the snapshot that was handed off.
    pub fn submit(
        &self,
        contact: ContactFields,
        submitter: &mut dyn Submitter,
    ) -> Option<SubmissionRequest> {
        if self.selection.step != WizardStep::LAST {
            tracing::debug!(step = self.selection.step.number(), "submit ignored before last step");
            return None;
        }

        let request = SubmissionRequest::new(
            self.selection.clone(),
            self.quote(),
            self.config.currency.clone(),
            contact,
        );
        tracing::debug!(request_id = %request.id, total = request.quote.total.dollars(), "proposal request handed off");
        submitter.submit(request.clone());
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(direction: &str) -> SessionConfig {
        SessionConfig {
            initial_direction: direction.into(),
            currency: "USD".into(),
        }
    }

    fn contact() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project_link: None,
            brief: "Landing page".into(),
        }
    }

    #[test]
    fn test_open_starts_on_step_one() {
        let catalog = Catalog::builtin();
        let calc = Calculator::open(&catalog, config("web-design"));
        assert_eq!(calc.step(), WizardStep::Direction);
        assert_eq!(calc.selection().direction, "web-design");
        assert_eq!(calc.quote().total.dollars(), 4200);
    }

    #[test]
    fn test_reopen_resets_selection() {
        let catalog = Catalog::builtin();
        let mut calc = Calculator::open(&catalog, config("logo"));
        calc.apply(WizardEvent::Next);
        calc.apply(WizardEvent::SelectPackage("pro".into()));
        calc.apply(WizardEvent::ToggleAddon("support".into()));

        calc.reopen("ui-kit".into());
        assert_eq!(calc.selection(), &Selection::new("ui-kit".into()));
    }

    #[test]
    fn test_currency_changes_rendering_only() {
        let catalog = Catalog::builtin();
        let mut calc = Calculator::open(&catalog, config("logo"));
        assert_eq!(calc.formatted_total(), "$2,800");

        calc.set_currency("CZK".into());
        assert_eq!(calc.formatted_total(), "Kč63,636");
        assert_eq!(calc.quote().total.dollars(), 2800);
    }

    #[test]
    fn test_full_walkthrough_and_submit() {
        let catalog = Catalog::builtin();
        let mut calc = Calculator::open(&catalog, config("web-design"));
        let mut outbox: Vec<SubmissionRequest> = Vec::new();

        assert!(calc.submit(contact(), &mut outbox).is_none());
        assert!(outbox.is_empty());

        calc.apply(WizardEvent::Next);
        calc.apply(WizardEvent::SelectPackage("standard".into()));
        calc.apply(WizardEvent::Next);
        calc.apply(WizardEvent::SelectTimeline("rush".into()));
        calc.apply(WizardEvent::ToggleAddon("handoff".into()));
        calc.apply(WizardEvent::ToggleAddon("support".into()));
        calc.apply(WizardEvent::Next);
        assert_eq!(calc.step(), WizardStep::ContactRequest);

        let request = calc.submit(contact(), &mut outbox).unwrap();
        assert_eq!(request.quote.total.dollars(), 5975);
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].id, request.id);
        assert_eq!(outbox[0].selection.addons.len(), 2);
    }

    #[test]
    fn test_submit_snapshot_is_detached() {
        let catalog = Catalog::builtin();
        let mut calc = Calculator::open(&catalog, config("logo"));
        for _ in 0..3 {
            calc.apply(WizardEvent::Next);
        }
        let mut outbox: Vec<SubmissionRequest> = Vec::new();
        calc.submit(contact(), &mut outbox);

        calc.apply(WizardEvent::SelectDirection("social".into()));
        assert_eq!(outbox[0].selection.direction, "logo");
    }
}
