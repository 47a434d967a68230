//! Proposal requests and the submission seam
//!
//! The calculator's last step packages the current selection with the
//! visitor's contact details and hands it to a [`Submitter`]. Delivery and its
//! failures belong to the submitter; the calculator does not wait for a result.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{QuoteError, QuoteResult};
use crate::models::CurrencyId;
use crate::pricing::Quote;

use super::selection::Selection;

/// Free-text fields from the proposal form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,

    /// Goals, scope, deadline
    #[serde(default)]
    pub brief: String,
}

impl ContactFields {
    /// Basic checks a delivery channel needs before accepting a request
    pub fn validate(&self) -> QuoteResult<()> {
        if self.name.trim().is_empty() {
            return Err(QuoteError::Validation("Name cannot be empty".into()));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(QuoteError::Validation("Email cannot be empty".into()));
        }
        if !email.contains('@') {
            return Err(QuoteError::Validation(format!(
                "'{}' is not an email address",
                email
            )));
        }

        Ok(())
    }
}

/// Snapshot handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub selection: Selection,
    pub quote: Quote,

    /// Currency the visitor was viewing prices in
    pub currency: CurrencyId,

    pub contact: ContactFields,
}

impl SubmissionRequest {
    pub fn new(
        selection: Selection,
        quote: Quote,
        currency: CurrencyId,
        contact: ContactFields,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            selection,
            quote,
            currency,
            contact,
        }
    }
}

/// External collaborator that delivers proposal requests
///
/// Fire-and-forget: implementations own validation, delivery and error
/// reporting.
pub trait Submitter {
    fn submit(&mut self, request: SubmissionRequest);
}

/// Collects requests in memory
impl Submitter for Vec<SubmissionRequest> {
    fn submit(&mut self, request: SubmissionRequest) {
        self.push(request);
    }
}

/// Writes each valid request as one JSON line
///
/// Invalid or undeliverable requests are dropped with a warning.
pub struct JsonLinesSubmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSubmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write(&mut self, request: &SubmissionRequest) -> QuoteResult<()> {
        request.contact.validate()?;

        let json = serde_json::to_string(request)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;

        Ok(())
    }
}

impl<W: Write> Submitter for JsonLinesSubmitter<W> {
    fn submit(&mut self, request: SubmissionRequest) {
        match self.write(&request) {
            Ok(()) => tracing::debug!(request_id = %request.id, "proposal request written"),
            Err(e) => tracing::warn!(request_id = %request.id, error = %e, "proposal request dropped"),
        }
    }
}
