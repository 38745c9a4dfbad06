//! # Quote Session
//!
//! Holds the most recent quote for one user between requests.
//!
//! # Flow
//!
//! ```text
//! ShipmentForm ──validate──▶ ShipmentRequest ──QuoteEngine──▶ Quote
//!                                                              │
//!                        last_quote() / export() ◀── stored ───┘
//!                        reset() clears it
//! ```

use crate::application::dto::{DEFAULT_CURRENCY, QuoteExport};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::form::ShipmentForm;
use crate::domain::entities::{Quote, ShipmentRequest};
use crate::domain::services::QuoteEngine;

/// Per-user quoting session.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ship_quote::application::form::ShipmentForm;
/// use ship_quote::application::services::QuoteSession;
/// use ship_quote::domain::services::{FixedClock, QuoteEngine, SequenceEntropy};
///
/// let engine = QuoteEngine::new(
///     Arc::new(FixedClock::from_ymd(2026, 10, 17).unwrap()),
///     Arc::new(SequenceEntropy::new(vec![7])),
/// );
/// let mut session = QuoteSession::new(engine);
/// assert!(session.export().is_none());
///
/// let form = ShipmentForm::from_pairs([
///     ("weight", "10"),
///     ("shippingType", "standard"),
///     ("packageType", "package"),
/// ]);
/// session.submit(&form).unwrap();
///
/// let export = session.export().unwrap();
/// assert_eq!(export.total_cost, "33.49");
/// assert_eq!(export.currency, "USD");
///
/// session.reset();
/// assert!(session.last_quote().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct QuoteSession {
    engine: QuoteEngine,
    currency: String,
    last_quote: Option<Quote>,
    last_notice: Option<&'static str>,
}

impl QuoteSession {
    /// Creates an empty session pricing in USD.
    #[must_use]
    pub fn new(engine: QuoteEngine) -> Self {
        Self {
            engine,
            currency: DEFAULT_CURRENCY.to_owned(),
            last_quote: None,
            last_notice: None,
        }
    }

    /// Sets the currency code stamped on exports.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Returns the session's engine.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Validates `form`, prices it and stores the quote.
    ///
    /// A weight clamped to the limit is priced at the limit; the notice is
    /// available from [`Self::last_notice`].
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid or the engine rejects the
    /// request. The previously stored quote is kept in that case.
    pub fn submit(&mut self, form: &ShipmentForm) -> ApplicationResult<&Quote> {
        let submission = form.validate()?;
        if let Some(notice) = submission.notice() {
            tracing::info!(notice, "form input adjusted");
        }
        let quote = self.engine.compute_quote(submission.request())?;
        self.last_notice = submission.notice();
        Ok(&*self.last_quote.insert(quote))
    }

    /// Prices an already built request and stores the quote.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the engine rejects the request.
    pub fn quote(&mut self, request: &ShipmentRequest) -> ApplicationResult<&Quote> {
        let quote = self.engine.compute_quote(request)?;
        self.last_notice = None;
        Ok(&*self.last_quote.insert(quote))
    }

    /// Returns the most recent quote.
    #[inline]
    #[must_use]
    pub fn last_quote(&self) -> Option<&Quote> {
        self.last_quote.as_ref()
    }

    /// Returns the notice raised by the most recent submission.
    #[inline]
    #[must_use]
    pub fn last_notice(&self) -> Option<&'static str> {
        self.last_notice
    }

    /// Clears the stored quote.
    pub fn reset(&mut self) {
        tracing::debug!("quote session reset");
        self.last_quote = None;
        self.last_notice = None;
    }

    /// Exports the stored quote stamped with the clock's current time.
    ///
    /// Returns `None` when no quote is held.
    #[must_use]
    pub fn export(&self) -> Option<QuoteExport> {
        let quote = self.last_quote.as_ref()?;
        Some(QuoteExport::from_quote(
            quote,
            self.engine.clock().now(),
            self.currency.as_str(),
        ))
    }

    /// Exports the stored quote as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` when no quote is held and
    /// `ApplicationError::Serialization` if encoding fails.
    pub fn export_json(&self) -> ApplicationResult<String> {
        let export = self
            .export()
            .ok_or_else(|| ApplicationError::validation("no quote to export"))?;
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
