use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::error::LoadError;
use crate::limits::VelocityLimits;
use crate::models::{CustomerHistory, Load, LoadDecision, LoadKey};
use crate::window::CalendarWindow;

/// What happened to a single input line
#[derive(Debug)]
pub enum LineOutcome {
    /// First sighting of this load; carries the encoded decision line
    Decided(String),
    /// Identity already seen earlier in the stream
    Duplicate,
    /// Line could not be decoded, or its decision could not be encoded
    Failed(LoadError),
}

/// Result of a validation run
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Encoded decisions, in first-seen order
    pub decisions: Vec<String>,
    /// Per-record errors, in input order
    pub errors: Vec<LoadError>,
    /// Lines skipped as duplicates
    pub duplicates: usize,
}

impl ValidationReport {
    /// Fold one line outcome into the report
    pub fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Decided(line) => self.decisions.push(line),
            LineOutcome::Duplicate => self.duplicates += 1,
            LineOutcome::Failed(err) => self.errors.push(err),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty() && self.errors.is_empty()
    }
}

/// Velocity limit validator
///
/// Owns every customer's accepted-load history and the set of load identities
/// already treated. One instance covers one batch; it is not meant to be
/// shared between concurrent callers.
pub struct VelocityValidator {
    limits: VelocityLimits,
    /// Map of customer ID to accepted loads
    histories: HashMap<String, CustomerHistory>,
    /// Every (load, customer) identity decoded so far, accepted or not
    treated: HashSet<LoadKey>,
}

impl VelocityValidator {
    /// Create a validator with the default limits
    pub fn new() -> Self {
        Self::with_limits(VelocityLimits::default())
    }

    pub fn with_limits(limits: VelocityLimits) -> Self {
        Self {
            limits,
            histories: HashMap::new(),
            treated: HashSet::new(),
        }
    }

    /// Validate every line of `lines` in order
    pub fn process<I, S>(&mut self, lines: I) -> ValidationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ValidationReport::default();
        for line in lines {
            report.record(self.process_line(line.as_ref()));
        }
        report
    }

    /// Validate raw lines as they arrive on `lines` until the sender side closes
    pub async fn process_channel(&mut self, mut lines: mpsc::Receiver<Vec<u8>>) -> ValidationReport {
        let mut report = ValidationReport::default();
        while let Some(line) = lines.recv().await {
            report.record(self.process_raw_line(&line));
        }
        report
    }

    /// Like `process_line`, for input that may not be valid UTF-8
    pub fn process_raw_line(&mut self, line: &[u8]) -> LineOutcome {
        match std::str::from_utf8(line) {
            Ok(text) => self.process_line(text),
            Err(err) => LineOutcome::Failed(LoadError::InvalidUtf8(err)),
        }
    }

    /// Decode, deduplicate, validate and encode a single line
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let load = match Load::from_json(line) {
            Ok(load) => load,
            Err(err) => return LineOutcome::Failed(err),
        };

        // Mark before validating so a repeated identity is dropped whatever the first outcome was
        if !self.mark_treated(&load.key()) {
            log::debug!(
                "Ignoring duplicate load {} for customer {}",
                load.id,
                load.customer_id
            );
            return LineOutcome::Duplicate;
        }

        let accepted = self.validate_and_record(load.clone());
        let decision = LoadDecision::new(&load, accepted);
        match decision.to_json() {
            Ok(encoded) => LineOutcome::Decided(encoded),
            Err(source) => LineOutcome::Failed(LoadError::Encode {
                load_id: decision.id,
                customer_id: decision.customer_id,
                source,
            }),
        }
    }

    /// Insert `key` into the treated set
    /// Returns true if it was not there yet
    pub fn mark_treated(&mut self, key: &LoadKey) -> bool {
        if self.treated.contains(key) {
            return false;
        }
        self.treated.insert(key.clone())
    }

    /// Check `load` against the limits and, if it passes, add it to its customer's history
    pub fn validate_and_record(&mut self, load: Load) -> bool {
        let accepted = self.evaluate(&load);
        if accepted {
            self.histories
                .entry(load.customer_id.clone())
                .or_default()
                .push(load);
        } else {
            log::debug!(
                "Rejecting load {} of {} for customer {}",
                load.id,
                load.amount,
                load.customer_id
            );
        }
        accepted
    }

    /// Whether `load` fits within every limit given the stored history
    ///
    /// Does not touch any state.
    pub fn evaluate(&self, load: &Load) -> bool {
        let (day, week) = match self.histories.get(&load.customer_id) {
            Some(history) => (
                history.totals_within(&CalendarWindow::day_of(load.time)),
                history.totals_within(&CalendarWindow::week_of(load.time)),
            ),
            None => Default::default(),
        };

        // An overflowing sum is over any limit
        let within = |used: Decimal, max: Decimal| {
            used.checked_add(load.amount).is_some_and(|total| total <= max)
        };

        within(day.amount, self.limits.day_max_amount)
            && day.count < self.limits.day_max_count
            && within(week.amount, self.limits.week_max_amount)
    }

    /// Accepted loads of `customer_id`, if any were accepted
    pub fn history(&self, customer_id: &str) -> Option<&CustomerHistory> {
        self.histories.get(customer_id)
    }

    /// Number of distinct load identities seen so far
    pub fn treated_count(&self) -> usize {
        self.treated.len()
    }

    pub fn limits(&self) -> &VelocityLimits {
        &self.limits
    }
}

impl Default for VelocityValidator {
    fn default() -> Self {
        Self::new()
    }
}
