use super::session::SubmitOutcome;
use super::form::format_number;
use crate::domain::UserRecord;

/// Text shown under "Query results:".
///
/// A new submission clears both the result lines and the message; a
/// cancelled or failed search leaves the view empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView {
    results: Vec<UserRecord>,
    empty_message: String,
}

impl ResultsView {
    pub fn clear(&mut self) {
        self.results.clear();
        self.empty_message.clear();
    }

    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        self.clear();
        match outcome {
            SubmitOutcome::Results(records) => self.results = records.clone(),
            SubmitOutcome::NoResults(message) => self.empty_message = message.clone(),
            SubmitOutcome::Cancelled | SubmitOutcome::Failed(_) => {}
        }
    }

    pub fn lines(&self) -> Vec<String> {
        if self.results.is_empty() {
            if self.empty_message.is_empty() {
                Vec::new()
            } else {
                vec![self.empty_message.clone()]
            }
        } else {
            self.results
                .iter()
                .enumerate()
                .map(|(index, record)| render_record(index, record))
                .collect()
        }
    }
}

/// `"{n}. email: {email}, phone number: {DD-DD-DD}"`, numbered from 1.
pub fn render_record(index: usize, record: &UserRecord) -> String {
    format!(
        "{}. email: {}, phone number: {}",
        index + 1,
        record.email,
        format_number(&record.number)
    )
}
