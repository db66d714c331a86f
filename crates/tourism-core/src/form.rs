//! Form model - query text, request lifecycle and render policy

use tracing::{debug, error, info};

use crate::copy::{LOADING_LABEL, SUBMIT_LABEL};
use crate::{FormError, RequestError, TourismRequest, TourismResponse};

/// Token minted per accepted submit. Completions carrying an older token are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

/// Request the host must send on behalf of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub generation: Generation,
    pub payload: TourismRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form is loading; host should issue this request.
    Send(PendingRequest),
    /// Query was blank; validation error is now shown.
    Rejected,
    /// A request is already in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        generation: Generation,
    },
    Answered(String),
    Failed {
        error: FormError,
        /// Answer hidden behind a validation error, restored once the error clears
        answer: Option<String>,
    },
}

/// What the panel area below the input shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
    Error(&'a str),
    Answer(&'a str),
    Examples,
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub clear_enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FormView {
    query: String,
    phase: Phase,
    last_generation: u64,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.phase {
            Phase::Answered(answer) => Some(answer.as_str()),
            Phase::Failed {
                answer: Some(answer),
                ..
            } => Some(answer.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<FormError> {
        match &self.phase {
            Phase::Failed { error, .. } => Some(*error),
            _ => None,
        }
    }

    pub fn input_changed(&mut self, text: impl Into<String>) {
        self.query = text.into();

        if let Phase::Failed { answer, .. } = &mut self.phase {
            let restored = answer.take();
            self.phase = restored.map(Phase::Answered).unwrap_or_default();
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            debug!("Submit ignored, request already in flight");
            return SubmitOutcome::Busy;
        }

        if self.query.trim().is_empty() {
            let answer = self.answer().map(str::to_string);
            self.phase = Phase::Failed {
                error: FormError::Validation,
                answer,
            };
            return SubmitOutcome::Rejected;
        }

        self.last_generation += 1;
        let generation = Generation(self.last_generation);
        self.phase = Phase::Loading { generation };

        let payload = TourismRequest::new(&self.query);
        info!(place = %payload.place, ?generation, "Submitting tourism query");

        SubmitOutcome::Send(PendingRequest {
            generation,
            payload,
        })
    }

    pub fn key_pressed(&mut self, key: Key) -> Option<SubmitOutcome> {
        match key {
            Key::Enter => Some(self.submit()),
            Key::Other => None,
        }
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<TourismResponse, RequestError>,
    ) -> Completion {
        match self.phase {
            Phase::Loading { generation: current } if current == generation => {}
            _ => {
                debug!(?generation, "Dropping stale tourism response");
                return Completion::Stale;
            }
        }

        self.phase = match result {
            Ok(response) => Phase::Answered(response.answer),
            Err(e) => {
                error!("Tourism request failed: {}", e);
                Phase::Failed {
                    error: FormError::Request,
                    answer: None,
                }
            }
        };

        Completion::Applied
    }

    /// Empties query, answer and error. An in-flight request keeps loading.
    pub fn clear(&mut self) {
        self.query.clear();
        if !self.is_loading() {
            self.phase = Phase::Idle;
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.query.trim().is_empty()
    }

    pub fn render(&self) -> Panel<'_> {
        match &self.phase {
            Phase::Failed { error, .. } => Panel::Error(error.message()),
            Phase::Answered(answer) if !answer.is_empty() => Panel::Answer(answer.as_str()),
            Phase::Answered(_) | Phase::Idle => Panel::Examples,
            Phase::Loading { .. } => Panel::Waiting,
        }
    }

    pub fn controls(&self) -> Controls {
        let loading = self.is_loading();
        Controls {
            input_enabled: !loading,
            submit_enabled: self.can_submit(),
            submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
            clear_enabled: true,
        }
    }
}
