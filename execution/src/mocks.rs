use crate::crash::{round::Settler, UnitSource};
use crashbet_types::crash::{Error, Settlement, WagerRequest};
use std::future::Future;

/// Scripted [UnitSource] that cycles through fixed values.
///
/// An empty script always yields `0.0`.
pub struct SequenceSource {
    values: Vec<f64>,
    draws: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, draws: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UnitSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value
    }
}

/// [Settler] that answers every wager with the same result and records requests.
pub struct FixedSettler {
    result: Result<Settlement, Error>,
    requests: Vec<WagerRequest>,
}

impl FixedSettler {
    pub fn new(result: Result<Settlement, Error>) -> Self {
        Self {
            result,
            requests: Vec::new(),
        }
    }

    pub fn requests(&self) -> &[WagerRequest] {
        &self.requests
    }
}

impl Settler for FixedSettler {
    fn play(
        &mut self,
        request: WagerRequest,
    ) -> impl Future<Output = Result<Settlement, Error>> + Send {
        self.requests.push(request);
        let result = self.result.clone();
        async move { result }
    }
}
