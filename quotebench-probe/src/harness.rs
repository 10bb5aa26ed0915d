use crate::api::{ApiError, QuoteApi};
use crate::config::PollPolicy;
use crate::timeline::Timeline;
use rand::Rng;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Failure tagged by the stage it happened in, so a consumer can react per
/// stage instead of collapsing everything into one generic error.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("quote creation failed: {0}")]
    Create(#[source] ApiError),
    #[error("quote update failed: {0}")]
    Update(#[source] ApiError),
    #[error("cache invalidation failed: {0}")]
    Invalidate(#[source] ApiError),
    #[error("poll request failed: {0}")]
    Poll(#[source] ApiError),
    #[error("no updated data after {attempts} polls in {elapsed:?}")]
    PollTimeout { attempts: u32, elapsed: Duration },
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct ProbeReport {
    pub quote_id: i64,
    /// Time from the invalidation trigger until the updated text was read.
    pub elapsed: Duration,
    pub attempts: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeState {
    Idle,
    Running,
    Success,
    Failed,
    TimedOut,
}

/// Runs the mutate → invalidate → poll sequence against the quote API and
/// measures how long invalidation takes to become visible.
pub struct InvalidationProbe<A> {
    api: A,
    poll: PollPolicy,
    state: ProbeState,
    timeline: Timeline,
}

impl<A: QuoteApi> InvalidationProbe<A> {
    pub fn new(api: A, poll: PollPolicy) -> Self {
        Self {
            api,
            poll,
            state: ProbeState::Idle,
            timeline: Timeline::new(),
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Run one full sequence. Terminal state is recorded on the probe; a new
    /// call re-enters `Running` and clears the previous timeline.
    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<ProbeReport, ProbeError> {
        self.timeline.clear();
        self.state = ProbeState::Running;

        let result = self.run_sequence(cancel).await;
        self.state = match &result {
            Ok(_) => ProbeState::Success,
            Err(ProbeError::PollTimeout { .. }) => ProbeState::TimedOut,
            Err(_) => ProbeState::Failed,
        };
        if let Err(e) = &result {
            self.timeline
                .log(format!("Cache invalidation test failed: {e}"));
        }
        result
    }

    async fn run_sequence(&mut self, cancel: &CancellationToken) -> Result<ProbeReport, ProbeError> {
        self.timeline.log("Starting cache invalidation test...");

        // Step 1: create a quote and log what came back
        let created = self.api.create_quote().await.map_err(ProbeError::Create)?;
        let initial = created
            .data
            .ok_or(ProbeError::Create(ApiError::EmptyRead))?;
        self.timeline.log(format!(
            "Created and fetched initial quote: \"{}\"",
            initial.quote
        ));

        // Step 2: overwrite it with a new randomized value
        let new_quote = random_quote();
        self.api
            .update_quote(initial.id, &new_quote)
            .await
            .map_err(ProbeError::Update)?;
        self.timeline.log(format!("Updated quote to: \"{new_quote}\""));

        // Step 3: trigger invalidation and start the clock
        let invalidation_start = Instant::now();
        self.api.invalidate().await.map_err(ProbeError::Invalidate)?;
        self.timeline.log("Cache invalidation event triggered.");

        // Step 4: poll until the read path reflects the update
        self.timeline.log("Waiting for updated data...");
        let report = self
            .poll_until_updated(initial.id, &new_quote, invalidation_start, cancel)
            .await?;
        self.timeline.log(format!(
            "Updated data received: \"{}\" after {} ms ({:.2} seconds).",
            new_quote,
            report.elapsed.as_millis(),
            report.elapsed.as_secs_f64()
        ));

        Ok(report)
    }

    /// Bounded poll loop: exponential backoff between fetches, an overall
    /// deadline, and prompt abort on cancellation. Timing out is its own
    /// outcome, not a generic failure.
    async fn poll_until_updated(
        &mut self,
        id: i64,
        expected: &str,
        started: Instant,
        cancel: &CancellationToken,
    ) -> Result<ProbeReport, ProbeError> {
        let deadline = started + self.poll.deadline;
        let mut delay = self.poll.initial_delay;
        let mut attempts = 0u32;

        loop {
            if cancel.is_cancelled() || Instant::now() >= deadline {
                return Err(ProbeError::PollTimeout {
                    attempts,
                    elapsed: started.elapsed(),
                });
            }

            attempts += 1;
            let read = self.api.get_quote(id).await.map_err(ProbeError::Poll)?;
            if read.data.as_ref().is_some_and(|d| d.quote == expected) {
                return Ok(ProbeReport {
                    quote_id: id,
                    elapsed: started.elapsed(),
                    attempts,
                });
            }

            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {}
            }
            delay = (delay * 2).min(self.poll.max_delay);
        }
    }
}

/// Randomized replacement text in the demo's "Random Number" format.
pub fn random_quote() -> String {
    let n = rand::rng().random_range(0..100_000);
    format!("This is a quote - Random Number: {}", n)
}
