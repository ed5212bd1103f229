//! Council Debate Simulator
//!
//! Drives the scripted five-agent debate: a timer-paced reveal of a fixed
//! transcript, a bounded random walk over per-agent confidence, and a
//! derived consensus recomputed after every reveal.
//!
//! The original expressed this as chained deferred callbacks. Here it is an
//! explicit state machine (`Idle -> Speaking(i) -> Revealed(i) -> ... ->
//! Done`) with pure transition methods, so the sequencing logic is testable
//! without timers. `CouncilRun` layers tokio timers on top and owns the
//! single cancellation point: `cancel()` aborts every pending step.

use crate::script::{council_personas, council_script, ScriptLine, STARTUP_NAME};
use crate::types::{AgentState, Consensus, Message, Persona, Recommendation};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Confidence bounds after the initial draw
const CONFIDENCE_MIN: u8 = 50;
const CONFIDENCE_MAX: u8 = 100;

/// Where the simulator is in the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, nothing revealed yet
    Idle,
    /// Script line `i` is being "thought about" by its agent
    Speaking(usize),
    /// Script line `i` has been revealed; more lines remain
    Revealed(usize),
    /// Script exhausted; terminal and quiescent
    Done,
}

/// The scripted debate state machine. Holds no timers - see [`CouncilRun`].
pub struct CouncilSimulator<R: Rng> {
    rng: R,
    personas: Vec<Persona>,
    script: Vec<ScriptLine>,
    agents: Vec<AgentState>,
    transcript: Vec<Message>,
    consensus: Consensus,
    phase: Phase,
}

impl CouncilSimulator<StdRng> {
    /// Simulator with OS-seeded randomness (production path)
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CouncilSimulator<R> {
    /// Create the council with a uniform-random starting confidence in
    /// [60, 100) for each agent.
    pub fn new(mut rng: R) -> Self {
        let personas = council_personas();
        let agents: Vec<AgentState> = personas
            .iter()
            .map(|p| AgentState {
                id: p.id.clone(),
                confidence: rng.gen_range(60..100),
                is_speaking: false,
                recent_message: None,
            })
            .collect();
        let consensus = derive_consensus(&agents);

        Self {
            rng,
            personas,
            script: council_script(),
            agents,
            transcript: Vec::new(),
            consensus,
            phase: Phase::Idle,
        }
    }

    /// Mark the next scripted speaker as thinking. Exactly one agent has
    /// `is_speaking` set afterwards. Returns the speaker, or `None` when
    /// the script is exhausted or a reveal is already pending.
    pub fn start_speaking(&mut self) -> Option<&Persona> {
        let index = match self.phase {
            Phase::Idle => 0,
            Phase::Revealed(i) => i + 1,
            Phase::Speaking(_) | Phase::Done => return None,
        };
        let line = self.script.get(index)?;

        for agent in &mut self.agents {
            agent.is_speaking = agent.id == line.agent;
        }
        self.phase = Phase::Speaking(index);
        self.personas.iter().find(|p| p.id == line.agent)
    }

    /// Reveal the pending message: append it to the transcript, clear the
    /// speaking flag, walk the speaker's confidence by a uniform delta in
    /// [-5, +5) clamped to [50, 100], and recompute consensus. Transitions
    /// to `Done` after the final line.
    pub fn reveal(&mut self) -> Option<Message> {
        let Phase::Speaking(index) = self.phase else {
            return None;
        };
        let line = &self.script[index];

        let message = Message {
            id: Uuid::new_v4().to_string(),
            agent: line.agent.to_string(),
            text: line.text.to_string(),
            timestamp: Utc::now(),
        };
        self.transcript.push(message.clone());

        let delta = self.rng.gen_range(-5..5);
        for agent in &mut self.agents {
            if agent.id == line.agent {
                agent.confidence = walk_confidence(agent.confidence, delta);
                agent.recent_message = Some(line.text.to_string());
                agent.is_speaking = false;
            }
        }

        self.consensus = derive_consensus(&self.agents);
        self.phase = if index + 1 == self.script.len() {
            Phase::Done
        } else {
            Phase::Revealed(index)
        };

        Some(message)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn consensus(&self) -> Consensus {
        self.consensus
    }

    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Point-in-time copy of everything a view needs
    pub fn snapshot(&self) -> CouncilSnapshot {
        CouncilSnapshot {
            startup_name: STARTUP_NAME.to_string(),
            agents: self.agents.clone(),
            transcript: self.transcript.clone(),
            consensus: self.consensus,
            done: self.is_done(),
        }
    }
}

/// Apply a confidence delta within the [50, 100] bounds
fn walk_confidence(current: u8, delta: i32) -> u8 {
    (current as i32 + delta).clamp(CONFIDENCE_MIN as i32, CONFIDENCE_MAX as i32) as u8
}

/// Rounded mean of agent confidences, mapped to a recommendation
fn derive_consensus(agents: &[AgentState]) -> Consensus {
    let total: u32 = agents.iter().map(|a| a.confidence as u32).sum();
    let mean = (total as f64 / agents.len() as f64).round() as u8;
    Consensus {
        rating: Recommendation::from_confidence(mean),
        confidence: mean,
    }
}

/// Immutable view of a council run for display code
#[derive(Debug, Clone, serde::Serialize)]
pub struct CouncilSnapshot {
    pub startup_name: String,
    pub agents: Vec<AgentState>,
    pub transcript: Vec<Message>,
    pub consensus: Consensus,
    pub done: bool,
}

/// Timer configuration for a driven council run
#[derive(Debug, Clone, Copy)]
pub struct CouncilTiming {
    /// Delay before the first speaker starts
    pub initial: Duration,
    /// "Thinking" delay between speaking and reveal
    pub thinking: Duration,
    /// Pause between a reveal and the next speaker
    pub between: Duration,
}

impl Default for CouncilTiming {
    fn default() -> Self {
        // Matches the original UI pacing
        Self {
            initial: Duration::from_millis(1000),
            thinking: Duration::from_millis(1500),
            between: Duration::from_millis(3000),
        }
    }
}

/// Progress notifications emitted by a [`CouncilRun`]
#[derive(Debug, Clone)]
pub enum CouncilEvent {
    /// An agent started thinking
    Thinking { agent: Persona },
    /// A message was revealed, with the consensus recomputed after it
    Message {
        message: Message,
        consensus: Consensus,
    },
    /// Script exhausted; no further events follow
    Finished,
}

/// A council simulation running on the tokio runtime.
///
/// The owner must call [`cancel`](CouncilRun::cancel) (or await
/// [`finished`](CouncilRun::finished)) before discarding the handle if the
/// run may still have pending timers, mirroring the view-teardown cleanup
/// the original performed.
pub struct CouncilRun {
    state: Arc<Mutex<CouncilSimulator<StdRng>>>,
    task: JoinHandle<()>,
}

impl CouncilRun {
    /// Start a run with OS-seeded randomness
    pub fn spawn(timing: CouncilTiming) -> (Self, UnboundedReceiver<CouncilEvent>) {
        Self::spawn_with_rng(StdRng::from_entropy(), timing)
    }

    /// Start a run with explicit randomness (seeded in tests)
    pub fn spawn_with_rng(
        rng: StdRng,
        timing: CouncilTiming,
    ) -> (Self, UnboundedReceiver<CouncilEvent>) {
        let state = Arc::new(Mutex::new(CouncilSimulator::new(rng)));
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(Arc::clone(&state), tx, timing));
        (Self { state, task }, rx)
    }

    /// Current state of the underlying simulator
    pub fn snapshot(&self) -> CouncilSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    /// Cancel all pending steps. State stays where it was; no further
    /// events are emitted.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the run to finish (or be cancelled)
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

/// Sequence the simulator steps with timers. Steps are strictly ordered:
/// each reveal is scheduled only after the previous delay elapsed.
async fn drive(
    state: Arc<Mutex<CouncilSimulator<StdRng>>>,
    tx: UnboundedSender<CouncilEvent>,
    timing: CouncilTiming,
) {
    tokio::time::sleep(timing.initial).await;

    loop {
        let agent = {
            let mut sim = state.lock().unwrap();
            match sim.start_speaking() {
                Some(persona) => persona.clone(),
                None => break,
            }
        };
        let _ = tx.send(CouncilEvent::Thinking { agent });

        tokio::time::sleep(timing.thinking).await;

        let revealed = {
            let mut sim = state.lock().unwrap();
            sim.reveal().map(|m| (m, sim.consensus(), sim.is_done()))
        };
        let Some((message, consensus, done)) = revealed else {
            break;
        };
        let _ = tx.send(CouncilEvent::Message { message, consensus });
        if done {
            break;
        }

        tokio::time::sleep(timing.between).await;
    }

    let _ = tx.send(CouncilEvent::Finished);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::council_script;

    fn seeded(seed: u64) -> CouncilSimulator<StdRng> {
        CouncilSimulator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn initial_confidences_in_range() {
        for seed in 0..20 {
            let sim = seeded(seed);
            assert_eq!(sim.agents().len(), 5);
            for agent in sim.agents() {
                assert!((60..100).contains(&agent.confidence));
                assert!(!agent.is_speaking);
                assert!(agent.recent_message.is_none());
            }
        }
    }

    #[test]
    fn initial_consensus_is_mean_of_confidences() {
        let sim = seeded(7);
        let total: u32 = sim.agents().iter().map(|a| a.confidence as u32).sum();
        let mean = (total as f64 / 5.0).round() as u8;
        assert_eq!(sim.consensus().confidence, mean);
        assert_eq!(sim.consensus().rating, Recommendation::from_confidence(mean));
    }

    #[test]
    fn exactly_one_agent_speaks_at_a_time() {
        let mut sim = seeded(3);
        let script = council_script();
        for line in &script {
            let persona = sim.start_speaking().expect("speaker").clone();
            assert_eq!(persona.id, line.agent);
            let speaking: Vec<&AgentState> =
                sim.agents().iter().filter(|a| a.is_speaking).collect();
            assert_eq!(speaking.len(), 1);
            assert_eq!(speaking[0].id, line.agent);
            sim.reveal().expect("reveal");
        }
    }

    #[test]
    fn full_run_reveals_script_in_order_then_stops() {
        let mut sim = seeded(11);
        let script = council_script();

        let mut reveals = 0;
        while sim.start_speaking().is_some() {
            assert!(sim.reveal().is_some());
            reveals += 1;
        }

        assert_eq!(reveals, 8);
        assert!(sim.is_done());
        assert_eq!(sim.transcript().len(), 8);
        for (message, line) in sim.transcript().iter().zip(&script) {
            assert_eq!(message.agent, line.agent);
            assert_eq!(message.text, line.text);
        }

        // Terminal: further transitions are no-ops
        assert!(sim.start_speaking().is_none());
        assert!(sim.reveal().is_none());
        assert_eq!(sim.transcript().len(), 8);
        assert_eq!(sim.phase(), Phase::Done);
        assert!(sim.agents().iter().all(|a| !a.is_speaking));
    }

    #[test]
    fn reveal_requires_a_pending_speaker() {
        let mut sim = seeded(5);
        assert!(sim.reveal().is_none());
        sim.start_speaking().unwrap();
        // A second start before the reveal is rejected
        assert!(sim.start_speaking().is_none());
        assert!(sim.reveal().is_some());
    }

    #[test]
    fn confidence_stays_clamped_and_consensus_tracks_mean() {
        let mut sim = seeded(13);
        while sim.start_speaking().is_some() {
            sim.reveal().unwrap();
            for agent in sim.agents() {
                assert!((50..=100).contains(&agent.confidence));
            }
            let total: u32 = sim.agents().iter().map(|a| a.confidence as u32).sum();
            let mean = (total as f64 / 5.0).round() as u8;
            let consensus = sim.consensus();
            assert_eq!(consensus.confidence, mean);
            assert_eq!(consensus.rating, Recommendation::from_confidence(mean));
        }
    }

    #[test]
    fn walk_confidence_clamps_at_bounds() {
        assert_eq!(walk_confidence(51, -5), 50);
        assert_eq!(walk_confidence(50, -1), 50);
        assert_eq!(walk_confidence(98, 4), 100);
        assert_eq!(walk_confidence(100, 4), 100);
        assert_eq!(walk_confidence(70, -5), 65);
        assert_eq!(walk_confidence(70, 4), 74);
    }

    #[test]
    fn reveal_records_recent_message() {
        let mut sim = seeded(17);
        sim.start_speaking().unwrap();
        let message = sim.reveal().unwrap();
        let speaker = sim
            .agents()
            .iter()
            .find(|a| a.id == message.agent)
            .unwrap();
        assert_eq!(speaker.recent_message.as_deref(), Some(message.text.as_str()));
        assert!(!speaker.is_speaking);
    }

    #[tokio::test]
    async fn driven_run_emits_eight_messages_then_finishes() {
        let timing = CouncilTiming {
            initial: Duration::ZERO,
            thinking: Duration::ZERO,
            between: Duration::ZERO,
        };
        let (run, mut events) =
            CouncilRun::spawn_with_rng(StdRng::seed_from_u64(99), timing);

        let script = council_script();
        let mut messages = Vec::new();
        while let Some(event) = events.recv().await {
            match event {
                CouncilEvent::Thinking { agent } => {
                    assert!(!agent.id.is_empty());
                }
                CouncilEvent::Message { message, consensus } => {
                    assert!((50..=100).contains(&consensus.confidence));
                    messages.push(message);
                }
                CouncilEvent::Finished => break,
            }
        }

        assert_eq!(messages.len(), 8);
        for (message, line) in messages.iter().zip(&script) {
            assert_eq!(message.agent, line.agent);
        }

        let snapshot = run.snapshot();
        assert!(snapshot.done);
        assert_eq!(snapshot.transcript.len(), 8);
        run.finished().await;
    }

    #[tokio::test]
    async fn cancelled_run_stops_emitting() {
        // Long delays so nothing happens before the cancel
        let timing = CouncilTiming {
            initial: Duration::from_secs(60),
            thinking: Duration::from_secs(60),
            between: Duration::from_secs(60),
        };
        let (run, mut events) =
            CouncilRun::spawn_with_rng(StdRng::seed_from_u64(1), timing);

        run.cancel();
        // Channel closes without a Finished event once the task is aborted
        assert!(events.recv().await.is_none());

        let snapshot = run.snapshot();
        assert_eq!(snapshot.transcript.len(), 0);
        assert!(!snapshot.done);
    }
}
