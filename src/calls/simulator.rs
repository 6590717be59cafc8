//! Timer-driven simulation of an outgoing call.
//!
//! `start` puts the call in `Dialing`, then one-shot timers move it to
//! `Connecting` and `Connected`; once connected a repeating timer counts the
//! elapsed seconds. `stop` cancels whatever is still scheduled.
//!
//! All state sits behind one mutex shared with the timer callbacks. Each
//! callback carries the generation it was scheduled under and does nothing if
//! the generation moved on, which `stop` (and a restart) guarantees under the
//! same lock. Once `stop` returns, no queued callback can change the session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chatcore::{CallPhase, CallSession};
use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::broadcast;

use super::error::CallError;
use super::events::{CHANNEL_CAPACITY, CallEvent};
use super::timer::ScheduledTask;
use crate::config::SimulatorConfig;

struct Inner {
    session: CallSession,
    generation: u64,
    running: bool,
    timers: Vec<ScheduledTask>,
    events: broadcast::Sender<CallEvent>,
}

impl Inner {
    fn emit(&self, event: CallEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn cancel_timers(&mut self) -> usize {
        let count = self.timers.len();
        for mut timer in self.timers.drain(..) {
            timer.cancel();
        }
        count
    }

    fn track(&mut self, timer: ScheduledTask) {
        self.timers.retain(ScheduledTask::is_pending);
        self.timers.push(timer);
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives one call screen's status through `Dialing -> Connecting -> Connected`.
///
/// Each instance owns its timers. Dropping the simulator stops it.
pub struct CallLifecycleSimulator {
    config: SimulatorConfig,
    inner: Arc<Mutex<Inner>>,
}

impl CallLifecycleSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            config,
            inner: Arc::new(Mutex::new(Inner {
                session: CallSession::new(),
                generation: 0,
                running: false,
                timers: Vec::new(),
                events,
            })),
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Receives every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CallEvent> {
        lock(&self.inner).events.subscribe()
    }

    pub fn snapshot(&self) -> CallSession {
        lock(&self.inner).session
    }

    pub fn display_label(&self) -> String {
        self.snapshot().display_label()
    }

    pub fn is_running(&self) -> bool {
        lock(&self.inner).running
    }

    /// Begins a fresh call in `Dialing`. A running simulation is discarded
    /// first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> Result<(), CallError> {
        self.config.validate()?;
        let runtime = Handle::try_current().map_err(|_| CallError::NoRuntime)?;

        let mut inner = lock(&self.inner);
        if inner.running {
            let cancelled = inner.cancel_timers();
            debug!(target: "Call/Simulator", "Restarting, cancelled {cancelled} pending timers");
        }
        inner.generation += 1;
        inner.session = CallSession::new();
        inner.running = true;
        inner.emit(CallEvent::PhaseChanged(CallPhase::Dialing));

        let timer = schedule_phase(
            runtime,
            Arc::downgrade(&self.inner),
            inner.generation,
            self.config,
            CallPhase::Connecting,
        );
        inner.track(timer);
        info!(target: "Call/Simulator", "Call started (generation {})", inner.generation);
        Ok(())
    }

    /// Cancels every pending phase change and the duration counter.
    ///
    /// Idempotent, and safe whether or not `start` was ever called.
    pub fn stop(&self) {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        let cancelled = inner.cancel_timers();
        if inner.running {
            inner.running = false;
            inner.emit(CallEvent::Stopped);
            info!(
                target: "Call/Simulator",
                "Call stopped in {:?} after {}s, cancelled {cancelled} timers",
                inner.session.phase,
                inner.session.elapsed_secs
            );
        }
    }
}

impl Drop for CallLifecycleSimulator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_phase(
    runtime: Handle,
    inner: Weak<Mutex<Inner>>,
    generation: u64,
    config: SimulatorConfig,
    phase: CallPhase,
) -> ScheduledTask {
    let spawner = runtime.clone();
    ScheduledTask::once(&runtime, config.phase_delay(), move || {
        let Some(shared) = inner.upgrade() else {
            return;
        };
        let mut state = lock(&shared);
        if state.generation != generation {
            return;
        }

        state.session.phase = phase;
        state.emit(CallEvent::PhaseChanged(phase));
        debug!(target: "Call/Simulator", "Phase -> {phase:?}");

        let next = match phase.next() {
            Some(next) => schedule_phase(spawner, inner, generation, config, next),
            None => schedule_ticks(spawner, inner, generation, config),
        };
        state.track(next);
    })
}

fn schedule_ticks(
    runtime: Handle,
    inner: Weak<Mutex<Inner>>,
    generation: u64,
    config: SimulatorConfig,
) -> ScheduledTask {
    ScheduledTask::repeating(&runtime, config.tick_interval(), move || {
        let Some(shared) = inner.upgrade() else {
            return;
        };
        let mut state = lock(&shared);
        if state.generation != generation {
            return;
        }

        state.session.elapsed_secs += 1;
        let elapsed_secs = state.session.elapsed_secs;
        state.emit(CallEvent::Tick { elapsed_secs });
    })
}
