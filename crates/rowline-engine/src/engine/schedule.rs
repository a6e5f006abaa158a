use std::time::Duration;

/// Identifies one game session.
///
/// Each new game gets a fresh generation. Scheduled tasks carry the
/// generation that requested them, and the controller ignores tasks whose
/// generation is no longer current. This stands in for cancelling timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// What a scheduled continuation does when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TaskKind {
    /// Let the AI pick and play its move.
    AiTurn,
    /// Apply a pending removal and resolve the move that caused it.
    FinishRemoval,
}

/// A continuation the controller asks the host to run after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    generation: Generation,
    kind: TaskKind,
    delay: Duration,
}

impl ScheduledTask {
    #[must_use]
    pub const fn new(generation: Generation, kind: TaskKind, delay: Duration) -> Self {
        Self {
            generation,
            kind,
            delay,
        }
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// Timer registration supplied by the host.
///
/// The controller never waits. It hands tasks to the scheduler, and the
/// host later passes each task back to
/// [`GameController::run_task`](super::GameController::run_task) once its
/// delay has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, task: ScheduledTask);
}

/// Collects tasks without timing them; the caller decides when to run them.
impl Scheduler for Vec<ScheduledTask> {
    fn schedule(&mut self, task: ScheduledTask) {
        self.push(task);
    }
}

/// Scheduler driven by explicit time advances.
///
/// The host calls [`TimerQueue::advance`] with the time elapsed since the
/// previous call and runs whatever becomes due. Tasks with the same due time
/// come out in the order they were scheduled.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use rowline_engine::{Generation, ScheduledTask, Scheduler, TaskKind, TimerQueue};
///
/// let mut timers = TimerQueue::new();
/// timers.schedule(ScheduledTask::new(
///     Generation::default(),
///     TaskKind::AiTurn,
///     Duration::from_millis(500),
/// ));
///
/// assert!(timers.advance(Duration::from_millis(300)).is_empty());
/// assert_eq!(timers.advance(Duration::from_millis(200)).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    entries: Vec<(Duration, ScheduledTask)>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Time left until the earliest pending task is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|(due, _)| due.saturating_sub(self.now))
            .min()
    }

    /// Moves the clock forward and returns the tasks that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|(at, _)| *at <= now);
        self.entries = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, task: ScheduledTask) {
        self.entries.push((self.now + task.delay, task));
    }
}
