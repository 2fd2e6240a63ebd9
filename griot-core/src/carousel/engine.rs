//! Carousel state machine.
//!
//! The engine owns the circular index and the transition phase of one
//! mounted carousel. It never touches a clock or a timer itself: every
//! time-dependent operation takes `now`, so the same engine can be driven by
//! the tokio [`driver`](super::driver), a UI framework's frame callback, or a
//! test.
//!
//! ```text
//!            initialize(non-empty)
//!   Inert ──────────────────────────► Idle ◄──────────────┐
//!     ▲                                │ tick()           │ complete(ticket)
//!     │ dispose()                      ▼                  │ abort(ticket)
//!     └───────────────────────── Transitioning ───────────┘
//!                                      │ tick() → Ignored(InFlight)
//! ```
//!
//! The index only moves in [`CarouselEngine::complete`], and only for the
//! ticket of the transition currently in flight. Overlapping ticks and
//! duplicate completions are therefore no-ops rather than double advances.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use griot_contracts::listener::CarouselListener;
use griot_model::{Slide, SlideId};
use tracing::{debug, trace};

use super::index::CircularIndex;
use super::timing::CarouselTiming;
use super::triple::{CardPosition, VisibleTriple};

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Not initialized, initialized with no slides, or disposed.
    Inert,
    /// Settled: progress is 0 and no transition is in flight.
    Idle,
    /// A transition is animating toward the next settle point.
    Transitioning,
}

/// Identifies one transition. Only the ticket of the in-flight transition can
/// commit or abort it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

/// Why a tick did not start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Inert,
    InFlight,
    Held,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Started(TransitionTicket),
    Ignored(SkipReason),
}

impl TickOutcome {
    pub fn ticket(self) -> Option<TransitionTicket> {
        match self {
            TickOutcome::Started(ticket) => Some(ticket),
            TickOutcome::Ignored(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    ticket: TransitionTicket,
    started_at: Instant,
    progress: f32,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Transitioning(InFlight),
}

#[derive(Debug)]
struct Mounted {
    slides: Arc<[Slide]>,
    index: CircularIndex,
    phase: Phase,
    held_until: Option<Instant>,
    settles: u64,
}

pub struct CarouselEngine {
    timing: CarouselTiming,
    listener: Arc<dyn CarouselListener>,
    mounted: Option<Mounted>,
    // Never reset, so tickets from before a dispose can't match later ones.
    tickets_issued: u64,
}

impl fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("timing", &self.timing)
            .field("state", &self.state())
            .field("len", &self.len())
            .field("current_index", &self.current_index())
            .field("progress", &self.progress())
            .field("tickets_issued", &self.tickets_issued)
            .finish()
    }
}

impl CarouselEngine {
    /// Create an inert engine. Call [`initialize`](Self::initialize) on mount.
    pub fn new(
        timing: CarouselTiming,
        listener: Arc<dyn CarouselListener>,
    ) -> Self {
        Self {
            timing,
            listener,
            mounted: None,
            tickets_issued: 0,
        }
    }

    /// Mount the engine over `slides`.
    ///
    /// The list is shared, never copied or reordered. An empty list leaves
    /// the engine [`EngineState::Inert`]: there is no visible triple and
    /// ticks are ignored. Re-initializing a mounted engine drops any
    /// in-flight transition.
    pub fn initialize(
        &mut self,
        slides: impl Into<Arc<[Slide]>>,
    ) -> EngineState {
        let slides: Arc<[Slide]> = slides.into();
        if self.mounted.is_some() {
            debug!("re-initializing a mounted carousel");
        }
        self.mounted = CircularIndex::new(slides.len()).map(|index| Mounted {
            slides,
            index,
            phase: Phase::Idle,
            held_until: None,
            settles: 0,
        });

        match &self.mounted {
            Some(mounted) => {
                debug!(len = mounted.slides.len(), "carousel initialized")
            }
            None => debug!("carousel initialized without slides; staying inert"),
        }
        self.state()
    }

    pub fn state(&self) -> EngineState {
        match &self.mounted {
            None => EngineState::Inert,
            Some(Mounted {
                phase: Phase::Idle, ..
            }) => EngineState::Idle,
            Some(Mounted {
                phase: Phase::Transitioning(_),
                ..
            }) => EngineState::Transitioning,
        }
    }

    pub fn timing(&self) -> &CarouselTiming {
        &self.timing
    }

    /// Number of slides, 0 while inert.
    pub fn len(&self) -> usize {
        self.mounted.as_ref().map_or(0, |m| m.slides.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        self.mounted.as_ref().map(|m| m.index.current())
    }

    /// Eased progress of the in-flight transition as of the last
    /// [`sample`](Self::sample); 0 when settled.
    pub fn progress(&self) -> f32 {
        match &self.mounted {
            Some(Mounted {
                phase: Phase::Transitioning(flight),
                ..
            }) => flight.progress,
            _ => 0.0,
        }
    }

    /// Ticket of the transition currently in flight.
    pub fn in_flight(&self) -> Option<TransitionTicket> {
        match &self.mounted {
            Some(Mounted {
                phase: Phase::Transitioning(flight),
                ..
            }) => Some(flight.ticket),
            _ => None,
        }
    }

    /// Number of committed transitions since the last initialize.
    pub fn settle_count(&self) -> u64 {
        self.mounted.as_ref().map_or(0, |m| m.settles)
    }

    /// Left/center/right slides around the current index.
    ///
    /// Safe to call mid-transition; the triple only changes on commit, and
    /// renderers interpolate with [`progress`](Self::progress).
    pub fn visible_triple(&self) -> Option<VisibleTriple<'_>> {
        self.mounted
            .as_ref()
            .map(|m| VisibleTriple::resolve(&m.slides, &m.index))
    }

    pub fn slide_at(&self, position: CardPosition) -> Option<&Slide> {
        self.visible_triple().map(|triple| triple.at(position))
    }

    /// Id of the slide under `position`, without notifying anyone.
    pub fn card_at(&self, position: CardPosition) -> Option<SlideId> {
        self.slide_at(position).map(|slide| slide.id.clone())
    }

    pub fn listener(&self) -> &Arc<dyn CarouselListener> {
        &self.listener
    }

    /// Timer entry point: start a transition unless one is already running.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(mounted) = self.mounted.as_mut() else {
            trace!("tick ignored: carousel is inert");
            return TickOutcome::Ignored(SkipReason::Inert);
        };

        if let Phase::Transitioning(flight) = &mounted.phase {
            trace!(ticket = flight.ticket.0, "tick ignored: transition in flight");
            return TickOutcome::Ignored(SkipReason::InFlight);
        }

        if let Some(until) = mounted.held_until {
            if now < until {
                trace!("tick ignored: held by a recent touch");
                return TickOutcome::Ignored(SkipReason::Held);
            }
            mounted.held_until = None;
        }

        self.tickets_issued += 1;
        let ticket = TransitionTicket(self.tickets_issued);
        mounted.phase = Phase::Transitioning(InFlight {
            ticket,
            started_at: now,
            progress: 0.0,
        });
        debug!(
            ticket = ticket.0,
            from = mounted.index.current(),
            "transition started"
        );
        TickOutcome::Started(ticket)
    }

    /// Recompute the eased progress of the in-flight transition.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        let duration = self.timing.transition_duration;
        let easing = self.timing.easing;
        let flight = self.in_flight_mut()?;
        let linear = linear_progress(flight.started_at, now, duration);
        flight.progress = easing.apply(linear);
        Some(flight.progress)
    }

    /// Whether the in-flight transition has run its full duration.
    pub fn is_due(&self, now: Instant) -> bool {
        match &self.mounted {
            Some(Mounted {
                phase: Phase::Transitioning(flight),
                ..
            }) => {
                now.saturating_duration_since(flight.started_at)
                    >= self.timing.transition_duration
            }
            _ => false,
        }
    }

    /// Commit the transition identified by `ticket`: advance the index,
    /// return to idle and report the new center to the listener.
    ///
    /// Returns `None` without touching state when `ticket` is not the
    /// in-flight transition (already committed, aborted, or disposed).
    pub fn complete(&mut self, ticket: TransitionTicket) -> Option<SlideId> {
        let center = self.commit(ticket)?;
        self.listener.on_settled(&center);
        Some(center)
    }

    /// [`complete`](Self::complete) without the settle notification. Hosts
    /// that guard the engine with a lock commit under it and notify
    /// [`listener`](Self::listener) after releasing it.
    pub fn commit(&mut self, ticket: TransitionTicket) -> Option<SlideId> {
        let mounted = self.mounted.as_mut()?;
        match mounted.phase {
            Phase::Transitioning(flight) if flight.ticket == ticket => {}
            _ => {
                trace!(ticket = ticket.0, "ignoring stale completion");
                return None;
            }
        }

        let index = mounted.index.advance();
        mounted.phase = Phase::Idle;
        mounted.settles += 1;
        let center = mounted.slides[index].id.clone();
        debug!(ticket = ticket.0, index, center = %center, "transition committed");
        Some(center)
    }

    /// Drop the transition identified by `ticket` without advancing, as when
    /// the host cancels the animation.
    pub fn abort(&mut self, ticket: TransitionTicket) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        match mounted.phase {
            Phase::Transitioning(flight) if flight.ticket == ticket => {
                mounted.phase = Phase::Idle;
                debug!(ticket = ticket.0, "transition aborted");
                true
            }
            _ => false,
        }
    }

    /// Manual interaction: hold off auto-advance for the resume delay.
    /// An in-flight transition keeps running.
    pub fn touch(&mut self, now: Instant) {
        let delay = self.timing.resume_delay;
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.held_until = Some(now + delay);
            trace!(?delay, "auto-advance held");
        }
    }

    /// Resolve the pressed card and forward its id to the listener.
    /// Does not change carousel state.
    pub fn on_card_press(&self, position: CardPosition) -> Option<SlideId> {
        let id = self.card_at(position)?;
        debug!(%position, slide = %id, "card pressed");
        self.listener.on_card_selected(&id);
        Some(id)
    }

    /// Forward a "see more" press. Independent of which slide is centered.
    pub fn on_see_more_press(&self) {
        debug!("see more pressed");
        self.listener.on_more_requested();
    }

    /// Return to the inert state, invalidating any in-flight ticket.
    /// Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if self.mounted.take().is_some() {
            debug!("carousel disposed");
        }
    }

    fn in_flight_mut(&mut self) -> Option<&mut InFlight> {
        match self.mounted.as_mut()?.phase {
            Phase::Transitioning(ref mut flight) => Some(flight),
            Phase::Idle => None,
        }
    }
}

fn linear_progress(started_at: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started_at);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use griot_contracts::listener::LoggingListener;
    use griot_model::ImageRef;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Selected(String),
        More,
        Settled(String),
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Event>>);

    impl CarouselListener for Recorder {
        fn on_card_selected(&self, id: &SlideId) {
            self.0.lock().push(Event::Selected(id.to_string()));
        }

        fn on_more_requested(&self) {
            self.0.lock().push(Event::More);
        }

        fn on_settled(&self, center: &SlideId) {
            self.0.lock().push(Event::Settled(center.to_string()));
        }
    }

    fn slides(ids: &[&str]) -> Vec<Slide> {
        ids.iter()
            .map(|id| {
                Slide::new(
                    SlideId::new(*id).unwrap(),
                    format!("Slide {id}"),
                    "",
                    ImageRef::new(format!("{id}.png")),
                )
            })
            .collect()
    }

    fn engine_over(ids: &[&str]) -> CarouselEngine {
        let mut engine = CarouselEngine::new(
            CarouselTiming::default(),
            Arc::new(LoggingListener),
        );
        engine.initialize(slides(ids));
        engine
    }

    fn settle(engine: &mut CarouselEngine, now: Instant) {
        let ticket = engine.tick(now).ticket().expect("tick should start");
        engine.complete(ticket).expect("completion should commit");
    }

    fn triple_ids(engine: &CarouselEngine) -> [String; 3] {
        let triple = engine.visible_triple().expect("mounted");
        triple.ids().map(|id| id.to_string())
    }

    #[test]
    fn empty_list_stays_inert() {
        let mut engine = engine_over(&[]);
        assert_eq!(engine.state(), EngineState::Inert);
        assert!(engine.visible_triple().is_none());
        assert_eq!(
            engine.tick(Instant::now()),
            TickOutcome::Ignored(SkipReason::Inert)
        );
        assert!(engine.on_card_press(CardPosition::Center).is_none());
    }

    #[test]
    fn initial_triple_wraps_left_to_last_slide() {
        let engine = engine_over(&["A", "B", "C", "D", "E"]);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(triple_ids(&engine), ["E", "A", "B"]);
    }

    #[test]
    fn index_only_moves_on_commit() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let start = Instant::now();
        let ticket = engine.tick(start).ticket().unwrap();
        assert_eq!(engine.state(), EngineState::Transitioning);

        let mid = engine.sample(start + Duration::from_millis(500)).unwrap();
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(triple_ids(&engine), ["C", "A", "B"]);

        assert_eq!(engine.complete(ticket).unwrap().as_str(), "B");
        assert_eq!(engine.current_index(), Some(1));
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn overlapping_ticks_advance_once() {
        let mut engine = engine_over(&["A", "B", "C", "D", "E"]);
        let now = Instant::now();
        let ticket = engine.tick(now).ticket().unwrap();
        assert_eq!(
            engine.tick(now + Duration::from_millis(10)),
            TickOutcome::Ignored(SkipReason::InFlight)
        );
        engine.complete(ticket);
        assert_eq!(engine.current_index(), Some(1));
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let ticket = engine.tick(Instant::now()).ticket().unwrap();
        assert!(engine.complete(ticket).is_some());
        assert!(engine.complete(ticket).is_none());
        assert_eq!(engine.current_index(), Some(1));
    }

    #[test]
    fn abort_keeps_old_index() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let ticket = engine.tick(Instant::now()).ticket().unwrap();
        assert!(engine.abort(ticket));
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.current_index(), Some(0));
        assert!(engine.complete(ticket).is_none());
    }

    #[test]
    fn index_after_t_ticks_is_t_mod_n() {
        for n in 1..=7usize {
            let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let mut engine = engine_over(&refs);
            let now = Instant::now();
            for t in 0..20usize {
                assert_eq!(engine.current_index(), Some(t % n), "n={n} t={t}");
                settle(&mut engine, now);
            }
        }
    }

    #[test]
    fn triple_is_distinct_for_three_or_more() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let now = Instant::now();
        for _ in 0..6 {
            let [l, c, r] = triple_ids(&engine);
            assert!(l != c && c != r && l != r);
            settle(&mut engine, now);
        }
    }

    #[test]
    fn single_slide_fills_every_position() {
        let mut engine = engine_over(&["only"]);
        assert_eq!(triple_ids(&engine), ["only", "only", "only"]);
        settle(&mut engine, Instant::now());
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(triple_ids(&engine), ["only", "only", "only"]);
    }

    #[test]
    fn two_slides_repeat_the_sides() {
        let engine = engine_over(&["A", "B"]);
        assert_eq!(triple_ids(&engine), ["B", "A", "B"]);
    }

    #[test]
    fn presses_route_to_listener_without_mutating() {
        let recorder = Arc::new(Recorder::default());
        let mut engine =
            CarouselEngine::new(CarouselTiming::default(), recorder.clone());
        engine.initialize(slides(&["A", "B", "C", "D", "E"]));
        let now = Instant::now();
        settle(&mut engine, now);
        settle(&mut engine, now);
        assert_eq!(engine.current_index(), Some(2));

        assert_eq!(engine.on_card_press(CardPosition::Left).unwrap().as_str(), "B");
        assert_eq!(engine.on_card_press(CardPosition::Right).unwrap().as_str(), "D");
        engine.on_see_more_press();
        assert_eq!(engine.current_index(), Some(2));

        assert_eq!(
            *recorder.0.lock(),
            vec![
                Event::Settled("B".into()),
                Event::Settled("C".into()),
                Event::Selected("B".into()),
                Event::Selected("D".into()),
                Event::More,
            ]
        );
    }

    #[test]
    fn touch_holds_ticks_until_resume_delay() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let now = Instant::now();
        engine.touch(now);
        assert_eq!(
            engine.tick(now + Duration::from_millis(1999)),
            TickOutcome::Ignored(SkipReason::Held)
        );
        assert!(matches!(
            engine.tick(now + Duration::from_millis(2000)),
            TickOutcome::Started(_)
        ));
    }

    #[test]
    fn dispose_is_idempotent_and_invalidates_tickets() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let stale = engine.tick(Instant::now()).ticket().unwrap();
        engine.dispose();
        engine.dispose();
        assert_eq!(engine.state(), EngineState::Inert);
        assert!(engine.complete(stale).is_none());

        engine.initialize(slides(&["A", "B", "C"]));
        let fresh = engine.tick(Instant::now()).ticket().unwrap();
        assert_ne!(stale, fresh);
        assert!(engine.complete(stale).is_none());
        assert_eq!(engine.current_index(), Some(0));
        assert!(engine.complete(fresh).is_some());
    }

    #[test]
    fn commit_advances_without_notifying() {
        let recorder = Arc::new(Recorder::default());
        let mut engine =
            CarouselEngine::new(CarouselTiming::default(), recorder.clone());
        engine.initialize(slides(&["A", "B", "C"]));
        let ticket = engine.tick(Instant::now()).ticket().unwrap();

        assert_eq!(engine.commit(ticket).unwrap().as_str(), "B");
        assert!(engine.commit(ticket).is_none());
        assert_eq!(engine.card_at(CardPosition::Right).unwrap().as_str(), "C");
        assert!(recorder.0.lock().is_empty());
    }

    #[test]
    fn due_after_full_duration() {
        let mut engine = engine_over(&["A", "B", "C"]);
        let start = Instant::now();
        engine.tick(start);
        let duration = engine.timing().transition_duration;
        assert!(!engine.is_due(start + duration / 2));
        assert!(engine.is_due(start + duration));
        assert_eq!(engine.sample(start + duration * 2), Some(1.0));
    }
}
