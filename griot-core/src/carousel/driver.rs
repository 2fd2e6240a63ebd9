//! tokio runtime plumbing for a mounted carousel.
//!
//! One timer task calls [`CarouselEngine::tick`] every auto-advance period.
//! Each started transition gets an animation task that samples progress every
//! frame, publishes [`CarouselFrame`]s, and commits the transition when its
//! duration has elapsed. Both kinds of task select on the driver's
//! cancellation token and re-check their ticket under the engine lock, so
//! once [`CarouselDriver::dispose`] returns nothing can reach the engine
//! again.

use std::sync::Arc;
use std::time::Duration;

use griot_contracts::listener::CarouselListener;
use griot_model::{Slide, SlideId};
use parking_lot::{Mutex, ReentrantMutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::engine::{CarouselEngine, EngineState, TickOutcome, TransitionTicket};
use super::triple::CardPosition;

/// Snapshot published to renderers after every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub state: EngineState,
    pub index: Option<usize>,
    pub progress: f32,
    pub center: Option<SlideId>,
    pub settles: u64,
}

impl CarouselFrame {
    pub fn capture(engine: &CarouselEngine) -> Self {
        Self {
            state: engine.state(),
            index: engine.current_index(),
            progress: engine.progress(),
            center: engine
                .slide_at(CardPosition::Center)
                .map(|slide| slide.id.clone()),
            settles: engine.settle_count(),
        }
    }
}

struct Shared {
    engine: Mutex<CarouselEngine>,
    listener: Arc<dyn CarouselListener>,
    /// Held while a listener runs. Reentrant so a listener can dispose the
    /// driver from its own callback.
    callbacks: ReentrantMutex<()>,
    frames: watch::Sender<CarouselFrame>,
    shutdown: CancellationToken,
}

impl Shared {
    fn publish(&self, engine: &CarouselEngine) {
        self.frames.send_replace(CarouselFrame::capture(engine));
    }
}

/// Owns one engine for the lifetime of a mount.
///
/// Listeners are called after the engine lock is released, so they may call
/// back into the driver, including [`dispose`](CarouselDriver::dispose). No
/// listener is called once `dispose` has returned.
pub struct CarouselDriver {
    shared: Arc<Shared>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for CarouselDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timer_armed = self
            .timer
            .try_lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        f.debug_struct("CarouselDriver")
            .field("frame", &*self.shared.frames.borrow())
            .field("timer_armed", &timer_armed)
            .field("disposed", &self.shared.shutdown.is_cancelled())
            .finish()
    }
}

impl CarouselDriver {
    /// Initialize `engine` over `slides` and arm the auto-advance timer.
    ///
    /// Must be called from within a tokio runtime. With no slides the engine
    /// stays inert and no timer is armed.
    pub fn mount(
        mut engine: CarouselEngine,
        slides: impl Into<Arc<[Slide]>>,
    ) -> Self {
        let state = engine.initialize(slides);
        let (frames, _) = watch::channel(CarouselFrame::capture(&engine));
        let period = engine.timing().auto_advance_period;
        let listener = Arc::clone(engine.listener());

        let driver = Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                listener,
                callbacks: ReentrantMutex::new(()),
                frames,
                shutdown: CancellationToken::new(),
            }),
            timer: Mutex::new(None),
        };

        if state != EngineState::Inert {
            let handle = spawn_timer(Arc::clone(&driver.shared), period);
            *driver.timer.lock() = Some(handle);
        } else {
            debug!("carousel mounted without slides; timer not armed");
        }
        driver
    }

    /// Receive a frame on every start, sample, commit and dispose.
    pub fn frames(&self) -> watch::Receiver<CarouselFrame> {
        self.shared.frames.subscribe()
    }

    pub fn snapshot(&self) -> CarouselFrame {
        CarouselFrame::capture(&self.shared.engine.lock())
    }

    /// Read the engine under its lock, e.g. to render the visible triple.
    pub fn with_engine<R>(&self, f: impl FnOnce(&CarouselEngine) -> R) -> R {
        f(&self.shared.engine.lock())
    }

    /// Owned ids of the left, center and right slides.
    pub fn visible_ids(&self) -> Option<[SlideId; 3]> {
        self.with_engine(|engine| {
            engine
                .visible_triple()
                .map(|triple| triple.ids().map(SlideId::clone))
        })
    }

    /// Start a transition now instead of waiting for the timer. Follows the
    /// same guard as a timer tick.
    pub fn advance(&self) -> TickOutcome {
        start_transition(&self.shared)
    }

    pub fn press(&self, position: CardPosition) -> Option<SlideId> {
        let _callbacks = self.shared.callbacks.lock();
        let id = self.shared.engine.lock().card_at(position)?;
        debug!(%position, slide = %id, "card pressed");
        self.shared.listener.on_card_selected(&id);
        Some(id)
    }

    /// Forwarded whatever the carousel state.
    pub fn see_more(&self) {
        debug!("see more pressed");
        self.shared.listener.on_more_requested();
    }

    /// Manual touch: hold off auto-advance for the resume delay.
    pub fn touch(&self) {
        self.shared.engine.lock().touch(Instant::now().into_std());
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.shutdown.is_cancelled()
    }

    /// Cancel the timer and any in-flight animation and return the engine to
    /// the inert state. Safe to call more than once.
    pub fn dispose(&self) {
        self.shared.shutdown.cancel();
        if let Some(handle) = self.timer.lock().take() {
            handle.abort();
        }
        // Wait out a listener running on another thread.
        let _callbacks = self.shared.callbacks.lock();
        let mut engine = self.shared.engine.lock();
        if engine.state() != EngineState::Inert {
            engine.dispose();
            self.shared.publish(&engine);
        }
    }
}

impl Drop for CarouselDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn spawn_timer(shared: Arc<Shared>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = period.max(Duration::from_millis(1));
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                _ = shared.shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    start_transition(&shared);
                }
            }
        }
        trace!("carousel timer stopped");
    })
}

fn start_transition(shared: &Arc<Shared>) -> TickOutcome {
    let mut engine = shared.engine.lock();
    let outcome = engine.tick(Instant::now().into_std());
    if let TickOutcome::Started(ticket) = outcome {
        shared.publish(&engine);
        let frame_interval = engine.timing().frame_interval;
        tokio::spawn(animate(Arc::clone(shared), ticket, frame_interval));
    }
    outcome
}

async fn animate(
    shared: Arc<Shared>,
    ticket: TransitionTicket,
    frame_interval: Duration,
) {
    let mut frames = interval(frame_interval.max(Duration::from_millis(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = shared.shutdown.cancelled() => return,
            _ = frames.tick() => {}
        }

        let center = {
            let mut engine = shared.engine.lock();
            if engine.in_flight() != Some(ticket) {
                trace!("animation ended: transition no longer in flight");
                return;
            }
            let now = Instant::now().into_std();
            engine.sample(now);
            let center = if engine.is_due(now) {
                engine.commit(ticket)
            } else {
                None
            };
            if center.is_none() {
                shared.publish(&engine);
            }
            center
        };

        if let Some(center) = center {
            let _callbacks = shared.callbacks.lock();
            if shared.shutdown.is_cancelled() {
                return;
            }
            shared.listener.on_settled(&center);
            // A listener that disposed the driver already published the
            // inert frame.
            let engine = shared.engine.lock();
            if !shared.shutdown.is_cancelled() {
                shared.publish(&engine);
            }
            return;
        }
    }
}
