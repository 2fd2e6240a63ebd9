//! Callbacks a mounted carousel reports to its host screen.

use griot_model::SlideId;

/// Receives press intents and settle notifications from a carousel.
///
/// Implementations are invoked synchronously from inside the press handler
/// or the transition commit, so they should hand work off (navigation,
/// lookups) rather than block.
pub trait CarouselListener: Send + Sync {
    /// A card was pressed; `id` is the slide under that card.
    fn on_card_selected(&self, id: &SlideId);

    /// The "see more" affordance was pressed.
    fn on_more_requested(&self);

    /// A transition committed and `center` is now the centre card.
    fn on_settled(&self, _center: &SlideId) {}
}

/// Listener that only records intents in the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl CarouselListener for LoggingListener {
    fn on_card_selected(&self, id: &SlideId) {
        tracing::debug!(slide = %id, "card selected");
    }

    fn on_more_requested(&self) {
        tracing::debug!("more requested");
    }

    fn on_settled(&self, center: &SlideId) {
        tracing::trace!(slide = %center, "carousel settled");
    }
}
