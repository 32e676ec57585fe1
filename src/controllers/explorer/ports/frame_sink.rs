use crate::controllers::explorer::events::RenderEvent;

/// Receives one event per frame: a fresh render or the reason there is none.
pub trait FrameSink {
    fn submit(&mut self, event: RenderEvent);
}
