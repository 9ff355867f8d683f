use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives render outcomes from worker threads.
///
/// Called with frame delivery serialized, so implementations should hand
/// the event off quickly (e.g. into a channel) rather than composite inline.
pub trait RenderEventPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

impl<F> RenderEventPort for F
where
    F: Fn(RenderEvent) + Send + Sync,
{
    fn present(&self, event: RenderEvent) {
        self(event)
    }
}
