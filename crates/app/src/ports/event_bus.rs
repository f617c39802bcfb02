//! Event bus port — publishing side of the activity stream.

use std::future::Future;
use std::sync::Arc;

use hearth_domain::error::HearthError;
use hearth_domain::event::Event;

/// Outbound port for publishing activity events.
pub trait EventPublisher {
    /// Publish one event. Must succeed even when nobody is listening.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HearthError>> + Send;
}

// Several services share one bus; cloning an `Arc` is the intended way.
impl<T> EventPublisher for Arc<T>
where
    T: EventPublisher + Send + Sync,
{
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HearthError>> + Send {
        T::publish(self, event)
    }
}
