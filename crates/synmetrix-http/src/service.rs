//! Small pieces shared by the services in this workspace

use std::pin::Pin;

use futures::Future;

/// Boxed, sendable future returned by the hand-written services in this workspace
pub type ResponseFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Takes the service that was driven to readiness out of `src`, leaving a fresh clone behind.
///
/// `poll_ready` is only guaranteed for the instance it was called on, so `call`
/// must move that instance into the returned future rather than a clone.
pub fn replace_ready_service<S: Clone>(src: &mut S) -> S {
    let clone = src.clone();
    std::mem::replace(src, clone)
}
