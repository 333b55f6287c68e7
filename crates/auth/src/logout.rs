//! Logout requests with a single-shot completion signal.
//!
//! Requesting a logout hands back a [`LogoutCompletion`]: a future that
//! resolves once the auth subsystem has finished logging out. The paired
//! [`LogoutSignal`] is consumed when fired, so each request completes at most
//! once.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::rc::Rc;

use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LogoutError {
    /// The signal was dropped without firing.
    #[error("logout completion abandoned before it was signalled")]
    Abandoned,
}

/// Create a connected signal/completion pair.
pub fn completion_pair() -> (LogoutSignal, LogoutCompletion) {
    let (tx, rx) = oneshot::channel();
    (LogoutSignal { tx }, LogoutCompletion { rx })
}

/// Sending half. Fire with [`LogoutSignal::complete`].
#[derive(Debug)]
pub struct LogoutSignal {
    tx: oneshot::Sender<()>,
}

impl LogoutSignal {
    pub fn complete(self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("logout completed after its waiter went away");
        }
    }
}

/// Receiving half: resolves to `Ok(())` when the logout has completed.
#[derive(Debug)]
#[must_use = "a logout completion does nothing unless awaited"]
pub struct LogoutCompletion {
    rx: oneshot::Receiver<()>,
}

impl LogoutCompletion {
    /// Non-blocking check: `None` while still pending.
    pub fn try_complete(&mut self) -> Option<Result<(), LogoutError>> {
        match self.rx.try_recv() {
            Ok(()) => Some(Ok(())),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(LogoutError::Abandoned)),
        }
    }
}

impl Future for LogoutCompletion {
    type Output = Result<(), LogoutError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|res| res.map_err(|_| LogoutError::Abandoned))
    }
}

/// Capability to log the current user out.
///
/// Fire-and-forget from the caller's side: success or failure of the
/// server round trip is handled by the implementation, which fires the
/// completion once it is done either way.
pub trait LogoutAction {
    fn logout_user_request(&self) -> LogoutCompletion;
}

impl<T> LogoutAction for Rc<T>
where
    T: LogoutAction + ?Sized,
{
    fn logout_user_request(&self) -> LogoutCompletion {
        (**self).logout_user_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_signalled() {
        let (signal, mut completion) = completion_pair();
        assert_eq!(completion.try_complete(), None);

        signal.complete();
        assert_eq!(completion.try_complete(), Some(Ok(())));
    }

    #[test]
    fn dropped_signal_is_abandoned() {
        let (signal, mut completion) = completion_pair();
        drop(signal);
        assert_eq!(completion.try_complete(), Some(Err(LogoutError::Abandoned)));
    }

    #[test]
    fn completing_without_waiter_is_harmless() {
        let (signal, completion) = completion_pair();
        drop(completion);
        signal.complete();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn completion_resolves_when_awaited() {
        let (signal, completion) = completion_pair();
        signal.complete();
        assert_eq!(completion.await, Ok(()));
    }
}
