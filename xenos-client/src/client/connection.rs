//! # Channel Lifecycle
//!
//! A [`Connection`] owns the gRPC stub of a [`super::XenosClient`] and keeps track of the
//! lookups that are currently in flight, so that the channel can be shut down gracefully.
//!
//! ## Shutdown
//!
//! 1. The stub is detached. Lookups started afterwards fail immediately with `UNAVAILABLE`.
//! 2. In-flight lookups get a grace period to finish.
//! 3. Once the grace period elapsed, the remaining lookups are aborted with `UNAVAILABLE` and
//!    release their handles to the channel.
//!
//! Dropping the shutdown future early forces step 3 right away.
use crate::proto::profile_client::ProfileClient;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit, watch};
use tracing::{debug, warn};

/// The [`Duration`] that is waited at maximum for in-flight lookups when closing the client.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Upper bound of concurrent lookups, every lookup holds one permit while it is in flight.
const MAX_INFLIGHT: u32 = u32::MAX >> 3;

const CHANNEL_SHUTDOWN: &str = "Channel shutdown invoked";

pub(crate) struct Connection<S> {
    stub: Mutex<Option<ProfileClient<S>>>,
    inflight: Semaphore,
    terminated: watch::Sender<bool>,
    grace_period: Duration,
}

impl<S> Connection<S> {
    pub(crate) fn new(stub: ProfileClient<S>) -> Self {
        let (terminated, _) = watch::channel(false);

        Self {
            stub: Mutex::new(Some(stub)),
            inflight: Semaphore::new(MAX_INFLIGHT as usize),
            terminated,
            grace_period: SHUTDOWN_GRACE_PERIOD,
        }
    }

    pub(crate) fn set_grace_period(&mut self, grace_period: Duration) {
        self.grace_period = grace_period;
    }

    fn is_terminated(&self) -> bool {
        *self.terminated.borrow()
    }

    /// Aborts all in-flight lookups and rejects new ones.
    fn terminate(&self) {
        self.inflight.close();
        self.terminated.send_replace(true);
    }

    /// Closes the channel, see the module documentation for the individual steps.
    pub(crate) async fn close(&self) {
        let stub = self
            .stub
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if stub.is_none() && self.is_terminated() {
            return;
        }

        // Our own handle is released right away, in-flight lookups still hold theirs.
        drop(stub);

        debug!(grace_period = ?self.grace_period, "shutting down xenos channel");

        let mut guard = ShutdownGuard {
            connection: self,
            completed: false,
        };

        match tokio::time::timeout(self.grace_period, self.inflight.acquire_many(MAX_INFLIGHT)).await
        {
            Ok(Ok(_)) => debug!("xenos channel drained"),
            // A concurrent shutdown already terminated the connection.
            Ok(Err(_)) => {}
            Err(_) => warn!(
                grace_period = ?self.grace_period,
                "in-flight lookups did not finish within the grace period, forcing shutdown"
            ),
        }

        guard.completed = true;
    }
}

impl<S: Clone> Connection<S> {
    /// Reserves a slot for one lookup together with its own handle to the channel.
    pub(crate) fn lease(&self) -> Result<Lease<'_, S>, tonic::Status> {
        let permit = self.inflight.try_acquire().map_err(|_| channel_shutdown())?;

        let stub = self
            .stub
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(channel_shutdown)?;

        Ok(Lease {
            stub,
            terminated: self.terminated.subscribe(),
            _permit: permit,
        })
    }

    /// Leases a handle and runs the RPC with it. Fails with `UNAVAILABLE` once the connection
    /// is closing.
    pub(crate) async fn call<T, F, Fut>(&self, rpc: F) -> Result<T, tonic::Status>
    where
        F: FnOnce(ProfileClient<S>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        self.lease()?.call(rpc).await
    }
}

/// A single in-flight lookup.
pub(crate) struct Lease<'a, S> {
    stub: ProfileClient<S>,
    terminated: watch::Receiver<bool>,
    _permit: SemaphorePermit<'a>,
}

impl<S> Lease<'_, S> {
    /// Runs the RPC, unless the connection gets terminated first.
    pub(crate) async fn call<T, F, Fut>(self, rpc: F) -> Result<T, tonic::Status>
    where
        F: FnOnce(ProfileClient<S>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        let Lease {
            stub,
            mut terminated,
            _permit,
        } = self;

        let terminated = async move {
            let _ = terminated.wait_for(|closed| *closed).await;
        };

        tokio::select! {
            response = rpc(stub) => response.map(tonic::Response::into_inner),
            _ = terminated => Err(channel_shutdown()),
        }
    }
}

/// Terminates the connection once the shutdown finished or got interrupted.
struct ShutdownGuard<'a, S> {
    connection: &'a Connection<S>,
    completed: bool,
}

impl<S> Drop for ShutdownGuard<'_, S> {
    fn drop(&mut self) {
        if !self.completed {
            debug!("interrupted while waiting for the shutdown of the xenos channel, forcing it");
        }

        self.connection.terminate();
    }
}

fn channel_shutdown() -> tonic::Status {
    tonic::Status::unavailable(CHANNEL_SHUTDOWN)
}
