//! Tokio actor owning a scheduler on a single task.
//!
//! Requests are applied strictly in channel order, which gives the whole
//! operation surface one mutual-exclusion domain without a lock.

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::api::{handle_request, SchedulerRequest, SchedulerResponse};
use crate::core::{AdmissionQueue, RecordStore, Scheduler, SchedulerError, TreatmentLedger};

type Envelope = (SchedulerRequest, oneshot::Sender<SchedulerResponse>);

/// Cloneable client for a running [`SchedulerService`].
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::Sender<Envelope>,
}

impl SchedulerHandle {
    /// Send a request and wait for its response.
    pub async fn call(&self, request: SchedulerRequest) -> Result<SchedulerResponse, SchedulerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send((request, reply_tx))
            .await
            .map_err(|_| SchedulerError::ServiceClosed)?;
        reply_rx.await.map_err(|_| SchedulerError::ServiceClosed)
    }
}

/// Spawns the scheduler actor.
pub struct SchedulerService;

impl SchedulerService {
    /// Spawn on the current tokio runtime.
    ///
    /// The service stops once every [`SchedulerHandle`] is dropped; the join
    /// handle then yields the scheduler back.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<Q, R, L>(
        scheduler: Scheduler<Q, R, L>,
        buffer: usize,
    ) -> (SchedulerHandle, JoinHandle<Scheduler<Q, R, L>>)
    where
        Q: AdmissionQueue + Send + 'static,
        R: RecordStore + Send + 'static,
        L: TreatmentLedger + Send + 'static,
    {
        Self::spawn_on(&Handle::current(), scheduler, buffer)
    }

    /// Spawn on a specific runtime handle.
    pub fn spawn_on<Q, R, L>(
        runtime: &Handle,
        mut scheduler: Scheduler<Q, R, L>,
        buffer: usize,
    ) -> (SchedulerHandle, JoinHandle<Scheduler<Q, R, L>>)
    where
        Q: AdmissionQueue + Send + 'static,
        R: RecordStore + Send + 'static,
        L: TreatmentLedger + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<Envelope>(buffer.max(1));
        let join = runtime.spawn(async move {
            tracing::info!("scheduler service started");
            while let Some((request, reply)) = rx.recv().await {
                let response = handle_request(&mut scheduler, request);
                if reply.send(response).is_err() {
                    tracing::debug!("caller dropped before response was delivered");
                }
            }
            tracing::info!("scheduler service stopped");
            scheduler
        });
        (SchedulerHandle { tx }, join)
    }
}
