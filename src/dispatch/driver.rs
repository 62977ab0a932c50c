//! Async pacing for dispatches
//!
//! The desk is shared behind a tokio mutex. The lock is never held across
//! the settle delay, so the host can keep reading the desk while a call
//! is being assessed.

use super::{Desk, Settlement};
use crate::core::error::Result;
use crate::core::types::{CallId, ParticipantId};
use crate::fit::FitVerdict;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::sleep;

#[derive(Clone)]
pub struct Dispatcher {
    desk: Arc<Mutex<Desk>>,
    settle_delay: Duration,
}

impl Dispatcher {
    pub fn new(desk: Desk) -> Self {
        let settle_delay = desk.config().settle_delay();
        Self {
            desk: Arc::new(Mutex::new(desk)),
            settle_delay,
        }
    }

    /// Lock the desk for direct reads or host edits
    pub async fn desk(&self) -> MutexGuard<'_, Desk> {
        self.desk.lock().await
    }

    pub async fn assign(&self, call_id: CallId, participant: ParticipantId) -> Result<Option<ParticipantId>> {
        self.desk.lock().await.assign(call_id, participant)
    }

    pub async fn preview(&self, call_id: CallId, participant: &ParticipantId) -> Result<FitVerdict> {
        self.desk.lock().await.preview(call_id, participant)
    }

    pub async fn reset(&self, call_id: CallId) -> Result<()> {
        self.desk.lock().await.reset(call_id)
    }

    /// Start a dispatch and settle it after the pacing delay
    ///
    /// Rejections (unknown call, no assignment, not idle) are returned
    /// immediately. Otherwise the call is assessing when this returns and the
    /// handle resolves to the settle result. Dropping the handle does not
    /// cancel the settle.
    pub async fn dispatch(&self, call_id: CallId) -> Result<JoinHandle<Result<Settlement>>> {
        self.desk.lock().await.begin_dispatch(call_id)?;

        let desk = Arc::clone(&self.desk);
        let delay = self.settle_delay;
        Ok(tokio::spawn(async move {
            sleep(delay).await;
            desk.lock().await.settle(call_id)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DispatchConfig;
    use crate::core::error::DispatchError;
    use crate::dispatch::{Call, CallType, DispatchStatus};
    use crate::fit::RequirementSet;
    use crate::labels::{Character, Label, LabelSet};

    fn setup() -> (Dispatcher, CallId, ParticipantId) {
        let mut desk = Desk::new(DispatchConfig::default());
        let id = ParticipantId::new("beacon");
        desk.add_character(id.clone(), Character::new("Beacon", LabelSet::from_values([2, 0, 1, 1, -1])));
        let call_id = desk.add_call(Call::new(
            "Cat in a tree",
            CallType::Rescue,
            RequirementSet::new().with(Label::Savior, 1),
        ));
        (Dispatcher::new(desk), call_id, id)
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_settles_after_delay() {
        let (dispatcher, call_id, id) = setup();
        dispatcher.assign(call_id, id).await.unwrap();

        let started = tokio::time::Instant::now();
        let handle = dispatcher.dispatch(call_id).await.unwrap();
        assert_eq!(
            dispatcher.desk().await.session(call_id).unwrap().status(),
            DispatchStatus::Assessing
        );

        let settlement = handle.await.unwrap().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(settlement.verdict, FitVerdict::Great);
        assert!(dispatcher.desk().await.session(call_id).unwrap().is_assessed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_still_settles() {
        let (dispatcher, call_id, id) = setup();
        dispatcher.assign(call_id, id).await.unwrap();
        drop(dispatcher.dispatch(call_id).await.unwrap());

        sleep(Duration::from_millis(900)).await;
        let desk = dispatcher.desk().await;
        assert_eq!(desk.session(call_id).unwrap().status(), DispatchStatus::Qualified);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_rejections_are_immediate() {
        let (dispatcher, call_id, id) = setup();
        assert!(matches!(
            dispatcher.dispatch(call_id).await,
            Err(DispatchError::NoAssignment)
        ));

        dispatcher.assign(call_id, id).await.unwrap();
        let handle = dispatcher.dispatch(call_id).await.unwrap();
        assert!(matches!(
            dispatcher.dispatch(call_id).await,
            Err(DispatchError::InvalidTransition { from: DispatchStatus::Assessing, .. })
        ));
        assert!(dispatcher.reset(call_id).await.is_err());
        handle.await.unwrap().unwrap();
    }
}
