//! Background refresh that pushes full sector snapshots to the UI loop.

use std::sync::Arc;
use std::time::Duration;

use sectora_core::{
    model::Sector,
    service::SectorService,
    store::{SectorAction, SectorStore},
};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time};
use tracing::debug;

#[derive(Debug)]
pub(crate) enum FeedEvent {
    Snapshot(Vec<Sector>),
    Failed(String),
}

/// Poll the backend every `every` and forward each result until the receiver
/// is dropped.
pub(crate) fn spawn(
    service: Arc<SectorService>,
    every: Duration,
    tx: UnboundedSender<FeedEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        // the first tick completes immediately and the caller already loaded once
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let event = match service.load().await {
                Ok(sectors) => FeedEvent::Snapshot(sectors),
                Err(err) => FeedEvent::Failed(err.to_string()),
            };
            if tx.send(event).is_err() {
                debug!("feed receiver closed, stopping refresh");
                break;
            }
        }
    })
}

pub(crate) fn apply(store: &mut SectorStore, event: FeedEvent) {
    match event {
        FeedEvent::Snapshot(sectors) => {
            store.clear_error();
            store.apply_push_snapshot(sectors);
        }
        FeedEvent::Failed(message) => store.apply(SectorAction::Failed(message)),
    }
}
