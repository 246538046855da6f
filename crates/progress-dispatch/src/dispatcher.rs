//! Event dispatcher
//!
//! Receives inbound events and dispatches them to the engine services.
//! A handler failure is logged and suppressed here: the event is dropped
//! with no counter change and no side effects, and the loop keeps running.

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use progress_core::{GatewayEvent, MessageCreated, ReactionAdded};
use progress_engine::{ProgressionService, ServiceContext, StatsCommandService};

/// Event dispatcher that routes gateway events into the engine
#[derive(Clone)]
pub struct Dispatcher {
    ctx: ServiceContext,
}

impl Dispatcher {
    /// Create a new dispatcher over the given service context
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Consume events until the sending side closes
    ///
    /// Each event is handled on its own spawned task; ordering is only
    /// preserved per arrival into the spawn, never across handlers.
    pub async fn run(&self, mut events: mpsc::Receiver<GatewayEvent>) {
        info!("Dispatcher started");

        while let Some(event) = events.recv().await {
            let ctx = self.ctx.clone();
            tokio::spawn(async move {
                handle_event(&ctx, event).await;
            });
        }

        info!("Event stream closed, dispatcher stopping");
    }

    /// Handle a single event inline (used by tests and catch-up paths)
    pub async fn handle(&self, event: GatewayEvent) {
        handle_event(&self.ctx, event).await;
    }
}

/// Handler-level guard: every failure ends here, logged, never propagated
async fn handle_event(ctx: &ServiceContext, event: GatewayEvent) {
    match event {
        GatewayEvent::MessageCreated(message) => handle_message(ctx, &message).await,
        GatewayEvent::ReactionAdded(reaction) => handle_reaction(ctx, &reaction).await,
    }
}

async fn handle_message(ctx: &ServiceContext, message: &MessageCreated) {
    // Stats commands run for any guild message, independent of the
    // monitored-channel whitelist.
    if let Err(e) = StatsCommandService::new(ctx).maybe_handle(message).await {
        warn!(
            author_id = %message.author_id,
            code = e.code(),
            error = %e,
            "Stats command failed"
        );
    }

    match ProgressionService::new(ctx)
        .handle_message(message, Utc::now())
        .await
    {
        Ok(outcome) => debug!(author_id = %message.author_id, ?outcome, "Message handled"),
        Err(e) => warn!(
            author_id = %message.author_id,
            code = e.code(),
            error = %e,
            "Message handler failed, event dropped"
        ),
    }
}

async fn handle_reaction(ctx: &ServiceContext, reaction: &ReactionAdded) {
    match ProgressionService::new(ctx)
        .handle_reaction(reaction, Utc::now())
        .await
    {
        Ok(outcome) => debug!(user_id = %reaction.user_id, ?outcome, "Reaction handled"),
        Err(e) => warn!(
            user_id = %reaction.user_id,
            code = e.code(),
            error = %e,
            "Reaction handler failed, event dropped"
        ),
    }
}

/// Spawn the periodic cooldown-window prune task
///
/// Pruning only bounds memory; correctness never depends on it running.
pub fn run_prune_task(ctx: ServiceContext, period: std::time::Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick fires immediately; skip it so a fresh window is
        // not pruned before anything lands in it.
        interval.tick().await;
        loop {
            interval.tick().await;
            ctx.window().prune(Utc::now());
        }
    })
}
