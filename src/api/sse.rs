use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::Stream;
use tokio_stream::{wrappers::ReceiverStream, StreamExt};

use crate::api::AppState;
use crate::push::{HeartbeatEmitter, HEARTBEAT_EVENT};

/// Heartbeat event stream; one emitter per connection
pub async fn heartbeat_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::info!("SSE client connected");

    let beats = HeartbeatEmitter::new(
        state.config.heartbeat_interval(),
        state.heartbeat.clone(),
        state.shutdown.child_token(),
    )
    .spawn();

    let stream = ReceiverStream::new(beats).map(|beat| {
        Ok(Event::default()
            .event(HEARTBEAT_EVENT)
            .id(beat.seq.to_string())
            .data(beat.data()))
    });

    Sse::new(stream)
}
