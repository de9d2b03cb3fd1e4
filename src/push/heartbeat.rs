use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use strum::Display;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Event type label of every heartbeat
pub const HEARTBEAT_EVENT: &str = "TriggerReload";

/// Events buffered between the emitter and the response body
const STREAM_BUFFER: usize = 8;

/// Process-wide heartbeat counter
#[derive(Debug, Default)]
pub struct HeartbeatSequence(AtomicU64);

impl HeartbeatSequence {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heartbeat {
    pub seq: u64,
    pub at: DateTime<Utc>,
}

impl Heartbeat {
    pub fn data(&self) -> String {
        format!("Message: {} - the time is {}", self.seq, self.at.to_rfc3339())
    }
}

/// Why an emitter stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum HeartbeatExit {
    /// The receiving side went away
    Disconnected,
    /// The server is shutting down
    Shutdown,
}

/// Writes one [`Heartbeat`] per interval into a channel until the peer
/// disconnects or shutdown is requested. No retries.
pub struct HeartbeatEmitter {
    interval: Duration,
    sequence: Arc<HeartbeatSequence>,
    shutdown: CancellationToken,
}

impl HeartbeatEmitter {
    pub fn new(
        interval: Duration,
        sequence: Arc<HeartbeatSequence>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            interval,
            sequence,
            shutdown,
        }
    }

    /// Spawn the emitter on the runtime and hand back the receiving end.
    pub fn spawn(self) -> mpsc::Receiver<Heartbeat> {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(self.run(tx));
        rx
    }

    pub async fn run(self, tx: mpsc::Sender<Heartbeat>) -> HeartbeatExit {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let exit = loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break HeartbeatExit::Shutdown,
                _ = ticker.tick() => {}
            }

            let beat = Heartbeat {
                seq: self.sequence.next(),
                at: Utc::now(),
            };
            debug!("Heartbeat {}", beat.seq);

            tokio::select! {
                _ = self.shutdown.cancelled() => break HeartbeatExit::Shutdown,
                sent = tx.send(beat) => {
                    if sent.is_err() {
                        break HeartbeatExit::Disconnected;
                    }
                }
            }
        };

        info!("Heartbeat stream closed ({})", exit);
        exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter(shutdown: &CancellationToken) -> HeartbeatEmitter {
        HeartbeatEmitter::new(
            Duration::from_secs(1),
            Arc::new(HeartbeatSequence::default()),
            shutdown.clone(),
        )
    }

    #[test]
    fn test_data_line() {
        let beat = Heartbeat {
            seq: 7,
            at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        assert_eq!(beat.data(), "Message: 7 - the time is 2024-01-01T00:00:00+00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_beats_in_five_seconds() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(16);
        let handle = tokio::spawn(emitter(&shutdown).run(tx));

        tokio::time::sleep(Duration::from_millis(4_500)).await;
        shutdown.cancel();
        assert_eq!(handle.await.unwrap(), HeartbeatExit::Shutdown);

        let mut beats = Vec::new();
        while let Ok(beat) = rx.try_recv() {
            beats.push(beat);
        }
        assert!((4..=6).contains(&beats.len()), "got {} beats", beats.len());
        assert!(beats.windows(2).all(|w| w[0].seq < w[1].seq));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(1);
        let handle = tokio::spawn(emitter(&shutdown).run(tx));

        assert!(rx.recv().await.is_some());
        drop(rx);

        assert_eq!(handle.await.unwrap(), HeartbeatExit::Disconnected);
    }

    #[tokio::test]
    async fn test_sequence_shared_across_emitters() {
        let sequence = Arc::new(HeartbeatSequence::default());
        let shutdown = CancellationToken::new();
        let first = HeartbeatEmitter::new(Duration::from_secs(60), sequence.clone(), shutdown.clone())
            .spawn()
            .recv()
            .await
            .unwrap();
        let second = HeartbeatEmitter::new(Duration::from_secs(60), sequence, shutdown.clone())
            .spawn()
            .recv()
            .await
            .unwrap();
        assert!(second.seq > first.seq);
        shutdown.cancel();
    }
}
