// Session lifecycle for the single gateway connection.
//
// The gateway client owns the socket and the reconnect loop. This module only
// remembers which stage the connection is in and whether the first Ready has
// fired, so the Discord layer can tell a fresh start from a reconnect.
//
// NO Discord dependencies here.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Where the gateway connection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Disconnected,
    Connecting,
    /// `ready` is whether a Ready event has ever been seen, not just on this connection.
    Connected { ready: bool },
}

/// What a Ready event means for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyTransition {
    /// First Ready of the process, presence still needs announcing.
    FirstReady,
    /// Ready after a reconnect.
    Reconnected,
}

const STAGE_DISCONNECTED: u8 = 0;
const STAGE_CONNECTING: u8 = 1;
const STAGE_CONNECTED: u8 = 2;

/// The one live session of the process.
///
/// Shared behind an `Arc` between the framework setup and the event handler.
/// Every field is atomic, so no locking is needed even though serenity may
/// deliver events from several tasks.
pub struct SessionState {
    prefix: char,
    ready: AtomicBool,
    stage: AtomicU8,
}

impl SessionState {
    pub fn new(prefix: char) -> Self {
        Self {
            prefix,
            ready: AtomicBool::new(false),
            stage: AtomicU8::new(STAGE_DISCONNECTED),
        }
    }

    /// The command trigger character, fixed for the lifetime of the session.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn phase(&self) -> SessionPhase {
        match self.stage.load(Ordering::SeqCst) {
            STAGE_CONNECTING => SessionPhase::Connecting,
            STAGE_CONNECTED => SessionPhase::Connected {
                ready: self.is_ready(),
            },
            _ => SessionPhase::Disconnected,
        }
    }

    /// The gateway is (re)establishing the connection.
    pub fn begin_connect(&self) {
        self.stage.store(STAGE_CONNECTING, Ordering::SeqCst);
    }

    pub fn mark_connected(&self) {
        self.stage.store(STAGE_CONNECTED, Ordering::SeqCst);
    }

    /// Dropping the connection never resets `ready`.
    pub fn mark_disconnected(&self) {
        self.stage.store(STAGE_DISCONNECTED, Ordering::SeqCst);
    }

    /// Record a Ready event.
    ///
    /// `ready` goes false -> true exactly once; every later call reports a reconnect.
    pub fn mark_ready(&self) -> ReadyTransition {
        self.mark_connected();

        match self
            .ready
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => ReadyTransition::FirstReady,
            Err(_) => ReadyTransition::Reconnected,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_disconnected_and_not_ready() {
        let session = SessionState::new('?');

        assert_eq!(session.phase(), SessionPhase::Disconnected);
        assert!(!session.is_ready());
        assert_eq!(session.prefix(), '?');
    }

    #[test]
    fn first_ready_is_reported_once() {
        let session = SessionState::default();
        session.begin_connect();
        assert_eq!(session.phase(), SessionPhase::Connecting);

        assert_eq!(session.mark_ready(), ReadyTransition::FirstReady);
        assert_eq!(session.phase(), SessionPhase::Connected { ready: true });

        assert_eq!(session.mark_ready(), ReadyTransition::Reconnected);
        assert_eq!(session.mark_ready(), ReadyTransition::Reconnected);
    }

    #[test]
    fn reconnect_cycles_never_revert_ready() {
        let session = SessionState::default();
        let mut first_readies = 0;

        for _ in 0..5 {
            session.begin_connect();
            session.mark_connected();
            assert_eq!(
                session.phase(),
                SessionPhase::Connected {
                    ready: first_readies > 0
                }
            );

            if session.mark_ready() == ReadyTransition::FirstReady {
                first_readies += 1;
            }

            session.mark_disconnected();
            assert_eq!(session.phase(), SessionPhase::Disconnected);
            assert!(session.is_ready());
        }

        assert_eq!(first_readies, 1);
    }

    #[test]
    fn connected_before_ready_reports_not_ready() {
        let session = SessionState::new('!');
        session.mark_connected();

        assert_eq!(session.phase(), SessionPhase::Connected { ready: false });
        assert_eq!(session.prefix(), '!');
    }
}
