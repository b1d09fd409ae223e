//! Command side of a running session.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{SessionError, SessionResult};

/// Commands buffered per session before `send` waits.
pub const COMMAND_BUFFER: usize = 16;

/// Sends commands to, and tears down, one session.  Cheap to clone.
#[derive(Debug)]
pub struct SessionHandle<C> {
    commands: mpsc::Sender<C>,
    cancel:   CancellationToken,
}

impl<C> Clone for SessionHandle<C> {
    fn clone(&self) -> Self {
        Self { commands: self.commands.clone(), cancel: self.cancel.clone() }
    }
}

impl<C> SessionHandle<C> {
    pub(crate) fn channel() -> (Self, mpsc::Receiver<C>, CancellationToken) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let cancel = CancellationToken::new();
        (Self { commands: tx, cancel: cancel.clone() }, rx, cancel)
    }

    pub async fn send(&self, command: C) -> SessionResult<()> {
        self.commands.send(command).await.map_err(|_| SessionError::Closed)
    }

    /// Tear the session down.  The source is disabled before `run` returns.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed() || self.cancel.is_cancelled()
    }
}
