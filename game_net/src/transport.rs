//! The interface to the peer-to-peer transport.
//!
//! The transport is expected to deliver whole messages reliably and in order per peer. Received
//! messages are handed to [`CommandQueue::receive`] together with the sending [`Player`].
//!
//! [`CommandQueue::receive`]: crate::queue::CommandQueue::receive

use bytes::Bytes;
use game_common::player::Player;

use crate::command::GameCommand;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recipient<'a> {
    /// Every connected peer.
    All,
    Player(&'a Player),
}

pub trait Transport {
    type Error;

    /// Sends a packed message to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport failed to queue the message.
    fn send(&self, recipient: Recipient<'_>, buf: Bytes) -> Result<(), Self::Error>;
}

/// Encodes `command` and sends it through `transport`.
///
/// # Errors
///
/// Returns the error of the transport.
pub fn send_command<T>(
    transport: &T,
    recipient: Recipient<'_>,
    command: &GameCommand,
) -> Result<(), T::Error>
where
    T: Transport,
{
    let buf = command.encode();
    tracing::trace!(
        "sending {:?} ({} bytes) to {:?}",
        command.action.kind(),
        buf.len(),
        recipient
    );

    transport.send(recipient, buf)
}
