use bytes::Bytes;
use game_common::player::Player;

use crate::message::{decode_message, encode_message};
use crate::proto::action::Action;
use crate::proto::Error;

/// An [`Action`] together with the peer that sent it.
///
/// The sender is never transmitted. It is attached by the transport when a message is received
/// and is `None` for locally created commands.
#[derive(Clone, Debug, PartialEq)]
pub struct GameCommand {
    pub player: Option<Player>,
    pub action: Action,
}

impl GameCommand {
    #[inline]
    pub fn new<T>(player: Option<Player>, action: T) -> Self
    where
        T: Into<Action>,
    {
        Self {
            player,
            action: action.into(),
        }
    }

    /// Encodes the action of this command into a packed message.
    #[inline]
    pub fn encode(&self) -> Bytes {
        encode_message(&self.action)
    }

    /// Decodes a message received from `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if `buf` does not contain exactly one valid [`Action`].
    #[inline]
    pub fn decode(player: Option<Player>, buf: Bytes) -> Result<Self, Error> {
        let action = decode_message(buf)?;
        Ok(Self { player, action })
    }
}
