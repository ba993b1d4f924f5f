use std::mem;

use bytes::Bytes;
use game_common::player::Player;
use parking_lot::Mutex;

use crate::command::GameCommand;
use crate::proto::Error;

/// Commands received from peers, waiting to be applied.
///
/// The queue is filled from the transport callback and drained once per frame, possibly from a
/// different thread.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Mutex<Vec<GameCommand>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, command: GameCommand) {
        self.commands.lock().push(command);
    }

    /// Decodes a message received from `player` and queues the command.
    ///
    /// Malformed messages are dropped without touching the queue.
    ///
    /// # Errors
    ///
    /// Returns the decoding error of a dropped message.
    pub fn receive(&self, player: Player, buf: Bytes) -> Result<(), Error> {
        let len = buf.len();

        match GameCommand::decode(Some(player), buf) {
            Ok(command) => {
                tracing::debug!("received {:?} ({} bytes)", command.action.kind(), len);
                self.push(command);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("dropping malformed message ({} bytes): {}", len, err);
                Err(err)
            }
        }
    }

    /// Removes and returns all queued commands in the order they were received.
    pub fn drain(&self) -> Vec<GameCommand> {
        mem::take(&mut *self.commands.lock())
    }

    pub fn len(&self) -> usize {
        self.commands.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use game_common::player::Player;

    use crate::command::GameCommand;
    use crate::proto::action::{Action, GameAction};
    use crate::proto::board::BoardSetupAction;

    use super::CommandQueue;

    #[test]
    fn drain_in_arrival_order() {
        let queue = CommandQueue::new();
        queue.push(GameCommand::new(None, BoardSetupAction::RequestBoardLocation));
        queue.push(GameCommand::new(
            None,
            GameAction::HelicopterStopMoving(false),
        ));
        assert_eq!(queue.len(), 2);

        let commands = queue.drain();
        assert!(queue.is_empty());
        assert_eq!(
            commands[0].action,
            Action::BoardSetup(BoardSetupAction::RequestBoardLocation)
        );
        assert_eq!(
            commands[1].action,
            Action::GameAction(GameAction::HelicopterStopMoving(false))
        );
    }

    #[test]
    fn receive_drops_malformed() {
        let queue = CommandQueue::new();
        let player = Player::new("host");

        assert!(queue
            .receive(player.clone(), Bytes::from_static(&[0xFF]))
            .is_err());
        assert!(queue.is_empty());

        let command = GameCommand::new(None, BoardSetupAction::RequestBoardLocation);
        queue.receive(player.clone(), command.encode()).unwrap();

        let commands = queue.drain();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].player, Some(player));
    }
}
