use std::fmt::{self, Display, Formatter};

/// The identity of a peer in a match.
///
/// Players are attached to received commands by the transport and are never part of an encoded
/// message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player {
    pub username: String,
}

impl Player {
    #[inline]
    pub fn new<T>(username: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            username: username.into(),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.username, f)
    }
}
