pub mod command;
pub mod compress;
pub mod message;
pub mod proto;
pub mod queue;
pub mod stream;
pub mod transport;

pub use command::GameCommand;
pub use message::{decode_message, encode_message};
pub use stream::{BitReader, BitWriter};
