mod chat_completion;
mod conversation;
mod message;

pub use chat_completion::*;
pub use conversation::*;
pub use message::*;
