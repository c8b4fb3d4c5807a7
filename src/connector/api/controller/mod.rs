pub mod ask_controller;
pub mod chat_controller;

pub use ask_controller::AskController;
pub use chat_controller::ChatController;

use crate::domain::Message;

fn format_message(message: &Message) -> String {
    format!("{}> {}", message.speaker(), message.content())
}
