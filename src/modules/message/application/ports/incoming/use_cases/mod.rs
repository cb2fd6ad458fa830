pub mod admin_inbox;
pub mod list_my_messages;
pub mod mark_read;
pub mod send_message;

pub use admin_inbox::{AdminInboxError, AdminInboxUseCase, InboxInput};
pub use list_my_messages::{ListMyMessagesError, ListMyMessagesUseCase};
pub use mark_read::{MarkReadError, MarkReadUseCase};
pub use send_message::{SendMessageError, SendMessageInput, SendMessageUseCase, ValidMessage};
