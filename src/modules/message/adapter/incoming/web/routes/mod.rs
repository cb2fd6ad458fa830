mod get_inbox;
mod get_my_messages;
mod mark_message_read;
mod send_message;

pub use get_inbox::{get_inbox_handler, InboxPageResponse, InboxQuery};
pub use get_my_messages::{get_my_messages_handler, MyMessagesResponse};
pub use mark_message_read::mark_message_read_handler;
pub use send_message::{send_message_handler, MessageDataResponse, SendMessageRequest};

pub use get_inbox::__path_get_inbox_handler;
pub use get_my_messages::__path_get_my_messages_handler;
pub use mark_message_read::__path_mark_message_read_handler;
pub use send_message::__path_send_message_handler;
