pub mod admin_inbox_service;
pub mod list_my_messages_service;
pub mod mark_read_service;
pub mod send_message_service;

pub use admin_inbox_service::AdminInboxService;
pub use list_my_messages_service::ListMyMessagesService;
pub use mark_read_service::MarkReadService;
pub use send_message_service::SendMessageService;
