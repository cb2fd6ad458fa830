use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    AdminInboxUseCase, ListMyMessagesUseCase, MarkReadUseCase, SendMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub send: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub mine: Arc<dyn ListMyMessagesUseCase + Send + Sync>,
    pub inbox: Arc<dyn AdminInboxUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkReadUseCase + Send + Sync>,
}
