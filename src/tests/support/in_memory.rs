use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, UpdateProfileData, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};
use crate::modules::listing::application::domain::entities::{Listing, ListingStatus};
use crate::modules::listing::application::ports::outgoing::{
    ListingQuery, ListingQueryError, ListingRepository, ListingRepositoryError, ListingScope,
    ModerationUpdate, NewListing,
};
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::outgoing::{
    InboxFilter, MessageQuery, MessageQueryError, MessageRepository, MessageRepositoryError,
    NewMessage,
};
use crate::shared::domain::{PageRequest, PageResult};

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    listings: HashMap<Uuid, Listing>,
    messages: HashMap<Uuid, Message>,
    fail_next: Option<String>,
}

/// Shared in-memory implementation of every outgoing store port.
/// Clones see the same data, so one store can back several services.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Makes the next store call fail with a database error carrying `msg`.
    pub fn fail_next(&self, msg: &str) {
        self.lock().fail_next = Some(msg.to_string());
    }

    fn take_failure(&self) -> Option<String> {
        self.lock().fail_next.take()
    }

    pub fn seed_user(&self, user: User) {
        self.lock().users.insert(user.id, user);
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn seed_listing(&self, listing: Listing) {
        self.lock().listings.insert(listing.id, listing);
    }

    pub fn listing(&self, id: Uuid) -> Option<Listing> {
        self.lock().listings.get(&id).cloned()
    }

    pub fn listing_count(&self) -> usize {
        self.lock().listings.len()
    }

    pub fn seed_message(&self, message: Message) {
        self.lock().messages.insert(message.id, message);
    }

    pub fn message(&self, id: Uuid) -> Option<Message> {
        self.lock().messages.get(&id).cloned()
    }

    pub fn message_count(&self) -> usize {
        self.lock().messages.len()
    }
}

fn paginate<T>(mut rows: Vec<T>, page: PageRequest) -> PageResult<T> {
    let total = rows.len() as u64;
    let start = (page.offset() as usize).min(rows.len());
    let end = (start + page.limit() as usize).min(rows.len());
    let items = rows.drain(start..end).collect();
    PageResult::new(items, page, total)
}

fn in_scope(listing: &Listing, scope: &ListingScope) -> bool {
    match scope {
        ListingScope::Public(filter) => {
            listing.is_publicly_visible()
                && filter.category.map_or(true, |c| listing.category == c)
                && filter.region.map_or(true, |r| listing.region == r)
                && filter
                    .listing_type
                    .as_ref()
                    .map_or(true, |t| &listing.listing_type == t)
                && filter.min_price.map_or(true, |min| listing.price >= min)
                && filter.max_price.map_or(true, |max| listing.price <= max)
        }
        ListingScope::CreatedBy(owner) => listing.created_by == *owner,
        ListingScope::Moderation { status, approved } => {
            status.map_or(true, |s| listing.status == s)
                && approved.map_or(true, |a| listing.approved_by_admin == a)
        }
    }
}

// ─── users ───────────────────────────────────────────────

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self.user(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        let email = email.trim().to_lowercase();
        Ok(self
            .lock()
            .users
            .values()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }

    async fn find_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<User>, UserQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        let state = self.lock();
        Ok(user_ids
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        if state.users.values().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            password_hash: data.password_hash,
            region: data.region,
            language: data.language,
            role: data.role,
            is_verified: false,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(phone) = data.phone {
            user.phone = phone;
        }
        if let Some(region) = data.region {
            user.region = region;
        }
        if let Some(language) = data.language {
            user.language = language;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.password_hash = new_password_hash;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.is_verified = true;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

// ─── listings ────────────────────────────────────────────

#[async_trait]
impl ListingQuery for InMemoryStore {
    async fn find_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, ListingQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(ListingQueryError::DatabaseError(msg));
        }
        Ok(self.listing(listing_id))
    }

    async fn list(
        &self,
        scope: ListingScope,
        page: PageRequest,
    ) -> Result<PageResult<Listing>, ListingQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(ListingQueryError::DatabaseError(msg));
        }
        let mut rows: Vec<Listing> = self
            .lock()
            .listings
            .values()
            .filter(|l| in_scope(l, &scope))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(rows, page))
    }
}

#[async_trait]
impl ListingRepository for InMemoryStore {
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, ListingRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(ListingRepositoryError::DatabaseError(msg));
        }
        let now = Utc::now();
        let stored = Listing {
            id: Uuid::new_v4(),
            title: listing.title,
            description: listing.description,
            category: listing.category,
            listing_type: listing.listing_type,
            price: listing.price,
            region: listing.region,
            location: listing.location,
            images: listing.images,
            videos: listing.videos,
            features: listing.features,
            contact_info: listing.contact_info,
            status: ListingStatus::Active,
            created_by: listing.created_by,
            approved_by_admin: false,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        };
        self.seed_listing(stored.clone());
        Ok(stored)
    }

    async fn moderate(
        &self,
        listing_id: Uuid,
        update: ModerationUpdate,
    ) -> Result<Listing, ListingRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(ListingRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let listing = state
            .listings
            .get_mut(&listing_id)
            .ok_or(ListingRepositoryError::NotFound)?;

        listing.approved_by_admin = update.approved_by_admin;
        listing.status = update.status;
        listing.admin_notes = update.admin_notes;
        listing.updated_at = Utc::now();
        Ok(listing.clone())
    }
}

// ─── messages ────────────────────────────────────────────

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(MessageRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        if !state.listings.contains_key(&message.listing_id) {
            return Err(MessageRepositoryError::ListingNotFound);
        }

        let now = Utc::now();
        let stored = Message {
            id: Uuid::new_v4(),
            listing_id: message.listing_id,
            from_user: message.from_user,
            to_admin: true,
            body: message.body,
            read: false,
            created_at: now,
            updated_at: now,
        };
        state.messages.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn mark_read(&self, message_id: Uuid) -> Result<Message, MessageRepositoryError> {
        if let Some(msg) = self.take_failure() {
            return Err(MessageRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let message = state
            .messages
            .get_mut(&message_id)
            .ok_or(MessageRepositoryError::NotFound)?;
        message.read = true;
        message.updated_at = Utc::now();
        Ok(message.clone())
    }
}

#[async_trait]
impl MessageQuery for InMemoryStore {
    async fn list_by_sender(&self, sender: Uuid) -> Result<Vec<Message>, MessageQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(MessageQueryError::DatabaseError(msg));
        }
        let mut rows: Vec<Message> = self
            .lock()
            .messages
            .values()
            .filter(|m| m.from_user == sender)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn inbox(
        &self,
        filter: InboxFilter,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageQueryError> {
        if let Some(msg) = self.take_failure() {
            return Err(MessageQueryError::DatabaseError(msg));
        }
        let mut rows: Vec<Message> = self
            .lock()
            .messages
            .values()
            .filter(|m| m.to_admin)
            .filter(|m| filter.listing_id.map_or(true, |id| m.listing_id == id))
            .filter(|m| !filter.unread_only || !m.read)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(rows, page))
    }
}
