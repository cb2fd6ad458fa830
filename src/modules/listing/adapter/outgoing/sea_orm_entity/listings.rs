use sea_orm::entity::prelude::*;
use serde::de::DeserializeOwned;

use crate::modules::listing::application::domain::entities::{ContactInfo, Listing};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub category: String,

    pub listing_type: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    pub region: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    // [{url, filename}]
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub videos: Json,

    // {"bedrooms": "3", ...}
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,

    pub status: String,

    #[sea_orm(column_type = "Uuid")]
    pub created_by: Uuid,

    pub approved_by_admin: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub admin_notes: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedBy",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    /// Parses text enums and JSONB columns back into the domain row.
    pub fn into_domain(self) -> Result<Listing, String> {
        Ok(Listing {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category.parse()?,
            listing_type: self.listing_type,
            price: self.price,
            region: self.region.parse().map_err(|e| format!("{e}"))?,
            location: self.location,
            images: from_json(self.images)?,
            videos: from_json(self.videos)?,
            features: from_json(self.features)?,
            contact_info: ContactInfo {
                name: self.contact_name,
                phone: self.contact_phone,
                email: self.contact_email,
            },
            status: self.status.parse()?,
            created_by: self.created_by,
            approved_by_admin: self.approved_by_admin,
            admin_notes: self.admin_notes,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

fn from_json<T: DeserializeOwned>(json: Json) -> Result<T, String> {
    serde_json::from_value(json).map_err(|e| e.to_string())
}
