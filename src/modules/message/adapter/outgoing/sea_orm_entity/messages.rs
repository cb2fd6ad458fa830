use sea_orm::entity::prelude::*;

use crate::modules::message::application::domain::entities::Message;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub listing_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub from_user: Uuid,

    pub to_admin: bool,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub is_read: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::listing::adapter::outgoing::sea_orm_entity::listings::Entity",
        from = "Column::ListingId",
        to = "crate::modules::listing::adapter::outgoing::sea_orm_entity::listings::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Listings,

    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::FromUser",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Users,
}

impl Related<crate::modules::listing::adapter::outgoing::sea_orm_entity::listings::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Listings.def()
    }
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Message {
    fn from(model: Model) -> Self {
        Message {
            id: model.id,
            listing_id: model.listing_id,
            from_user: model.from_user,
            to_admin: model.to_admin,
            body: model.body,
            read: model.is_read,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
