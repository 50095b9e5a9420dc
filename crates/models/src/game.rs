use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Largest amount a `DECIMAL(10, 2)` column holds.
pub const MAX_PRICE_PAID: f64 = 99_999_999.99;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub platform: String,
    #[sea_orm(column_type = "Text")]
    pub genre: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price_paid: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Validated fields for an insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub platform: String,
    pub genre: String,
    pub price_paid: Decimal,
}

/// Validated partial update; `None` leaves the column untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GamePatch {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub price_paid: Option<Decimal>,
}

impl GamePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.platform.is_none() && self.genre.is_none() && self.price_paid.is_none()
    }

    /// Overlay the supplied fields on an in-memory record.
    pub fn apply_to(&self, game: &mut Model) {
        if let Some(v) = &self.name { game.name = v.clone(); }
        if let Some(v) = &self.platform { game.platform = v.clone(); }
        if let Some(v) = &self.genre { game.genre = v.clone(); }
        if let Some(v) = self.price_paid { game.price_paid = v; }
    }
}

pub fn validate_text(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::invalid(field, "should not be empty"));
    }
    Ok(())
}

/// Convert a JSON number into the stored currency representation (2 decimal places).
pub fn validate_price_paid(value: f64) -> Result<Decimal, ModelError> {
    if !value.is_finite() {
        return Err(ModelError::invalid("pricePaid", "must be a number conforming to the specified constraints"));
    }
    if value < 0.0 {
        return Err(ModelError::invalid("pricePaid", "must not be less than 0"));
    }
    if value > MAX_PRICE_PAID {
        return Err(ModelError::invalid("pricePaid", format!("must not be greater than {MAX_PRICE_PAID}")));
    }
    let mut d = Decimal::from_f64(value)
        .ok_or_else(|| ModelError::invalid("pricePaid", "is not representable as a decimal"))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if d.is_zero() {
        d = Decimal::ZERO;
    }
    d.rescale(2);
    Ok(d)
}

pub async fn create(db: &DatabaseConnection, input: &NewGame) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(input.name.clone()),
        platform: Set(input.platform.clone()),
        genre: Set(input.genre.clone()),
        price_paid: Set(input.price_paid),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Rows whose `column` equals `value` ignoring case.
pub async fn find_by_column_ci(db: &DatabaseConnection, column: Column, value: &str) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(column))).eq(Func::lower(Expr::val(value.to_string()))))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Write the supplied fields over `existing`; no-op patches skip the round-trip.
pub async fn update(db: &DatabaseConnection, existing: Model, patch: &GamePatch) -> Result<Model, ModelError> {
    if patch.is_empty() {
        return Ok(existing);
    }
    let mut am: ActiveModel = existing.into();
    if let Some(v) = &patch.name { am.name = Set(v.clone()); }
    if let Some(v) = &patch.platform { am.platform = Set(v.clone()); }
    if let Some(v) = &patch.genre { am.genre = Set(v.clone()); }
    if let Some(v) = patch.price_paid { am.price_paid = Set(v); }
    Ok(am.update(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}
