use crate::domain::{BakedGood, Bakery};
use chrono::NaiveDateTime;
use derive_more::derive::Display;

#[derive(sqlx::FromRow, Debug, PartialEq, Clone, Display)]
#[display("bakery {} ({})", id, name)]
pub struct DbBakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(sqlx::FromRow, Debug, PartialEq, Clone, Display)]
#[display("baked good {} ({})", id, name)]
pub struct DbBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl DbBakery {
    pub fn into_bakery(self, baked_goods: Vec<BakedGood>) -> Bakery {
        Bakery {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            baked_goods,
        }
    }
}

impl From<DbBakedGood> for BakedGood {
    fn from(row: DbBakedGood) -> Self {
        BakedGood {
            id: row.id,
            name: row.name,
            price: row.price,
            bakery_id: row.bakery_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
