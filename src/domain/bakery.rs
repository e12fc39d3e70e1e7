use crate::domain::BakedGood;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub baked_goods: Vec<BakedGood>,
}
