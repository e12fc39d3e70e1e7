use crate::domain::Bakery;
use crate::features::baked_goods::model::{JsonBakedGood, baked_good_to_json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonBakery {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub baked_goods: Vec<JsonBakedGood>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonBakerySummary {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct UpdateBakeryForm {
    pub name: Option<String>,
}

pub fn bakery_to_json(bakery: &Bakery, format: &str) -> JsonBakery {
    JsonBakery {
        id: bakery.id,
        name: bakery.name.to_owned(),
        created_at: bakery.created_at.format(format).to_string(),
        updated_at: bakery.updated_at.map(|val| val.format(format).to_string()),
        baked_goods: bakery
            .baked_goods
            .iter()
            .map(|bg| baked_good_to_json(bg, format))
            .collect(),
    }
}

pub fn bakery_to_json_summary(bakery: &Bakery) -> JsonBakerySummary {
    JsonBakerySummary {
        id: bakery.id,
        name: bakery.name.to_owned(),
    }
}
