use crate::domain::{BakedGood, NewBakedGood};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

// what POST /baked_goods answers with, nothing more
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonCreatedBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonMessage {
    pub message: String,
}

/// Raw form fields, kept as text until [`CreateBakedGoodForm::validate`] runs.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CreateBakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

impl CreateBakedGoodForm {
    pub fn validate(self) -> Result<NewBakedGood, ApiError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ApiError::Validation("name is required".into())),
        };

        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => return Err(ApiError::Validation("price is required".into())),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite())
                .ok_or_else(|| {
                    ApiError::Validation(format!("price must be a number, got '{}'", raw))
                })?,
        };

        // the referenced bakery is not required to exist
        let bakery_id = match self.bakery_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                ApiError::Validation(format!("bakery_id must be an integer, got '{}'", raw))
            })?),
        };

        Ok(NewBakedGood {
            name,
            price,
            bakery_id,
        })
    }
}

pub fn baked_good_to_json(baked_good: &BakedGood, format: &str) -> JsonBakedGood {
    JsonBakedGood {
        id: baked_good.id,
        name: baked_good.name.to_owned(),
        price: baked_good.price,
        bakery_id: baked_good.bakery_id,
        created_at: baked_good.created_at.format(format).to_string(),
        updated_at: baked_good
            .updated_at
            .map(|val| val.format(format).to_string()),
    }
}

pub fn created_baked_good_to_json(baked_good: &BakedGood) -> JsonCreatedBakedGood {
    JsonCreatedBakedGood {
        id: baked_good.id,
        name: baked_good.name.to_owned(),
        price: baked_good.price,
        bakery_id: baked_good.bakery_id,
    }
}
