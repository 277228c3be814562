use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::EngineError;

/// External identity of a catalog product.
///
/// Catalogs carry either integer or text identifiers; the catalog's native kind is taken from
/// its first row and caller-supplied identifiers are coerced to it before lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    Integer,
    Text,
}

/// Dense zero-based position of a record in catalog order. The only valid key into a
/// similarity matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub usize);

impl ProductId {
    pub fn kind(&self) -> IdKind {
        match self {
            Self::Int(_) => IdKind::Integer,
            Self::Text(_) => IdKind::Text,
        }
    }

    pub fn to_integer(&self) -> Result<i64, EngineError> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Text(value) => value.trim().parse::<i64>().map_err(|_| {
                EngineError::TypeCoercionFailure { value: value.clone(), expected: IdKind::Integer }
            }),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl IdKind {
    pub fn coerce(self, raw: &str) -> Result<ProductId, EngineError> {
        match self {
            Self::Integer => raw.trim().parse::<i64>().map(ProductId::Int).map_err(|_| {
                EngineError::TypeCoercionFailure { value: raw.to_string(), expected: self }
            }),
            Self::Text => Ok(ProductId::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// One catalog row, serialized under the catalog's own column names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_store: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_ratings: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_count: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_weighted: f64,
}

impl ProductRecord {
    pub fn weighted_rating(&self) -> f64 {
        self.product_ratings * self.rating_count
    }

    /// Category tags, split the way the catalog encodes them (`"a, b, c"`).
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.product_category.split(", ").filter(|tag| !tag.is_empty())
    }
}

/// Output projection of a [`ProductRecord`] shared by every paginated query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductView {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_link: String,
    pub product_image: String,
    pub product_price: f64,
    pub product_category: String,
    pub product_ratings: f64,
    pub product_rating_count: f64,
    pub product_description: String,
    pub product_fetch_date: String,
    pub product_store: String,
    pub product_weighted_rating: f64,
}

impl From<&ProductRecord> for ProductView {
    fn from(record: &ProductRecord) -> Self {
        Self {
            product_id: record.product_id.clone(),
            product_name: record.product_name.clone(),
            product_link: record.product_link.clone(),
            product_image: record.product_image.clone(),
            product_price: record.product_price,
            product_category: record.product_category.clone(),
            product_ratings: record.product_ratings,
            product_rating_count: record.rating_count,
            product_description: record.description.clone(),
            product_fetch_date: record.date.clone(),
            product_store: record.product_store.clone(),
            product_weighted_rating: record.rating_weighted,
        }
    }
}

impl ProductView {
    /// Projection used by similarity rankings, which always expose integer ids.
    pub fn with_integer_id(record: &ProductRecord) -> Result<Self, EngineError> {
        let product_id = ProductId::Int(record.product_id.to_integer()?);
        Ok(Self { product_id, ..Self::from(record) })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceComparison {
    #[serde(flatten)]
    pub product: ProductView,
    pub price_difference: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{IdKind, ProductId, ProductRecord, ProductView};
    use crate::errors::EngineError;

    #[test]
    fn integer_kind_coerces_numeric_strings() {
        assert_eq!(IdKind::Integer.coerce(" 42 "), Ok(ProductId::Int(42)));
        assert!(matches!(
            IdKind::Integer.coerce("sku-42"),
            Err(EngineError::TypeCoercionFailure { expected: IdKind::Integer, .. })
        ));
        assert_eq!(IdKind::Text.coerce("sku-42"), Ok(ProductId::Text("sku-42".to_string())));
    }

    #[test]
    fn record_missing_and_null_numbers_default_to_zero() {
        let record: ProductRecord = serde_json::from_value(serde_json::json!({
            "product_id": 7,
            "product_name": "Desk Lamp",
            "product_price": null,
            "product_ratings": 4.5,
            "product_category": "Home, Lighting",
        }))
        .expect("record should decode");

        assert_eq!(record.product_price, 0.0);
        assert_eq!(record.rating_count, 0.0);
        assert_eq!(record.weighted_rating(), 0.0);
        assert_eq!(record.tags().collect::<Vec<_>>(), vec!["Home", "Lighting"]);
    }

    #[test]
    fn text_ids_decode_and_project_to_integers_when_numeric() {
        let record: ProductRecord = serde_json::from_value(serde_json::json!({
            "product_id": "15",
            "product_name": "Kettle",
        }))
        .expect("record should decode");

        assert_eq!(record.product_id, ProductId::Text("15".to_string()));
        let view = ProductView::with_integer_id(&record).expect("numeric text id");
        assert_eq!(view.product_id, ProductId::Int(15));

        let opaque = ProductRecord { product_id: ProductId::Text("abc".to_string()), ..record };
        assert!(ProductView::with_integer_id(&opaque).is_err());
    }
}
