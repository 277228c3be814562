use serde::{Serialize, Serializer};

use crate::domain::page::Page;
use crate::errors::EngineError;

/// Wire envelope returned by every catalog operation.
///
/// Failures never escape as transport errors; they become `{"success": false, "error": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Page {
        success: bool,
        #[serde(rename = "Data")]
        data: Vec<T>,
        #[serde(serialize_with = "blank_when_unset")]
        total_pages: Option<usize>,
        current_page: i64,
    },
    Records {
        success: bool,
        #[serde(rename = "Data")]
        data: Vec<T>,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl<T> Envelope<T> {
    pub fn from_page(result: Result<Page<T>, EngineError>) -> Self {
        match result {
            Ok(page) => Self::Page {
                success: true,
                data: page.items,
                total_pages: page.total_pages,
                current_page: page.current_page,
            },
            Err(error) => Self::from(error),
        }
    }

    pub fn from_records(result: Result<Vec<T>, EngineError>) -> Self {
        match result {
            Ok(data) => Self::Records { success: true, data },
            Err(error) => Self::from(error),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { success: false, error: message.into() }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failure { .. })
    }
}

impl<T> From<EngineError> for Envelope<T> {
    fn from(error: EngineError) -> Self {
        Self::failure(error.to_string())
    }
}

// Unresolved page counts render as an empty string.
fn blank_when_unset<S>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(total_pages) => serializer.serialize_u64(*total_pages as u64),
        None => serializer.serialize_str(""),
    }
}
