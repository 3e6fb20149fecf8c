//! Error body returned by the export service on non-2xx responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_displays() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code": "not_found", "message": "no such collection"}"#)
                .unwrap();
        assert_eq!(body.to_string(), "not_found: no such collection");
    }
}
