//! Custom bot categories, their evaluation order and the order of bots
//! inside each category.

use super::filter::filter_records;
use crate::client::{config_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategoryListRequest {
    pub config_id: i64,
    pub version: i64,
    /// Keep only the category with this id.
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomBotCategoryList {
    #[serde(default)]
    pub categories: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategoryRequest {
    pub config_id: i64,
    pub version: i64,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCustomBotCategoryRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomBotCategoryRequest {
    pub config_id: i64,
    pub version: i64,
    pub category_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCustomBotCategoryRequest {
    pub config_id: i64,
    pub version: i64,
    pub category_id: String,
}

impl Validate for GetCustomBotCategoryListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetCustomBotCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for CreateCustomBotCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateCustomBotCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("category_id", &self.category_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveCustomBotCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("category_id", &self.category_id)
            .finish()
    }
}

// =============================================================================
// Sequences
// =============================================================================

/// Ordered list of UUIDs: categories in the category sequence, bots in an
/// item sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidSequence {
    #[serde(default)]
    pub sequence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategorySequenceRequest {
    pub config_id: i64,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomBotCategorySequenceRequest {
    pub config_id: i64,
    pub version: i64,
    pub sequence: UuidSequence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategoryItemSequenceRequest {
    pub config_id: i64,
    pub version: i64,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomBotCategoryItemSequenceRequest {
    pub config_id: i64,
    pub version: i64,
    pub category_id: String,
    pub sequence: UuidSequence,
}

impl Validate for GetCustomBotCategorySequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for UpdateCustomBotCategorySequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("sequence", &self.sequence.sequence)
            .finish()
    }
}

impl Validate for GetCustomBotCategoryItemSequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for UpdateCustomBotCategoryItemSequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("category_id", &self.category_id)
            .required("sequence", &self.sequence.sequence)
            .finish()
    }
}

impl Botman {
    pub async fn get_custom_bot_category_list(
        &self,
        params: &GetCustomBotCategoryListRequest,
    ) -> Result<CustomBotCategoryList> {
        let op = Operation::read("GetCustomBotCategoryList");
        let path = format!(
            "{}/custom-bot-categories",
            config_path(params.config_id, params.version)
        );

        let mut list: CustomBotCategoryList = self.exec(&op, params, path, None).await?;
        list.categories = filter_records(list.categories, "categoryId", &params.category_id)?;
        Ok(list)
    }

    pub async fn get_custom_bot_category(
        &self,
        params: &GetCustomBotCategoryRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetCustomBotCategory");
        let path = format!(
            "{}/custom-bot-categories/{}",
            config_path(params.config_id, params.version),
            params.category_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_custom_bot_category(
        &self,
        params: &CreateCustomBotCategoryRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateCustomBotCategory");
        let path = format!(
            "{}/custom-bot-categories",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_custom_bot_category(
        &self,
        params: &UpdateCustomBotCategoryRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateCustomBotCategory");
        let path = format!(
            "{}/custom-bot-categories/{}",
            config_path(params.config_id, params.version),
            params.category_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_custom_bot_category(
        &self,
        params: &RemoveCustomBotCategoryRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveCustomBotCategory");
        let path = format!(
            "{}/custom-bot-categories/{}",
            config_path(params.config_id, params.version),
            params.category_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_custom_bot_category_sequence(
        &self,
        params: &GetCustomBotCategorySequenceRequest,
    ) -> Result<UuidSequence> {
        let op = Operation::read("GetCustomBotCategorySequence");
        let path = format!(
            "{}/custom-bot-category-sequence",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_custom_bot_category_sequence(
        &self,
        params: &UpdateCustomBotCategorySequenceRequest,
    ) -> Result<UuidSequence> {
        let op = Operation::update("UpdateCustomBotCategorySequence");
        let path = format!(
            "{}/custom-bot-category-sequence",
            config_path(params.config_id, params.version)
        );
        let body = serde_json::json!({ "sequence": params.sequence.sequence });
        self.exec(&op, params, path, Some(body)).await
    }

    pub async fn get_custom_bot_category_item_sequence(
        &self,
        params: &GetCustomBotCategoryItemSequenceRequest,
    ) -> Result<UuidSequence> {
        let op = Operation::read("GetCustomBotCategoryItemSequence");
        let path = format!(
            "{}/custom-bot-categories/{}/custom-bot-category-item-sequence",
            config_path(params.config_id, params.version),
            params.category_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_custom_bot_category_item_sequence(
        &self,
        params: &UpdateCustomBotCategoryItemSequenceRequest,
    ) -> Result<UuidSequence> {
        let op = Operation::update("UpdateCustomBotCategoryItemSequence");
        let path = format!(
            "{}/custom-bot-categories/{}/custom-bot-category-item-sequence",
            config_path(params.config_id, params.version),
            params.category_id
        );
        let body = serde_json::json!({ "sequence": params.sequence.sequence });
        self.exec(&op, params, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{assert_blank_fields, client};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_filters_by_category_id() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"categories": [
                {"categoryId":"b85e3eaa-d334-466d-857e-33308ce416be", "testKey":"testValue1"},
                {"categoryId":"cc9c3f89-e179-4892-89cf-d5e623ba9dc7", "testKey":"testValue3"}
            ]}"#,
        );
        let list = botman
            .get_custom_bot_category_list(&GetCustomBotCategoryListRequest {
                config_id: 43253,
                version: 15,
                category_id: "cc9c3f89-e179-4892-89cf-d5e623ba9dc7".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(list.categories.len(), 1);
        assert_eq!(list.categories[0]["testKey"], "testValue3");
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories"
        );
    }

    #[tokio::test]
    async fn test_remove_uses_delete() {
        let (botman, transport) = client(StatusCode::NO_CONTENT, "");
        botman
            .remove_custom_bot_category(&RemoveCustomBotCategoryRequest {
                config_id: 43253,
                version: 10,
                category_id: "cc9c3f89".to_string(),
            })
            .await
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.path,
            "/appsec/v1/configs/43253/versions/10/custom-bot-categories/cc9c3f89"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_item_sequence_round_trip() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"sequence": ["fake3f89-e179-4892-89cf-d5e623ba9dc7", "fake85df-e399-43e8-be41-fd1c7d3c3f1a"]}"#,
        );
        let sequence = UuidSequence {
            sequence: vec![
                "fake3f89-e179-4892-89cf-d5e623ba9dc7".to_string(),
                "fake85df-e399-43e8-be41-fd1c7d3c3f1a".to_string(),
            ],
        };
        let result = botman
            .update_custom_bot_category_item_sequence(&UpdateCustomBotCategoryItemSequenceRequest {
                config_id: 43253,
                version: 15,
                category_id: "f4f0cb20-eddb-4421-93d9-90954e509d5f".to_string(),
                sequence: sequence.clone(),
            })
            .await
            .unwrap();

        assert_eq!(result, sequence);
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories/f4f0cb20-eddb-4421-93d9-90954e509d5f/custom-bot-category-item-sequence"
        );
        assert_eq!(request.body, Some(serde_json::to_value(&sequence).unwrap()));
    }

    #[tokio::test]
    async fn test_category_sequence_body() {
        let (botman, transport) = client(StatusCode::OK, r#"{"sequence": ["a", "b"]}"#);
        botman
            .update_custom_bot_category_sequence(&UpdateCustomBotCategorySequenceRequest {
                config_id: 43253,
                version: 15,
                sequence: UuidSequence {
                    sequence: vec!["a".to_string(), "b".to_string()],
                },
            })
            .await
            .unwrap();
        assert_eq!(transport.last().body, Some(json!({"sequence": ["a", "b"]})));
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-category-sequence"
        );
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let params = UpdateCustomBotCategoryItemSequenceRequest {
            config_id: 43253,
            version: 15,
            category_id: "f4f0cb20".to_string(),
            sequence: UuidSequence::default(),
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["sequence"]);
    }

    #[tokio::test]
    async fn test_sequence_reads() {
        let (botman, transport) = client(StatusCode::OK, r#"{"sequence": ["s1", "s2"]}"#);
        let sequence = botman
            .get_custom_bot_category_sequence(&GetCustomBotCategorySequenceRequest {
                config_id: 43253,
                version: 15,
            })
            .await
            .unwrap();
        assert_eq!(sequence.sequence, vec!["s1", "s2"]);
        assert_eq!(transport.last().method, Method::GET);
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-category-sequence"
        );

        let items = botman
            .get_custom_bot_category_item_sequence(&GetCustomBotCategoryItemSequenceRequest {
                config_id: 43253,
                version: 15,
                category_id: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(items.sequence, vec!["s1", "s2"]);
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories/c1/custom-bot-category-item-sequence"
        );
    }

    #[tokio::test]
    async fn test_category_get_and_update() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"categoryId": "c1", "categoryName": "Category"}"#,
        );
        let category = botman
            .get_custom_bot_category(&GetCustomBotCategoryRequest {
                config_id: 43253,
                version: 15,
                category_id: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(category["categoryName"], "Category");
        assert_eq!(transport.last().method, Method::GET);
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories/c1"
        );

        let payload = json!({"categoryName": "Renamed"});
        botman
            .update_custom_bot_category(&UpdateCustomBotCategoryRequest {
                config_id: 43253,
                version: 15,
                category_id: "c1".to_string(),
                json_payload: payload.clone(),
            })
            .await
            .unwrap();
        assert_eq!(transport.last().method, Method::PUT);
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories/c1"
        );
        assert_eq!(transport.last().body, Some(payload));
    }

    #[tokio::test]
    async fn test_category_create_posts_payload() {
        let payload = json!({"categoryName": "New"});
        let (botman, transport) = client(StatusCode::CREATED, r#"{"categoryId": "c9"}"#);
        let created = botman
            .create_custom_bot_category(&CreateCustomBotCategoryRequest {
                config_id: 43253,
                version: 15,
                json_payload: payload.clone(),
            })
            .await
            .unwrap();
        assert_eq!(created["categoryId"], "c9");
        assert_eq!(transport.last().method, Method::POST);
        assert_eq!(
            transport.last().path,
            "/appsec/v1/configs/43253/versions/15/custom-bot-categories"
        );
        assert_eq!(transport.last().body, Some(payload));
    }

    #[test]
    fn test_required_fields() {
        let config = ["config_id", "version"];
        let with = |extra: &[&'static str]| [&config[..], extra].concat();

        assert_blank_fields(&GetCustomBotCategoryListRequest::default(), &config);
        assert_blank_fields(&GetCustomBotCategoryRequest::default(), &with(&["category_id"]));
        assert_blank_fields(&CreateCustomBotCategoryRequest::default(), &with(&["json_payload"]));
        assert_blank_fields(
            &UpdateCustomBotCategoryRequest::default(),
            &with(&["category_id", "json_payload"]),
        );
        assert_blank_fields(&RemoveCustomBotCategoryRequest::default(), &with(&["category_id"]));
        assert_blank_fields(&GetCustomBotCategorySequenceRequest::default(), &config);
        assert_blank_fields(
            &UpdateCustomBotCategorySequenceRequest::default(),
            &with(&["sequence"]),
        );
        assert_blank_fields(
            &GetCustomBotCategoryItemSequenceRequest::default(),
            &with(&["category_id"]),
        );
        assert_blank_fields(
            &UpdateCustomBotCategoryItemSequenceRequest::default(),
            &with(&["category_id", "sequence"]),
        );
    }

    #[test]
    fn test_complete_requests_pass() {
        let sequence = UuidSequence {
            sequence: vec!["s1".to_string()],
        };

        assert!(GetCustomBotCategoryListRequest {
            config_id: 1,
            version: 2,
            ..Default::default()
        }
        .validate()
        .is_ok());
        assert!(CreateCustomBotCategoryRequest {
            config_id: 1,
            version: 2,
            json_payload: json!({}),
        }
        .validate()
        .is_ok());
        assert!(UpdateCustomBotCategoryRequest {
            config_id: 1,
            version: 2,
            category_id: "c1".to_string(),
            json_payload: json!({"categoryName": "x"}),
        }
        .validate()
        .is_ok());
        assert!(RemoveCustomBotCategoryRequest {
            config_id: 1,
            version: 2,
            category_id: "c1".to_string(),
        }
        .validate()
        .is_ok());
        assert!(UpdateCustomBotCategorySequenceRequest {
            config_id: 1,
            version: 2,
            sequence: sequence.clone(),
        }
        .validate()
        .is_ok());
        assert!(UpdateCustomBotCategoryItemSequenceRequest {
            config_id: 1,
            version: 2,
            category_id: "c1".to_string(),
            sequence,
        }
        .validate()
        .is_ok());
    }
}
