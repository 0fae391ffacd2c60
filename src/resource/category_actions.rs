//! Per-policy actions for Akamai bot categories, bot detections and custom
//! bot categories.

use super::filter::filter_records;
use crate::client::{policy_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape shared by the three category action lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionList {
    #[serde(default)]
    pub actions: Vec<Record>,
}

// =============================================================================
// Akamai bot category actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAkamaiBotCategoryActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    /// Keep only the action of this category.
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAkamaiBotCategoryActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAkamaiBotCategoryActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub category_id: String,
    pub json_payload: Value,
}

impl Validate for GetAkamaiBotCategoryActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetAkamaiBotCategoryActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for UpdateAkamaiBotCategoryActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("category_id", &self.category_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

// =============================================================================
// Bot detection actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotDetectionActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    /// Keep only the action of this detection.
    pub detection_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotDetectionActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub detection_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBotDetectionActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub detection_id: String,
    pub json_payload: Value,
}

impl Validate for GetBotDetectionActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetBotDetectionActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("detection_id", &self.detection_id)
            .finish()
    }
}

impl Validate for UpdateBotDetectionActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("detection_id", &self.detection_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

// =============================================================================
// Custom bot category actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategoryActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomBotCategoryActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomBotCategoryActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub category_id: String,
    pub json_payload: Value,
}

impl Validate for GetCustomBotCategoryActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetCustomBotCategoryActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for UpdateCustomBotCategoryActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("category_id", &self.category_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Botman {
    pub async fn get_akamai_bot_category_action_list(
        &self,
        params: &GetAkamaiBotCategoryActionListRequest,
    ) -> Result<ActionList> {
        let op = Operation::read("GetAkamaiBotCategoryActionList");
        let path = format!(
            "{}/akamai-bot-category-actions",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );

        let mut list: ActionList = self.exec(&op, params, path, None).await?;
        list.actions = filter_records(list.actions, "categoryId", &params.category_id)?;
        Ok(list)
    }

    pub async fn get_akamai_bot_category_action(
        &self,
        params: &GetAkamaiBotCategoryActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetAkamaiBotCategoryAction");
        let path = format!(
            "{}/akamai-bot-category-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.category_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_akamai_bot_category_action(
        &self,
        params: &UpdateAkamaiBotCategoryActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateAkamaiBotCategoryAction");
        let path = format!(
            "{}/akamai-bot-category-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.category_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_bot_detection_action_list(
        &self,
        params: &GetBotDetectionActionListRequest,
    ) -> Result<ActionList> {
        let op = Operation::read("GetBotDetectionActionList");
        let path = format!(
            "{}/bot-detection-actions",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );

        let mut list: ActionList = self.exec(&op, params, path, None).await?;
        list.actions = filter_records(list.actions, "detectionId", &params.detection_id)?;
        Ok(list)
    }

    pub async fn get_bot_detection_action(
        &self,
        params: &GetBotDetectionActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetBotDetectionAction");
        let path = format!(
            "{}/bot-detection-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.detection_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_bot_detection_action(
        &self,
        params: &UpdateBotDetectionActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateBotDetectionAction");
        let path = format!(
            "{}/bot-detection-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.detection_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_custom_bot_category_action_list(
        &self,
        params: &GetCustomBotCategoryActionListRequest,
    ) -> Result<ActionList> {
        let op = Operation::read("GetCustomBotCategoryActionList");
        let path = format!(
            "{}/custom-bot-category-actions",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );

        let mut list: ActionList = self.exec(&op, params, path, None).await?;
        list.actions = filter_records(list.actions, "categoryId", &params.category_id)?;
        Ok(list)
    }

    pub async fn get_custom_bot_category_action(
        &self,
        params: &GetCustomBotCategoryActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetCustomBotCategoryAction");
        let path = format!(
            "{}/custom-bot-category-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.category_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_custom_bot_category_action(
        &self,
        params: &UpdateCustomBotCategoryActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateCustomBotCategoryAction");
        let path = format!(
            "{}/custom-bot-category-actions/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.category_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{assert_blank_fields, client};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    const POLICY: &str = "/appsec/v1/configs/43253/versions/15/security-policies/AAAA_81230";

    #[tokio::test]
    async fn test_detection_action_list_filters_by_detection() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"actions": [
                {"detectionId": "b85e3eaa-d334-466d-857e-33308ce416be", "action": "monitor"},
                {"detectionId": "cc9c3f89-e179-4892-89cf-d5e623ba9dc7", "action": "deny"}
            ]}"#,
        );
        let list = botman
            .get_bot_detection_action_list(&GetBotDetectionActionListRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                detection_id: "cc9c3f89-e179-4892-89cf-d5e623ba9dc7".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(list.actions.len(), 1);
        assert_eq!(list.actions[0]["action"], "deny");
        assert_eq!(transport.last().path, format!("{}/bot-detection-actions", POLICY));
    }

    #[tokio::test]
    async fn test_category_action_get_and_update_paths() {
        let (botman, transport) = client(StatusCode::OK, r#"{"action": "monitor"}"#);
        botman
            .get_akamai_bot_category_action(&GetAkamaiBotCategoryActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "cc9c3f89".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            transport.last().path,
            format!("{}/akamai-bot-category-actions/cc9c3f89", POLICY)
        );

        let payload = json!({"action": "deny"});
        botman
            .update_custom_bot_category_action(&UpdateCustomBotCategoryActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "cc9c3f89".to_string(),
                json_payload: payload.clone(),
            })
            .await
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, format!("{}/custom-bot-category-actions/cc9c3f89", POLICY));
        assert_eq!(request.body, Some(payload));
    }

    #[test]
    fn test_update_reports_all_missing_fields() {
        let err = UpdateBotDetectionActionRequest::default().validate().unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["config_id", "detection_id", "json_payload", "security_policy_id", "version"]
        );
    }

    #[test]
    fn test_list_does_not_require_filter() {
        let params = GetCustomBotCategoryActionListRequest {
            config_id: 43253,
            version: 15,
            security_policy_id: "AAAA_81230".to_string(),
            category_id: String::new(),
        };
        assert!(params.validate().is_ok());
    }

    #[tokio::test]
    async fn test_custom_category_action_list_filters_by_category() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"actions": [
                {"categoryId": "fake3f89-e179-4892-89cf-d5e623ba9dc7", "action": "monitor"},
                {"categoryId": "fake85df-e399-43e8-be41-fd1c7d3c3f1a", "action": "tarpit"}
            ]}"#,
        );
        let list = botman
            .get_custom_bot_category_action_list(&GetCustomBotCategoryActionListRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "fake85df-e399-43e8-be41-fd1c7d3c3f1a".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(list.actions.len(), 1);
        assert_eq!(list.actions[0]["action"], "tarpit");
        let request = transport.last();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, format!("{}/custom-bot-category-actions", POLICY));
    }

    #[tokio::test]
    async fn test_akamai_category_action_list_filters_by_category() {
        let (botman, transport) = client(
            StatusCode::OK,
            r#"{"actions": [{"categoryId": "c1", "action": "monitor"}, {"categoryId": "c2", "action": "deny"}]}"#,
        );
        let list = botman
            .get_akamai_bot_category_action_list(&GetAkamaiBotCategoryActionListRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(list.actions.len(), 1);
        assert_eq!(list.actions[0]["action"], "monitor");
        assert_eq!(transport.last().path, format!("{}/akamai-bot-category-actions", POLICY));
    }

    #[tokio::test]
    async fn test_remaining_get_and_update_paths() {
        let (botman, transport) = client(StatusCode::OK, r#"{"action": "monitor"}"#);
        let action = botman
            .get_custom_bot_category_action(&GetCustomBotCategoryActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(action["action"], "monitor");
        assert_eq!(transport.last().method, Method::GET);
        assert_eq!(
            transport.last().path,
            format!("{}/custom-bot-category-actions/c1", POLICY)
        );

        botman
            .get_bot_detection_action(&GetBotDetectionActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                detection_id: "d1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(transport.last().path, format!("{}/bot-detection-actions/d1", POLICY));

        let payload = json!({"action": "deny"});
        botman
            .update_bot_detection_action(&UpdateBotDetectionActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                detection_id: "d1".to_string(),
                json_payload: payload.clone(),
            })
            .await
            .unwrap();
        assert_eq!(transport.last().method, Method::PUT);
        assert_eq!(transport.last().body, Some(payload.clone()));

        botman
            .update_akamai_bot_category_action(&UpdateAkamaiBotCategoryActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "c1".to_string(),
                json_payload: payload,
            })
            .await
            .unwrap();
        assert_eq!(transport.last().method, Method::PUT);
        assert_eq!(
            transport.last().path,
            format!("{}/akamai-bot-category-actions/c1", POLICY)
        );
    }

    #[tokio::test]
    async fn test_custom_category_action_update_error() {
        let (botman, _) = client(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"type": "internal_error", "title": "Internal Server Error", "detail": "Error updating data"}"#,
        );
        let err = botman
            .update_custom_bot_category_action(&UpdateCustomBotCategoryActionRequest {
                config_id: 43253,
                version: 15,
                security_policy_id: "AAAA_81230".to_string(),
                category_id: "c1".to_string(),
                json_payload: json!({"action": "deny"}),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.api_error().unwrap().detail, "Error updating data");
    }

    #[test]
    fn test_required_fields() {
        let scope = ["config_id", "security_policy_id", "version"];
        let with = |extra: &[&'static str]| [&scope[..], extra].concat();

        assert_blank_fields(&GetAkamaiBotCategoryActionListRequest::default(), &scope);
        assert_blank_fields(&GetAkamaiBotCategoryActionRequest::default(), &with(&["category_id"]));
        assert_blank_fields(
            &UpdateAkamaiBotCategoryActionRequest::default(),
            &with(&["category_id", "json_payload"]),
        );
        assert_blank_fields(&GetBotDetectionActionListRequest::default(), &scope);
        assert_blank_fields(&GetBotDetectionActionRequest::default(), &with(&["detection_id"]));
        assert_blank_fields(
            &UpdateBotDetectionActionRequest::default(),
            &with(&["detection_id", "json_payload"]),
        );
        assert_blank_fields(&GetCustomBotCategoryActionListRequest::default(), &scope);
        assert_blank_fields(&GetCustomBotCategoryActionRequest::default(), &with(&["category_id"]));
        assert_blank_fields(
            &UpdateCustomBotCategoryActionRequest::default(),
            &with(&["category_id", "json_payload"]),
        );
    }

    #[test]
    fn test_complete_requests_pass() {
        let policy = "AAAA_81230".to_string();
        let payload = json!({"action": "monitor"});

        assert!(GetAkamaiBotCategoryActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            category_id: "c1".to_string(),
        }
        .validate()
        .is_ok());
        assert!(UpdateAkamaiBotCategoryActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            category_id: "c1".to_string(),
            json_payload: payload.clone(),
        }
        .validate()
        .is_ok());
        assert!(GetBotDetectionActionListRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            ..Default::default()
        }
        .validate()
        .is_ok());
        assert!(GetBotDetectionActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            detection_id: "d1".to_string(),
        }
        .validate()
        .is_ok());
        assert!(UpdateBotDetectionActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            detection_id: "d1".to_string(),
            json_payload: payload.clone(),
        }
        .validate()
        .is_ok());
        assert!(GetCustomBotCategoryActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy.clone(),
            category_id: "c1".to_string(),
        }
        .validate()
        .is_ok());
        assert!(UpdateCustomBotCategoryActionRequest {
            config_id: 1,
            version: 2,
            security_policy_id: policy,
            category_id: "c1".to_string(),
            json_payload: payload,
        }
        .validate()
        .is_ok());
    }
}
