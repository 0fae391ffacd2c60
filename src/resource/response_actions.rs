//! Response actions: the combined listing plus challenge, conditional,
//! custom deny and serve alternate actions.

use super::filter::filter_records;
use crate::client::{config_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn actions_path(config_id: i64, version: i64) -> String {
    format!("{}/response-actions", config_path(config_id, version))
}

/// Lists every response action of a configuration version regardless of kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetResponseActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseActionList {
    #[serde(rename = "responseActions", default)]
    pub response_actions: Vec<Record>,
}

impl Validate for GetResponseActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

// =============================================================================
// Challenge actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChallengeActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeActionList {
    #[serde(rename = "challengeActions", default)]
    pub challenge_actions: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChallengeActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateChallengeActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateChallengeActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveChallengeActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

impl Validate for GetChallengeActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetChallengeActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

impl Validate for CreateChallengeActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateChallengeActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveChallengeActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

/// Sets the Google reCAPTCHA secret key of a challenge action. The key is
/// write-only; the API answers with no content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateGoogleReCaptchaSecretKeyRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
    pub secret_key: String,
}

impl Validate for UpdateGoogleReCaptchaSecretKeyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .required("secret_key", &self.secret_key)
            .finish()
    }
}

// =============================================================================
// Conditional actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetConditionalActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalActionList {
    #[serde(rename = "conditionalActions", default)]
    pub conditional_actions: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetConditionalActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateConditionalActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateConditionalActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveConditionalActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

impl Validate for GetConditionalActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetConditionalActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

impl Validate for CreateConditionalActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateConditionalActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveConditionalActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

// =============================================================================
// Custom deny actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomDenyActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomDenyActionList {
    #[serde(rename = "customDenyActions", default)]
    pub custom_deny_actions: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomDenyActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCustomDenyActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomDenyActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCustomDenyActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

impl Validate for GetCustomDenyActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetCustomDenyActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

impl Validate for CreateCustomDenyActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateCustomDenyActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveCustomDenyActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

// =============================================================================
// Serve alternate actions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServeAlternateActionListRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServeAlternateActionList {
    #[serde(rename = "serveAlternateActions", default)]
    pub serve_alternate_actions: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServeAlternateActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateServeAlternateActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateServeAlternateActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveServeAlternateActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub action_id: String,
}

impl Validate for GetServeAlternateActionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetServeAlternateActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

impl Validate for CreateServeAlternateActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateServeAlternateActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveServeAlternateActionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("action_id", &self.action_id)
            .finish()
    }
}

impl Botman {
    pub async fn get_response_action_list(
        &self,
        params: &GetResponseActionListRequest,
    ) -> Result<ResponseActionList> {
        let op = Operation::read("GetResponseActionList");
        let path = actions_path(params.config_id, params.version);

        let mut list: ResponseActionList = self.exec(&op, params, path, None).await?;
        list.response_actions =
            filter_records(list.response_actions, "actionId", &params.action_id)?;
        Ok(list)
    }

    pub async fn get_challenge_action_list(
        &self,
        params: &GetChallengeActionListRequest,
    ) -> Result<ChallengeActionList> {
        let op = Operation::read("GetChallengeActionList");
        let path = format!("{}/challenge-actions", actions_path(params.config_id, params.version));

        let mut list: ChallengeActionList = self.exec(&op, params, path, None).await?;
        list.challenge_actions =
            filter_records(list.challenge_actions, "actionId", &params.action_id)?;
        Ok(list)
    }

    pub async fn get_challenge_action(&self, params: &GetChallengeActionRequest) -> Result<Record> {
        let op = Operation::read("GetChallengeAction");
        let path = format!(
            "{}/challenge-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_challenge_action(
        &self,
        params: &CreateChallengeActionRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateChallengeAction");
        let path = format!("{}/challenge-actions", actions_path(params.config_id, params.version));
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_challenge_action(
        &self,
        params: &UpdateChallengeActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateChallengeAction");
        let path = format!(
            "{}/challenge-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_challenge_action(
        &self,
        params: &RemoveChallengeActionRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveChallengeAction");
        let path = format!(
            "{}/challenge-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_conditional_action_list(
        &self,
        params: &GetConditionalActionListRequest,
    ) -> Result<ConditionalActionList> {
        let op = Operation::read("GetConditionalActionList");
        let path = format!(
            "{}/conditional-actions",
            actions_path(params.config_id, params.version)
        );

        let mut list: ConditionalActionList = self.exec(&op, params, path, None).await?;
        list.conditional_actions =
            filter_records(list.conditional_actions, "actionId", &params.action_id)?;
        Ok(list)
    }

    pub async fn get_conditional_action(
        &self,
        params: &GetConditionalActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetConditionalAction");
        let path = format!(
            "{}/conditional-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_conditional_action(
        &self,
        params: &CreateConditionalActionRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateConditionalAction");
        let path = format!(
            "{}/conditional-actions",
            actions_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_conditional_action(
        &self,
        params: &UpdateConditionalActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateConditionalAction");
        let path = format!(
            "{}/conditional-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_conditional_action(
        &self,
        params: &RemoveConditionalActionRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveConditionalAction");
        let path = format!(
            "{}/conditional-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_custom_deny_action_list(
        &self,
        params: &GetCustomDenyActionListRequest,
    ) -> Result<CustomDenyActionList> {
        let op = Operation::read("GetCustomDenyActionList");
        let path = format!(
            "{}/custom-deny-actions",
            actions_path(params.config_id, params.version)
        );

        let mut list: CustomDenyActionList = self.exec(&op, params, path, None).await?;
        list.custom_deny_actions =
            filter_records(list.custom_deny_actions, "actionId", &params.action_id)?;
        Ok(list)
    }

    pub async fn get_custom_deny_action(
        &self,
        params: &GetCustomDenyActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetCustomDenyAction");
        let path = format!(
            "{}/custom-deny-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_custom_deny_action(
        &self,
        params: &CreateCustomDenyActionRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateCustomDenyAction");
        let path = format!(
            "{}/custom-deny-actions",
            actions_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_custom_deny_action(
        &self,
        params: &UpdateCustomDenyActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateCustomDenyAction");
        let path = format!(
            "{}/custom-deny-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_custom_deny_action(
        &self,
        params: &RemoveCustomDenyActionRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveCustomDenyAction");
        let path = format!(
            "{}/custom-deny-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_serve_alternate_action_list(
        &self,
        params: &GetServeAlternateActionListRequest,
    ) -> Result<ServeAlternateActionList> {
        let op = Operation::read("GetServeAlternateActionList");
        let path = format!(
            "{}/serve-alternate-actions",
            actions_path(params.config_id, params.version)
        );

        let mut list: ServeAlternateActionList = self.exec(&op, params, path, None).await?;
        list.serve_alternate_actions =
            filter_records(list.serve_alternate_actions, "actionId", &params.action_id)?;
        Ok(list)
    }

    pub async fn get_serve_alternate_action(
        &self,
        params: &GetServeAlternateActionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetServeAlternateAction");
        let path = format!(
            "{}/serve-alternate-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_serve_alternate_action(
        &self,
        params: &CreateServeAlternateActionRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateServeAlternateAction");
        let path = format!(
            "{}/serve-alternate-actions",
            actions_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_serve_alternate_action(
        &self,
        params: &UpdateServeAlternateActionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateServeAlternateAction");
        let path = format!(
            "{}/serve-alternate-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_serve_alternate_action(
        &self,
        params: &RemoveServeAlternateActionRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveServeAlternateAction");
        let path = format!(
            "{}/serve-alternate-actions/{}",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn update_google_recaptcha_secret_key(
        &self,
        params: &UpdateGoogleReCaptchaSecretKeyRequest,
    ) -> Result<()> {
        let op = Operation::new(
            "UpdateGoogleReCaptchaSecretKey",
            Method::PUT,
            StatusCode::NO_CONTENT,
        );
        let path = format!(
            "{}/challenge-actions/{}/google-recaptcha-secret-key",
            actions_path(params.config_id, params.version),
            params.action_id
        );
        let body = serde_json::json!({ "googleReCaptchaSecretKey": params.secret_key });
        self.exec_empty(&op, params, path, Some(body)).await
    }
}
