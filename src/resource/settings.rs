//! Single-document settings, read whole and replaced whole.
//!
//! Policy-scoped: bot category exceptions, bot management settings and
//! JavaScript injection. Config-scoped: the bot analytics cookie, client-side
//! security, transactional endpoint protection and challenge interception
//! rules.

use crate::client::{config_path, policy_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde_json::Value;

// =============================================================================
// Policy settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotCategoryExceptionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBotCategoryExceptionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotManagementSettingRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBotManagementSettingRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetJavascriptInjectionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateJavascriptInjectionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

impl Validate for GetBotCategoryExceptionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for UpdateBotCategoryExceptionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for GetBotManagementSettingRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for UpdateBotManagementSettingRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for GetJavascriptInjectionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for UpdateJavascriptInjectionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

// =============================================================================
// Config settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotAnalyticsCookieRequest {
    pub config_id: i64,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBotAnalyticsCookieRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetClientSideSecurityRequest {
    pub config_id: i64,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateClientSideSecurityRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransactionalEndpointProtectionRequest {
    pub config_id: i64,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTransactionalEndpointProtectionRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChallengeInterceptionRulesRequest {
    pub config_id: i64,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateChallengeInterceptionRulesRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

impl Validate for GetBotAnalyticsCookieRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for UpdateBotAnalyticsCookieRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for GetClientSideSecurityRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for UpdateClientSideSecurityRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for GetTransactionalEndpointProtectionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for UpdateTransactionalEndpointProtectionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for GetChallengeInterceptionRulesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for UpdateChallengeInterceptionRulesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Botman {
    pub async fn get_bot_category_exception(
        &self,
        params: &GetBotCategoryExceptionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetBotCategoryException");
        let path = format!(
            "{}/bot-category-exceptions",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_bot_category_exception(
        &self,
        params: &UpdateBotCategoryExceptionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateBotCategoryException");
        let path = format!(
            "{}/bot-category-exceptions",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_bot_management_setting(
        &self,
        params: &GetBotManagementSettingRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetBotManagementSetting");
        let path = format!(
            "{}/bot-management-settings",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_bot_management_setting(
        &self,
        params: &UpdateBotManagementSettingRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateBotManagementSetting");
        let path = format!(
            "{}/bot-management-settings",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_javascript_injection(
        &self,
        params: &GetJavascriptInjectionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetJavascriptInjection");
        let path = format!(
            "{}/javascript-injection",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_javascript_injection(
        &self,
        params: &UpdateJavascriptInjectionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateJavascriptInjection");
        let path = format!(
            "{}/javascript-injection",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_bot_analytics_cookie(
        &self,
        params: &GetBotAnalyticsCookieRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetBotAnalyticsCookie");
        let path = format!(
            "{}/advanced-settings/bot-analytics-cookie",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_bot_analytics_cookie(
        &self,
        params: &UpdateBotAnalyticsCookieRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateBotAnalyticsCookie");
        let path = format!(
            "{}/advanced-settings/bot-analytics-cookie",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_client_side_security(
        &self,
        params: &GetClientSideSecurityRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetClientSideSecurity");
        let path = format!(
            "{}/advanced-settings/client-side-security",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_client_side_security(
        &self,
        params: &UpdateClientSideSecurityRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateClientSideSecurity");
        let path = format!(
            "{}/advanced-settings/client-side-security",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_transactional_endpoint_protection(
        &self,
        params: &GetTransactionalEndpointProtectionRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetTransactionalEndpointProtection");
        let path = format!(
            "{}/advanced-settings/transactional-endpoint-protection",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_transactional_endpoint_protection(
        &self,
        params: &UpdateTransactionalEndpointProtectionRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateTransactionalEndpointProtection");
        let path = format!(
            "{}/advanced-settings/transactional-endpoint-protection",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn get_challenge_interception_rules(
        &self,
        params: &GetChallengeInterceptionRulesRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetChallengeInterceptionRules");
        let path = format!(
            "{}/response-actions/challenge-interception-rules",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_challenge_interception_rules(
        &self,
        params: &UpdateChallengeInterceptionRulesRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateChallengeInterceptionRules");
        let path = format!(
            "{}/response-actions/challenge-interception-rules",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }
}
