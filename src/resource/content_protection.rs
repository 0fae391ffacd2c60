//! Content protection rules, their evaluation order, and content protection
//! JavaScript injection rules. All are scoped to a security policy.

use super::filter::filter_records;
use crate::client::{policy_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Content protection rules
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContentProtectionRuleListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentProtectionRuleList {
    #[serde(rename = "contentProtectionRules", default)]
    pub content_protection_rules: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContentProtectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateContentProtectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContentProtectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_rule_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveContentProtectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_rule_id: String,
}

impl Validate for GetContentProtectionRuleListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetContentProtectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("content_protection_rule_id", &self.content_protection_rule_id)
            .finish()
    }
}

impl Validate for CreateContentProtectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateContentProtectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("content_protection_rule_id", &self.content_protection_rule_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveContentProtectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("content_protection_rule_id", &self.content_protection_rule_id)
            .finish()
    }
}

// =============================================================================
// JavaScript injection rules
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContentProtectionJavaScriptInjectionRuleListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_javascript_injection_rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentProtectionJavaScriptInjectionRuleList {
    #[serde(rename = "contentProtectionJavaScriptInjectionRules", default)]
    pub content_protection_javascript_injection_rules: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContentProtectionJavaScriptInjectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_javascript_injection_rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateContentProtectionJavaScriptInjectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContentProtectionJavaScriptInjectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_javascript_injection_rule_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveContentProtectionJavaScriptInjectionRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub content_protection_javascript_injection_rule_id: String,
}

impl Validate for GetContentProtectionJavaScriptInjectionRuleListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetContentProtectionJavaScriptInjectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required(
                "content_protection_javascript_injection_rule_id",
                &self.content_protection_javascript_injection_rule_id,
            )
            .finish()
    }
}

impl Validate for CreateContentProtectionJavaScriptInjectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateContentProtectionJavaScriptInjectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required(
                "content_protection_javascript_injection_rule_id",
                &self.content_protection_javascript_injection_rule_id,
            )
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveContentProtectionJavaScriptInjectionRuleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required(
                "content_protection_javascript_injection_rule_id",
                &self.content_protection_javascript_injection_rule_id,
            )
            .finish()
    }
}

// =============================================================================
// Rule sequence
// =============================================================================

/// Order in which a policy evaluates its content protection rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProtectionRuleSequence {
    #[serde(rename = "contentProtectionRuleSequence", default)]
    pub content_protection_rule_sequence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContentProtectionRuleSequenceRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateContentProtectionRuleSequenceRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub sequence: ContentProtectionRuleSequence,
}

impl Validate for GetContentProtectionRuleSequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for UpdateContentProtectionRuleSequenceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required(
                "content_protection_rule_sequence",
                &self.sequence.content_protection_rule_sequence,
            )
            .finish()
    }
}

impl Botman {
    pub async fn get_content_protection_rule_list(
        &self,
        params: &GetContentProtectionRuleListRequest,
    ) -> Result<ContentProtectionRuleList> {
        let op = Operation::read("GetContentProtectionRuleList");
        let path = format!(
            "{}/content-protection-rules",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );

        let mut list: ContentProtectionRuleList = self.exec(&op, params, path, None).await?;
        list.content_protection_rules = filter_records(
            list.content_protection_rules,
            "contentProtectionRuleId",
            &params.content_protection_rule_id,
        )?;
        Ok(list)
    }

    pub async fn get_content_protection_rule(
        &self,
        params: &GetContentProtectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetContentProtectionRule");
        let path = format!(
            "{}/content-protection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_rule_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_content_protection_rule(
        &self,
        params: &CreateContentProtectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateContentProtectionRule");
        let path = format!(
            "{}/content-protection-rules",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_content_protection_rule(
        &self,
        params: &UpdateContentProtectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateContentProtectionRule");
        let path = format!(
            "{}/content-protection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_rule_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_content_protection_rule(
        &self,
        params: &RemoveContentProtectionRuleRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveContentProtectionRule");
        let path = format!(
            "{}/content-protection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_rule_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_content_protection_javascript_injection_rule_list(
        &self,
        params: &GetContentProtectionJavaScriptInjectionRuleListRequest,
    ) -> Result<ContentProtectionJavaScriptInjectionRuleList> {
        let op = Operation::read("GetContentProtectionJavaScriptInjectionRuleList");
        let path = format!(
            "{}/content-protection-javascript-injection-rules",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );

        let mut list: ContentProtectionJavaScriptInjectionRuleList =
            self.exec(&op, params, path, None).await?;
        list.content_protection_javascript_injection_rules = filter_records(
            list.content_protection_javascript_injection_rules,
            "contentProtectionJavaScriptInjectionRuleId",
            &params.content_protection_javascript_injection_rule_id,
        )?;
        Ok(list)
    }

    pub async fn get_content_protection_javascript_injection_rule(
        &self,
        params: &GetContentProtectionJavaScriptInjectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetContentProtectionJavaScriptInjectionRule");
        let path = format!(
            "{}/content-protection-javascript-injection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_javascript_injection_rule_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_content_protection_javascript_injection_rule(
        &self,
        params: &CreateContentProtectionJavaScriptInjectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateContentProtectionJavaScriptInjectionRule");
        let path = format!(
            "{}/content-protection-javascript-injection-rules",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_content_protection_javascript_injection_rule(
        &self,
        params: &UpdateContentProtectionJavaScriptInjectionRuleRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateContentProtectionJavaScriptInjectionRule");
        let path = format!(
            "{}/content-protection-javascript-injection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_javascript_injection_rule_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_content_protection_javascript_injection_rule(
        &self,
        params: &RemoveContentProtectionJavaScriptInjectionRuleRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveContentProtectionJavaScriptInjectionRule");
        let path = format!(
            "{}/content-protection-javascript-injection-rules/{}",
            policy_path(params.config_id, params.version, &params.security_policy_id),
            params.content_protection_javascript_injection_rule_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_content_protection_rule_sequence(
        &self,
        params: &GetContentProtectionRuleSequenceRequest,
    ) -> Result<ContentProtectionRuleSequence> {
        let op = Operation::read("GetContentProtectionRuleSequence");
        let path = format!(
            "{}/content-protection-rule-sequence",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn update_content_protection_rule_sequence(
        &self,
        params: &UpdateContentProtectionRuleSequenceRequest,
    ) -> Result<ContentProtectionRuleSequence> {
        let op = Operation::update("UpdateContentProtectionRuleSequence");
        let path = format!(
            "{}/content-protection-rule-sequence",
            policy_path(params.config_id, params.version, &params.security_policy_id)
        );
        let body = serde_json::json!({
            "contentProtectionRuleSequence": params.sequence.content_protection_rule_sequence
        });
        self.exec(&op, params, path, Some(body)).await
    }
}
