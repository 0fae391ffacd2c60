//! Bot protection on transactional endpoints of a security policy.
//!
//! Endpoints are API operations, identified by `operationId`.

use super::filter::filter_records;
use crate::client::{policy_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn endpoints_path(config_id: i64, version: i64, security_policy_id: &str) -> String {
    format!(
        "{}/transactional-endpoints/bot-protection",
        policy_path(config_id, version, security_policy_id)
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransactionalEndpointListRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub operation_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionalEndpointList {
    #[serde(default)]
    pub operations: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransactionalEndpointRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub operation_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTransactionalEndpointRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTransactionalEndpointRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub operation_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveTransactionalEndpointRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    pub operation_id: String,
}

impl Validate for GetTransactionalEndpointListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .finish()
    }
}

impl Validate for GetTransactionalEndpointRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("operation_id", &self.operation_id)
            .finish()
    }
}

impl Validate for CreateTransactionalEndpointRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateTransactionalEndpointRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("operation_id", &self.operation_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveTransactionalEndpointRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .policy(self.config_id, self.version, &self.security_policy_id)
            .required("operation_id", &self.operation_id)
            .finish()
    }
}

impl Botman {
    pub async fn get_transactional_endpoint_list(
        &self,
        params: &GetTransactionalEndpointListRequest,
    ) -> Result<TransactionalEndpointList> {
        let op = Operation::read("GetTransactionalEndpointList");
        let path = endpoints_path(params.config_id, params.version, &params.security_policy_id);

        let mut list: TransactionalEndpointList = self.exec(&op, params, path, None).await?;
        list.operations = filter_records(list.operations, "operationId", &params.operation_id)?;
        Ok(list)
    }

    pub async fn get_transactional_endpoint(
        &self,
        params: &GetTransactionalEndpointRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetTransactionalEndpoint");
        let path = format!(
            "{}/{}",
            endpoints_path(params.config_id, params.version, &params.security_policy_id),
            params.operation_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_transactional_endpoint(
        &self,
        params: &CreateTransactionalEndpointRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateTransactionalEndpoint");
        let path = endpoints_path(params.config_id, params.version, &params.security_policy_id);
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_transactional_endpoint(
        &self,
        params: &UpdateTransactionalEndpointRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateTransactionalEndpoint");
        let path = format!(
            "{}/{}",
            endpoints_path(params.config_id, params.version, &params.security_policy_id),
            params.operation_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_transactional_endpoint(
        &self,
        params: &RemoveTransactionalEndpointRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveTransactionalEndpoint");
        let path = format!(
            "{}/{}",
            endpoints_path(params.config_id, params.version, &params.security_policy_id),
            params.operation_id
        );
        self.exec_empty(&op, params, path, None).await
    }
}
