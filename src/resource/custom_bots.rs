//! Custom clients, custom-defined bots and Akamai-defined bots moved into a
//! custom category.

use super::filter::filter_records;
use crate::client::{config_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Custom clients
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomClientListRequest {
    pub config_id: i64,
    pub version: i64,
    pub custom_client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomClientList {
    #[serde(rename = "customClients", default)]
    pub custom_clients: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomClientRequest {
    pub config_id: i64,
    pub version: i64,
    pub custom_client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCustomClientRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomClientRequest {
    pub config_id: i64,
    pub version: i64,
    pub custom_client_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCustomClientRequest {
    pub config_id: i64,
    pub version: i64,
    pub custom_client_id: String,
}

impl Validate for GetCustomClientListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetCustomClientRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("custom_client_id", &self.custom_client_id)
            .finish()
    }
}

impl Validate for CreateCustomClientRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateCustomClientRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("custom_client_id", &self.custom_client_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveCustomClientRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("custom_client_id", &self.custom_client_id)
            .finish()
    }
}

// =============================================================================
// Custom-defined bots
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomDefinedBotListRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomDefinedBotList {
    #[serde(default)]
    pub bots: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCustomDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
    pub json_payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCustomDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

impl Validate for GetCustomDefinedBotListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetCustomDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .finish()
    }
}

impl Validate for CreateCustomDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for UpdateCustomDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .required("json_payload", &self.json_payload)
            .finish()
    }
}

impl Validate for RemoveCustomDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .finish()
    }
}

// =============================================================================
// Recategorized Akamai-defined bots
// =============================================================================

/// An Akamai-defined bot assigned to a custom bot category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecategorizedAkamaiDefinedBot {
    #[serde(rename = "botId", default)]
    pub bot_id: String,
    #[serde(rename = "customBotCategoryId", default)]
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecategorizedAkamaiDefinedBotList {
    #[serde(rename = "recategorizedBots", default)]
    pub bots: Vec<RecategorizedAkamaiDefinedBot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRecategorizedAkamaiDefinedBotListRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRecategorizedAkamaiDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRecategorizedAkamaiDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRecategorizedAkamaiDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveRecategorizedAkamaiDefinedBotRequest {
    pub config_id: i64,
    pub version: i64,
    pub bot_id: String,
}

impl Validate for GetRecategorizedAkamaiDefinedBotListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Validate for GetRecategorizedAkamaiDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .finish()
    }
}

impl Validate for CreateRecategorizedAkamaiDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for UpdateRecategorizedAkamaiDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .required("category_id", &self.category_id)
            .finish()
    }
}

impl Validate for RemoveRecategorizedAkamaiDefinedBotRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .config(self.config_id, self.version)
            .required("bot_id", &self.bot_id)
            .finish()
    }
}

fn recategorized_body(bot_id: &str, category_id: &str) -> Value {
    serde_json::json!({ "botId": bot_id, "customBotCategoryId": category_id })
}

impl Botman {
    pub async fn get_custom_client_list(
        &self,
        params: &GetCustomClientListRequest,
    ) -> Result<CustomClientList> {
        let op = Operation::read("GetCustomClientList");
        let path = format!(
            "{}/custom-clients",
            config_path(params.config_id, params.version)
        );

        let mut list: CustomClientList = self.exec(&op, params, path, None).await?;
        list.custom_clients =
            filter_records(list.custom_clients, "customClientId", &params.custom_client_id)?;
        Ok(list)
    }

    pub async fn get_custom_client(&self, params: &GetCustomClientRequest) -> Result<Record> {
        let op = Operation::read("GetCustomClient");
        let path = format!(
            "{}/custom-clients/{}",
            config_path(params.config_id, params.version),
            params.custom_client_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_custom_client(&self, params: &CreateCustomClientRequest) -> Result<Record> {
        let op = Operation::create("CreateCustomClient");
        let path = format!(
            "{}/custom-clients",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_custom_client(&self, params: &UpdateCustomClientRequest) -> Result<Record> {
        let op = Operation::update("UpdateCustomClient");
        let path = format!(
            "{}/custom-clients/{}",
            config_path(params.config_id, params.version),
            params.custom_client_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_custom_client(&self, params: &RemoveCustomClientRequest) -> Result<()> {
        let op = Operation::remove("RemoveCustomClient");
        let path = format!(
            "{}/custom-clients/{}",
            config_path(params.config_id, params.version),
            params.custom_client_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_custom_defined_bot_list(
        &self,
        params: &GetCustomDefinedBotListRequest,
    ) -> Result<CustomDefinedBotList> {
        let op = Operation::read("GetCustomDefinedBotList");
        let path = format!(
            "{}/custom-defined-bots",
            config_path(params.config_id, params.version)
        );

        let mut list: CustomDefinedBotList = self.exec(&op, params, path, None).await?;
        list.bots = filter_records(list.bots, "botId", &params.bot_id)?;
        Ok(list)
    }

    pub async fn get_custom_defined_bot(
        &self,
        params: &GetCustomDefinedBotRequest,
    ) -> Result<Record> {
        let op = Operation::read("GetCustomDefinedBot");
        let path = format!(
            "{}/custom-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_custom_defined_bot(
        &self,
        params: &CreateCustomDefinedBotRequest,
    ) -> Result<Record> {
        let op = Operation::create("CreateCustomDefinedBot");
        let path = format!(
            "{}/custom-defined-bots",
            config_path(params.config_id, params.version)
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn update_custom_defined_bot(
        &self,
        params: &UpdateCustomDefinedBotRequest,
    ) -> Result<Record> {
        let op = Operation::update("UpdateCustomDefinedBot");
        let path = format!(
            "{}/custom-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        self.exec(&op, params, path, Some(params.json_payload.clone()))
            .await
    }

    pub async fn remove_custom_defined_bot(
        &self,
        params: &RemoveCustomDefinedBotRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveCustomDefinedBot");
        let path = format!(
            "{}/custom-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        self.exec_empty(&op, params, path, None).await
    }

    pub async fn get_recategorized_akamai_defined_bot_list(
        &self,
        params: &GetRecategorizedAkamaiDefinedBotListRequest,
    ) -> Result<RecategorizedAkamaiDefinedBotList> {
        let op = Operation::read("GetRecategorizedAkamaiDefinedBotList");
        let path = format!(
            "{}/recategorized-akamai-defined-bots",
            config_path(params.config_id, params.version)
        );

        let mut list: RecategorizedAkamaiDefinedBotList =
            self.exec(&op, params, path, None).await?;
        if !params.bot_id.is_empty() {
            list.bots.retain(|bot| bot.bot_id == params.bot_id);
        }
        Ok(list)
    }

    pub async fn get_recategorized_akamai_defined_bot(
        &self,
        params: &GetRecategorizedAkamaiDefinedBotRequest,
    ) -> Result<RecategorizedAkamaiDefinedBot> {
        let op = Operation::read("GetRecategorizedAkamaiDefinedBot");
        let path = format!(
            "{}/recategorized-akamai-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        self.exec(&op, params, path, None).await
    }

    pub async fn create_recategorized_akamai_defined_bot(
        &self,
        params: &CreateRecategorizedAkamaiDefinedBotRequest,
    ) -> Result<RecategorizedAkamaiDefinedBot> {
        let op = Operation::create("CreateRecategorizedAkamaiDefinedBot");
        let path = format!(
            "{}/recategorized-akamai-defined-bots",
            config_path(params.config_id, params.version)
        );
        let body = recategorized_body(&params.bot_id, &params.category_id);
        self.exec(&op, params, path, Some(body)).await
    }

    pub async fn update_recategorized_akamai_defined_bot(
        &self,
        params: &UpdateRecategorizedAkamaiDefinedBotRequest,
    ) -> Result<RecategorizedAkamaiDefinedBot> {
        let op = Operation::update("UpdateRecategorizedAkamaiDefinedBot");
        let path = format!(
            "{}/recategorized-akamai-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        let body = recategorized_body(&params.bot_id, &params.category_id);
        self.exec(&op, params, path, Some(body)).await
    }

    pub async fn remove_recategorized_akamai_defined_bot(
        &self,
        params: &RemoveRecategorizedAkamaiDefinedBotRequest,
    ) -> Result<()> {
        let op = Operation::remove("RemoveRecategorizedAkamaiDefinedBot");
        let path = format!(
            "{}/recategorized-akamai-defined-bots/{}",
            config_path(params.config_id, params.version),
            params.bot_id
        );
        self.exec_empty(&op, params, path, None).await
    }
}
