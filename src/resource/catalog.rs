//! Akamai-wide catalogues: bot categories, defined bots, detections, the
//! analytics cookie values and the endpoint coverage report.

use super::filter::filter_records;
use crate::client::{config_path, Botman, Operation};
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors, Validator};
use crate::Record;
use serde::{Deserialize, Serialize};

/// Lists the Akamai bot categories, optionally narrowed to one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAkamaiBotCategoryListRequest {
    pub category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AkamaiBotCategoryList {
    #[serde(default)]
    pub categories: Vec<Record>,
}

impl Validate for GetAkamaiBotCategoryListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Lists the Akamai-defined bots, optionally narrowed to one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAkamaiDefinedBotListRequest {
    pub bot_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AkamaiDefinedBotList {
    #[serde(default)]
    pub bots: Vec<Record>,
}

impl Validate for GetAkamaiDefinedBotListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Lists the bot detections, optionally narrowed to one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotDetectionListRequest {
    pub detection_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotDetectionList {
    #[serde(default)]
    pub detections: Vec<Record>,
}

impl Validate for GetBotDetectionListRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Fetches the endpoint coverage report.
///
/// Leave `config_id` and `version` at zero for the account-wide report; set
/// both to scope it to one configuration version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotEndpointCoverageReportRequest {
    pub config_id: i64,
    pub version: i64,
    pub operation_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotEndpointCoverageReport {
    #[serde(default)]
    pub operations: Vec<Record>,
}

impl Validate for GetBotEndpointCoverageReportRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.config_id == 0 && self.version == 0 {
            return Ok(());
        }
        Validator::new().config(self.config_id, self.version).finish()
    }
}

impl Botman {
    pub async fn get_akamai_bot_category_list(
        &self,
        params: &GetAkamaiBotCategoryListRequest,
    ) -> Result<AkamaiBotCategoryList> {
        let op = Operation::read("GetAkamaiBotCategoryList");
        let path = "/appsec/v1/akamai-bot-categories".to_string();

        let mut list: AkamaiBotCategoryList = self.exec(&op, params, path, None).await?;
        list.categories = filter_records(list.categories, "categoryName", &params.category_name)?;
        Ok(list)
    }

    pub async fn get_akamai_defined_bot_list(
        &self,
        params: &GetAkamaiDefinedBotListRequest,
    ) -> Result<AkamaiDefinedBotList> {
        let op = Operation::read("GetAkamaiDefinedBotList");
        let path = "/appsec/v1/akamai-defined-bots".to_string();

        let mut list: AkamaiDefinedBotList = self.exec(&op, params, path, None).await?;
        list.bots = filter_records(list.bots, "botName", &params.bot_name)?;
        Ok(list)
    }

    pub async fn get_bot_detection_list(
        &self,
        params: &GetBotDetectionListRequest,
    ) -> Result<BotDetectionList> {
        let op = Operation::read("GetBotDetectionList");
        let path = "/appsec/v1/bot-detections".to_string();

        let mut list: BotDetectionList = self.exec(&op, params, path, None).await?;
        list.detections = filter_records(list.detections, "detectionName", &params.detection_name)?;
        Ok(list)
    }

    /// Values the bot analytics cookie can take.
    pub async fn get_bot_analytics_cookie_values(&self) -> Result<Record> {
        let op = Operation::read("GetBotAnalyticsCookieValues");
        let path = "/appsec/v1/bot-analytics-cookie/values".to_string();
        self.exec(&op, &(), path, None).await
    }

    pub async fn get_bot_endpoint_coverage_report(
        &self,
        params: &GetBotEndpointCoverageReportRequest,
    ) -> Result<BotEndpointCoverageReport> {
        let op = Operation::read("GetBotEndpointCoverageReport");
        let path = if params.config_id == 0 && params.version == 0 {
            "/appsec/v1/bot-endpoint-coverage-report".to_string()
        } else {
            format!(
                "{}/bot-endpoint-coverage-report",
                config_path(params.config_id, params.version)
            )
        };

        let mut report: BotEndpointCoverageReport = self.exec(&op, params, path, None).await?;
        report.operations = filter_records(report.operations, "operationId", &params.operation_id)?;
        Ok(report)
    }
}
