// Tool surface exports
pub mod catalog;

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

use crate::core::ranking::{fetch_count, rank_shops, DEFAULT_RESULT_COUNT};
use crate::core::report::{render_master_table, render_ranked, NO_MATCHES_MESSAGE};
use crate::models::{MasterDataKind, SearchByAreaParams, SearchRestaurantsParams};
use crate::services::{HotPepperClient, HotPepperError, QueryParams};

/// Shown in place of upstream failure details
const UPSTREAM_ERROR_MESSAGE: &str =
    "The request could not be completed. Please try again later.";

/// Errors surfaced by the tool pipelines
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Client(#[from] HotPepperError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// The message shown to the caller
    ///
    /// Configuration and validation messages pass through verbatim (they are
    /// actionable and non-sensitive); upstream failures are replaced with a
    /// generic message so internals never leak across the protocol boundary.
    pub fn user_message(&self) -> String {
        match self {
            ToolError::InvalidArgument(message) => message.clone(),
            ToolError::Client(HotPepperError::MissingApiKey) => {
                HotPepperError::MissingApiKey.to_string()
            }
            ToolError::Client(_) => UPSTREAM_ERROR_MESSAGE.to_string(),
            ToolError::UnknownTool(_) => self.to_string(),
        }
    }
}

/// One reference-table pipeline, keyed by tool name. Adding a master-data
/// endpoint is a data-only change to this table plus a catalog entry.
struct MasterDataConfig {
    endpoint: &'static str,
    kind: MasterDataKind,
    title: &'static str,
    description: &'static str,
    code_header: &'static str,
    name_header: &'static str,
}

const MASTER_DATA: &[(&str, MasterDataConfig)] = &[
    (
        "get_genres",
        MasterDataConfig {
            endpoint: "genre",
            kind: MasterDataKind::Genre,
            title: "Genre codes",
            description: "Codes accepted by the `genre` search parameter.",
            code_header: "Code",
            name_header: "Genre",
        },
    ),
    (
        "get_budgets",
        MasterDataConfig {
            endpoint: "budget",
            kind: MasterDataKind::Budget,
            title: "Budget codes",
            description: "Codes accepted by the `budget` search parameter.",
            code_header: "Code",
            name_header: "Budget range",
        },
    ),
    (
        "get_large_areas",
        MasterDataConfig {
            endpoint: "large_area",
            kind: MasterDataKind::LargeArea,
            title: "Large area codes",
            description: "Codes accepted by the `large_area` search parameter.",
            code_header: "Code",
            name_header: "Area",
        },
    ),
    (
        "get_specials",
        MasterDataConfig {
            endpoint: "special",
            kind: MasterDataKind::Special,
            title: "Special feature codes",
            description: "Codes accepted by the `special` search parameter. Covers occasions \
                          such as year-end parties, welcome parties, girls' nights and dates.",
            code_header: "Code",
            name_header: "Feature",
        },
    ),
];

/// MCP server exposing the restaurant search tools
#[derive(Clone)]
pub struct GourmetServer {
    client: Arc<HotPepperClient>,
}

impl GourmetServer {
    pub fn new(client: Arc<HotPepperClient>) -> Self {
        Self { client }
    }

    /// Route a tool call to its pipeline
    pub async fn dispatch(&self, name: &str, args: serde_json::Value) -> Result<String, ToolError> {
        if let Some((_, config)) = MASTER_DATA.iter().find(|(tool, _)| *tool == name) {
            return self.master_table(config).await;
        }

        match name {
            "search_restaurants" => self.search_restaurants(parse_params(args)?).await,
            "search_by_area" => self.search_by_area(parse_params(args)?).await,
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }

    async fn search_restaurants(
        &self,
        params: SearchRestaurantsParams,
    ) -> Result<String, ToolError> {
        validate(&params)?;
        let requested = params.count.unwrap_or(DEFAULT_RESULT_COUNT);

        let mut query = QueryParams::new();
        query.push_opt("keyword", params.keyword.as_deref());
        query.push_opt("genre", params.genre.as_deref());
        query.push_opt("budget", params.budget.as_deref());
        query.push("count", fetch_count(requested));
        query.push_opt("lat", params.lat);
        query.push_opt("lng", params.lng);
        query.push_opt("range", params.range);
        query.push_opt("party_capacity", params.party_capacity);
        query.push_opt("special", params.special.as_deref());
        query.push("start", params.start.filter(|&start| start > 0).unwrap_or(1));
        query.push_flag("private_room", params.private_room);
        query.push_flag("wifi", params.wifi);
        query.push_flag("free_drink", params.free_drink);
        query.push_flag("free_food", params.free_food);
        query.push_flag("lunch", params.lunch);
        query.push_flag("midnight", params.midnight);
        query.push_flag("parking", params.parking);
        query.push_flag("card", params.card);
        query.push_flag("pet", params.pet);
        query.push_flag("child", params.child);

        self.ranked_search(query, requested, params.party_capacity, "Recommended restaurants")
            .await
    }

    async fn search_by_area(&self, params: SearchByAreaParams) -> Result<String, ToolError> {
        validate(&params)?;
        let requested = params.count.unwrap_or(DEFAULT_RESULT_COUNT);

        let mut query = QueryParams::new();
        query.push_opt("large_area", params.large_area.as_deref());
        query.push_opt("middle_area", params.middle_area.as_deref());
        query.push_opt("small_area", params.small_area.as_deref());
        query.push_opt("keyword", params.keyword.as_deref());
        query.push_opt("genre", params.genre.as_deref());
        query.push_opt("budget", params.budget.as_deref());
        query.push("count", fetch_count(requested));

        self.ranked_search(query, requested, None, "Recommended restaurants (area search)")
            .await
    }

    /// Shared tail of both search pipelines: fetch, rank, render
    async fn ranked_search(
        &self,
        query: QueryParams,
        requested: u32,
        party_capacity: Option<u32>,
        title: &str,
    ) -> Result<String, ToolError> {
        let results = self.client.gourmet(query).await?;

        let shops = results.shop.unwrap_or_default();
        if shops.is_empty() {
            return Ok(NO_MATCHES_MESSAGE.to_string());
        }

        let ranked = rank_shops(shops, requested as usize, party_capacity);
        tracing::info!(
            "Ranked {} of {} fetched candidates",
            ranked.shops.len(),
            ranked.total_fetched
        );

        Ok(render_ranked(&ranked, title, party_capacity.is_some()))
    }

    async fn master_table(&self, config: &MasterDataConfig) -> Result<String, ToolError> {
        let results = self.client.master(config.endpoint).await?;
        let entries = results.master_entries(config.kind);

        Ok(render_master_table(
            config.title,
            config.description,
            config.code_header,
            config.name_header,
            entries,
        ))
    }
}

fn parse_params<T: DeserializeOwned>(args: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

fn validate<T: Validate>(params: &T) -> Result<(), ToolError> {
    params
        .validate()
        .map_err(|errors| ToolError::InvalidArgument(validation_message(&errors)))
}

/// First constraint message out of a validation failure
fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

impl ServerHandler for GourmetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Restaurant search over the HotPepper gourmet API. Use search_restaurants \
                 for keyword and location queries, search_by_area with HotPepper area codes, \
                 and the get_* tools to list the code tables the search filters accept."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "hotpepper-mcp".to_string(),
                title: Some("HotPepper MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: catalog::tool_catalog(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name.as_ref();
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or_else(|| serde_json::json!({}));

        tracing::info!("Tool call: {}", name);

        // Tool-level failures become error-flagged results, never protocol errors
        match self.dispatch(name, args).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(error) => {
                tracing::warn!("Tool {} failed: {}", name, error);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    error.user_message()
                ))]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_without_credential() -> GourmetServer {
        GourmetServer::new(Arc::new(HotPepperClient::new(
            "https://webservice.recruit.co.jp/hotpepper".to_string(),
            None,
        )))
    }

    #[test]
    fn test_registry_covers_every_reference_tool() {
        let names: Vec<&str> = MASTER_DATA.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["get_genres", "get_budgets", "get_large_areas", "get_specials"]
        );

        let catalog_names: Vec<String> = catalog::tool_catalog()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        for name in names {
            assert!(catalog_names.iter().any(|n| n == name));
        }
    }

    #[test]
    fn test_validation_failures_pass_through_verbatim() {
        let error = ToolError::InvalidArgument("count must be between 1 and 100".to_string());
        assert_eq!(error.user_message(), "count must be between 1 and 100");
    }

    #[test]
    fn test_missing_credential_message_passes_through() {
        let error = ToolError::Client(HotPepperError::MissingApiKey);
        assert!(error.user_message().contains("HOTPEPPER_API_KEY"));
    }

    #[test]
    fn test_upstream_details_are_sanitized() {
        let error = ToolError::Client(HotPepperError::Api {
            status: 502,
            reason: "Bad Gateway".to_string(),
        });
        let message = error.user_message();
        assert_eq!(message, UPSTREAM_ERROR_MESSAGE);
        assert!(!message.contains("502"));

        let error = ToolError::Client(HotPepperError::InvalidResponse(
            "missing field `results`".to_string(),
        ));
        assert_eq!(error.user_message(), UPSTREAM_ERROR_MESSAGE);
    }

    #[test]
    fn test_unknown_tool_message() {
        let error = ToolError::UnknownTool("reserve_table".to_string());
        assert_eq!(error.user_message(), "Unknown tool: reserve_table");
    }

    #[tokio::test]
    async fn test_dispatch_rejects_unknown_tool() {
        let server = server_without_credential();
        let result = server.dispatch("reserve_table", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::UnknownTool(_))));
    }

    #[tokio::test]
    async fn test_validation_runs_before_any_network_call() {
        // Out-of-range count fails even though no credential is configured,
        // proving validation happens ahead of the upstream client.
        let server = server_without_credential();
        let result = server
            .dispatch("search_restaurants", serde_json::json!({"count": 101}))
            .await;

        match result {
            Err(ToolError::InvalidArgument(message)) => {
                assert_eq!(message, "count must be between 1 and 100");
            }
            other => panic!("expected InvalidArgument, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_fails_searches() {
        let server = server_without_credential();
        let result = server
            .dispatch("search_restaurants", serde_json::json!({"keyword": "寿司"}))
            .await;
        assert!(matches!(
            result,
            Err(ToolError::Client(HotPepperError::MissingApiKey))
        ));
    }
}
