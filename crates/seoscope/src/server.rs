//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the content analyzer over the MCP protocol, making
//! it available to AI assistants (Claude Code, Cursor, etc.) via stdio
//! transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer — it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method delegates to core
//! library functions rather than implementing analysis logic directly.
//! Every call is stateless: the server holds no per-request data, so
//! concurrent tool calls need no coordination.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use seoscope_core::report::AnalysisSnapshot;
use seoscope_core::{analyzer, suggest};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeContentParams {
    /// The content to analyze.
    pub content: String,
    /// Optional target keyword for density and SEO scoring.
    pub target_keyword: Option<String>,
}

/// Parameters for the `optimization_suggestions` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OptimizationSuggestionsParams {
    /// A previously computed analysis report. Missing fields default to
    /// zero so partial reports are accepted.
    pub analysis: AnalysisSnapshot,
    /// Optional target keyword for the keyword-usage rules.
    pub target_keyword: Option<String>,
}

/// MCP server exposing the content analyzer to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct AnalyzerServer {
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for AnalyzerServer {
    fn default() -> Self {
        Self::new(Some(seoscope_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl AnalyzerServer {
    /// Create a new MCP server instance with an optional input size cap.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a block of content.
    #[tool(
        description = "Analyze content: word/character/sentence/paragraph counts, readability, keyword density, SEO score, and top keywords."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_content(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<AnalyzeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_content",
            content_len = params.content.len(),
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes
            && params.content.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "content too large: {} bytes (limit: {max} bytes)",
                    params.content.len()
                ),
                None,
            ));
        }

        // Empty content is a client error, not a server failure.
        let report = analyzer::analyze(&params.content, params.target_keyword.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_content",
            seo_score = report.seo_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Generate optimization suggestions for a previously computed analysis.
    #[tool(
        description = "Generate ordered optimization suggestions (content length, readability, keyword usage, structure) from an analysis report."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn optimization_suggestions(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<OptimizationSuggestionsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "optimization_suggestions", "executing MCP tool");

        let suggestions =
            suggest::suggestions(&params.analysis, params.target_keyword.as_deref());

        let json = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "optimization_suggestions",
            count = suggestions.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for AnalyzerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_content for metrics and optimization_suggestions for improvement advice.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> AnalyzerServer {
        AnalyzerServer::default()
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let info = ServerHandler::get_info(&server());

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let info = ServerHandler::get_info(&server());

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server().get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));
        assert!(!result.content.is_empty());

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_content_tool_works() {
        let params = Parameters(AnalyzeContentParams {
            content: "The cat sat on the mat. The dog ran fast.".to_string(),
            target_keyword: Some("cat".to_string()),
        });

        let result = server()
            .analyze_content(params)
            .expect("analyze_content should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["word_count"].as_u64().unwrap(), 10);
        assert_eq!(json["sentence_count"].as_u64().unwrap(), 2);
        assert!(json["keyword_density"].as_f64().unwrap() > 0.0);
        assert!(json["seo_score"].as_u64().unwrap() <= 100);
        assert!(json["top_keywords"].is_array());
    }

    #[test]
    fn analyze_content_rejects_empty_input() {
        let params = Parameters(AnalyzeContentParams {
            content: "   ".to_string(),
            target_keyword: None,
        });

        let err = server()
            .analyze_content(params)
            .expect_err("empty content should be rejected");
        assert!(err.message.contains("no content"));
    }

    #[test]
    fn analyze_content_enforces_input_cap() {
        let small = AnalyzerServer::new(Some(8));
        let params = Parameters(AnalyzeContentParams {
            content: "well over eight bytes of content".to_string(),
            target_keyword: None,
        });

        let err = small
            .analyze_content(params)
            .expect_err("oversized content should be rejected");
        assert!(err.message.contains("too large"));
    }

    #[test]
    fn optimization_suggestions_tool_works() {
        let analysis: AnalysisSnapshot = serde_json::from_str(
            r#"{"word_count": 100, "readability_score": 20.0, "keyword_density": 0.0, "paragraph_count": 1}"#,
        )
        .unwrap();
        let params = Parameters(OptimizationSuggestionsParams {
            analysis,
            target_keyword: Some("x".to_string()),
        });

        let result = server()
            .optimization_suggestions(params)
            .expect("optimization_suggestions should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        let kinds: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["type"].as_str().unwrap())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "Content Length",
                "Readability",
                "Keyword Usage",
                "Content Structure"
            ]
        );
    }

    #[test]
    fn optimization_suggestions_accepts_partial_report() {
        let analysis: AnalysisSnapshot =
            serde_json::from_str(r#"{"word_count": 1000}"#).unwrap();
        let params = Parameters(OptimizationSuggestionsParams {
            analysis,
            target_keyword: None,
        });

        let result = server()
            .optimization_suggestions(params)
            .expect("partial report should still succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        // Zero-defaulted readability and paragraph fields still fire rules.
        assert!(!json.as_array().unwrap().is_empty());
    }

    #[test]
    fn optimization_suggestions_quiet_for_good_report() {
        let analysis: AnalysisSnapshot = serde_json::from_str(
            r#"{"word_count": 1000, "readability_score": 60.0, "keyword_density": 2.0, "paragraph_count": 10}"#,
        )
        .unwrap();
        let params = Parameters(OptimizationSuggestionsParams {
            analysis,
            target_keyword: Some("x".to_string()),
        });

        let result = server()
            .optimization_suggestions(params)
            .expect("good report should succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert!(json.as_array().unwrap().is_empty());
    }
}
