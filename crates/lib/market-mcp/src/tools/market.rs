use market_core::overview::StockOverview;
use rmcp::{
    ErrorData,
    handler::server::wrapper::{Json, Parameters},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::MarketMcp;
use crate::helpers;

/// Parameters for looking up a stock overview.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetStockParams {
    /// Ticker symbol of the stock to get, e.g. `IBM`. Case-insensitive.
    pub symbol: String,
}

#[tool_router(router = tool_router_market, vis = "pub")]
impl MarketMcp {
    #[tool(
        name = "get-stock",
        description = "Get specific stock into market using Stock symbol"
    )]
    async fn get_stock(
        &self,
        Parameters(params): Parameters<GetStockParams>,
    ) -> Result<Json<StockOverview>, ErrorData> {
        let overview = self
            .client
            .lookup(&params.symbol)
            .await
            .map_err(helpers::map_lookup_err)?;
        Ok(Json(overview))
    }
}
