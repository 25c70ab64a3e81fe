//! The company overview record returned by the upstream provider.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate company and financial-metrics payload for one ticker symbol.
///
/// Every attribute is an opaque string, passed through exactly as the
/// provider reports it. The wire names match the provider's JSON keys
/// field for field; keys the provider omits deserialize to empty strings,
/// and keys outside this record are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StockOverview {
    /// Ticker symbol of the stock.
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Asset type, e.g. `Common Stock`.
    #[serde(rename = "AssetType")]
    pub asset_type: String,
    /// Company name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Business description of the company.
    #[serde(rename = "Description")]
    pub description: String,
    /// SEC Central Index Key of the company.
    #[serde(rename = "CIK")]
    pub cik: String,
    /// Exchange the stock trades on.
    #[serde(rename = "Exchange")]
    pub exchange: String,
    /// Trading currency.
    #[serde(rename = "Currency")]
    pub currency: String,
    /// Country the company is based in.
    #[serde(rename = "Country")]
    pub country: String,
    /// Sector the company operates in.
    #[serde(rename = "Sector")]
    pub sector: String,
    /// Industry the company operates in.
    #[serde(rename = "Industry")]
    pub industry: String,
    /// Registered address of the company.
    #[serde(rename = "Address")]
    pub address: String,
    /// Official company website.
    #[serde(rename = "OfficialSite")]
    pub official_site: String,
    /// Fiscal year end month.
    #[serde(rename = "FiscalYearEnd")]
    pub fiscal_year_end: String,
    /// Most recently reported quarter.
    #[serde(rename = "LatestQuarter")]
    pub latest_quarter: String,
    /// Market capitalization.
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: String,
    /// Earnings before interest, taxes, depreciation and amortization.
    #[serde(rename = "EBITDA")]
    pub ebitda: String,
    /// Price-to-earnings ratio.
    #[serde(rename = "PERatio")]
    pub pe_ratio: String,
    /// Price/earnings-to-growth ratio.
    #[serde(rename = "PEGRatio")]
    pub peg_ratio: String,
    /// Book value per share.
    #[serde(rename = "BookValue")]
    pub book_value: String,
    /// Dividend paid per share.
    #[serde(rename = "DividendPerShare")]
    pub dividend_per_share: String,
    /// Dividend yield.
    #[serde(rename = "DividendYield")]
    pub dividend_yield: String,
    /// Earnings per share.
    #[serde(rename = "EPS")]
    pub eps: String,
    /// Revenue per share, trailing twelve months.
    #[serde(rename = "RevenuePerShareTTM")]
    pub revenue_per_share_ttm: String,
    /// Profit margin.
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: String,
    /// Operating margin, trailing twelve months.
    #[serde(rename = "OperatingMarginTTM")]
    pub operating_margin_ttm: String,
    /// Return on assets, trailing twelve months.
    #[serde(rename = "ReturnOnAssetsTTM")]
    pub return_on_assets_ttm: String,
    /// Return on equity, trailing twelve months.
    #[serde(rename = "ReturnOnEquityTTM")]
    pub return_on_equity_ttm: String,
    /// Revenue, trailing twelve months.
    #[serde(rename = "RevenueTTM")]
    pub revenue_ttm: String,
    /// Gross profit, trailing twelve months.
    #[serde(rename = "GrossProfitTTM")]
    pub gross_profit_ttm: String,
    /// Diluted earnings per share, trailing twelve months.
    #[serde(rename = "DilutedEPSTTM")]
    pub diluted_eps_ttm: String,
    /// Quarterly earnings growth, year over year.
    #[serde(rename = "QuarterlyEarningsGrowthYOY")]
    pub quarterly_earnings_growth_yoy: String,
    /// Quarterly revenue growth, year over year.
    #[serde(rename = "QuarterlyRevenueGrowthYOY")]
    pub quarterly_revenue_growth_yoy: String,
    /// Analyst consensus target price.
    #[serde(rename = "AnalystTargetPrice")]
    pub analyst_target_price: String,
    /// Number of analysts rating the stock strong buy.
    #[serde(rename = "AnalystRatingStrongBuy")]
    pub analyst_rating_strong_buy: String,
    /// Number of analysts rating the stock buy.
    #[serde(rename = "AnalystRatingBuy")]
    pub analyst_rating_buy: String,
    /// Number of analysts rating the stock hold.
    #[serde(rename = "AnalystRatingHold")]
    pub analyst_rating_hold: String,
    /// Number of analysts rating the stock sell.
    #[serde(rename = "AnalystRatingSell")]
    pub analyst_rating_sell: String,
    /// Number of analysts rating the stock strong sell.
    #[serde(rename = "AnalystRatingStrongSell")]
    pub analyst_rating_strong_sell: String,
    /// Trailing price-to-earnings ratio.
    #[serde(rename = "TrailingPE")]
    pub trailing_pe: String,
    /// Forward price-to-earnings ratio.
    #[serde(rename = "ForwardPE")]
    pub forward_pe: String,
    /// Price-to-sales ratio, trailing twelve months.
    #[serde(rename = "PriceToSalesRatioTTM")]
    pub price_to_sales_ratio_ttm: String,
    /// Price-to-book ratio.
    #[serde(rename = "PriceToBookRatio")]
    pub price_to_book_ratio: String,
    /// Enterprise value to revenue.
    #[serde(rename = "EVToRevenue")]
    pub ev_to_revenue: String,
    /// Enterprise value to EBITDA.
    #[serde(rename = "EVToEBITDA")]
    pub ev_to_ebitda: String,
    /// Beta relative to the overall market.
    #[serde(rename = "Beta")]
    pub beta: String,
    /// 52-week high price.
    #[serde(rename = "52WeekHigh")]
    pub fifty_two_week_high: String,
    /// 52-week low price.
    #[serde(rename = "52WeekLow")]
    pub fifty_two_week_low: String,
    /// 50-day moving average price.
    #[serde(rename = "50DayMovingAverage")]
    pub fifty_day_moving_average: String,
    /// 200-day moving average price.
    #[serde(rename = "200DayMovingAverage")]
    pub two_hundred_day_moving_average: String,
    /// Shares outstanding.
    #[serde(rename = "SharesOutstanding")]
    pub shares_outstanding: String,
    /// Public float.
    #[serde(rename = "SharesFloat")]
    pub shares_float: String,
    /// Percentage of shares held by insiders.
    #[serde(rename = "PercentInsiders")]
    pub percent_insiders: String,
    /// Percentage of shares held by institutions.
    #[serde(rename = "PercentInstitutions")]
    pub percent_institutions: String,
    /// Next dividend payment date.
    #[serde(rename = "DividendDate")]
    pub dividend_date: String,
    /// Ex-dividend date.
    #[serde(rename = "ExDividendDate")]
    pub ex_dividend_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_upstream_keys_default_to_empty() {
        let overview: StockOverview =
            serde_json::from_str(r#"{"Symbol":"IBM","Sector":"TECHNOLOGY"}"#)
                .expect("subset payload should deserialize");

        assert_eq!(overview.symbol, "IBM");
        assert_eq!(overview.sector, "TECHNOLOGY");
        assert_eq!(overview.name, "");
        assert_eq!(overview.ex_dividend_date, "");
    }

    #[test]
    fn unknown_upstream_keys_are_dropped() {
        let overview: StockOverview =
            serde_json::from_str(r#"{"Symbol":"IBM","Note":"rate limit reached"}"#)
                .expect("payload with extra keys should deserialize");

        assert_eq!(overview.symbol, "IBM");
    }

    #[test]
    fn serializes_every_field_under_its_wire_name() {
        let value = serde_json::to_value(StockOverview::default())
            .expect("default overview should serialize");
        let object = value.as_object().expect("overview should be a JSON object");

        assert_eq!(object.len(), 55);
        assert!(object.contains_key("Symbol"));
        assert!(object.contains_key("52WeekHigh"));
        assert!(object.contains_key("200DayMovingAverage"));
        assert!(object.values().all(|field| field.as_str() == Some("")));
    }
}
