//! Report copy builders.
//!
//! These assemble the body text for the sector, ticker, and methodology
//! pages. Catalog-driven fields fall back to generic copy when the
//! catalog has no entry; the builders never fail.
//!
//! The layout engine flattens all whitespace into the word stream, so
//! blank lines between sections here do not survive as paragraph breaks
//! in the rendered page. Bullets are literal characters, not structure.

use crate::sectors::SectorInfo;
use std::fmt::Write;

const BULLET: char = '\u{2022}';

fn push_bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "{} {}", BULLET, item);
    }
}

/// Body text of the sector analysis page.
pub fn sector_body(sector: &str, info: &SectorInfo) -> String {
    let description = info
        .description
        .clone()
        .unwrap_or_else(|| format!("Analysis of the {} sector", sector.to_lowercase()));
    let default_metrics = || {
        vec![
            "Revenue Growth".to_string(),
            "Market Share".to_string(),
            "Profitability".to_string(),
        ]
    };
    let default_risks = || {
        vec![
            "Market volatility".to_string(),
            "Economic cycles".to_string(),
        ]
    };
    let key_metrics = info.key_metrics.clone().unwrap_or_else(default_metrics);
    let risk_factors = info.risk_factors.clone().unwrap_or_else(default_risks);

    let mut out = String::new();
    let _ = writeln!(out, "{} Sector Overview", sector);
    let _ = writeln!(out, "\n{}\n", description);

    let _ = writeln!(out, "Key Performance Metrics:");
    push_bullets(&mut out, &key_metrics);

    if !info.subcategories.is_empty() {
        let _ = writeln!(out, "\nSector Subcategories:");
        push_bullets(&mut out, &info.subcategories);
    }

    let _ = writeln!(out, "\nRisk Factors:");
    push_bullets(&mut out, &risk_factors);

    let _ = write!(
        out,
        "\nAnalysis Framework: \
         This sector analysis employs a comprehensive approach examining fundamental metrics, \
         technical indicators, and ESG (Environmental, Social, Governance) factors. The analysis \
         considers both quantitative data and qualitative factors that may impact sector performance. \
         \n\nMarket Position: \
         The {} sector's position within the broader market context is evaluated \
         through comparative analysis with other sectors, historical performance trends, and \
         forward-looking indicators.",
        sector.to_lowercase()
    );
    out
}

/// Body text of the ticker analysis page. Bracketed placeholders mark
/// data points a live market-data feed would fill in.
pub fn ticker_body(ticker: &str) -> String {
    format!(
        "{ticker} - Company Analysis \
         \n\nTicker Symbol: {ticker} \
         \nExchange: [Exchange Name] \
         \nMarket Cap: [Market Capitalization] \
         \nIndustry: [Industry Classification] \
         \nListing Date: [IPO Date] \
         \n\nCompany Overview: \
         This analysis covers the fundamental and technical aspects of {ticker}, including \
         financial performance, business model, competitive positioning, and investment outlook. \
         \n\nKey Financial Metrics: \
         \n{b} Revenue Growth: [YoY Growth %] \
         \n{b} Profit Margins: [Operating/Net Margins] \
         \n{b} Return on Equity: [ROE %] \
         \n{b} Debt-to-Equity Ratio: [D/E Ratio] \
         \n{b} Price-to-Earnings Ratio: [P/E Ratio] \
         \n\nBusiness Highlights: \
         \n{b} Core business operations and revenue streams \
         \n{b} Recent corporate developments and strategic initiatives \
         \n{b} Market position and competitive advantages \
         \n{b} Risk factors and investment considerations \
         \n\nTechnical Analysis: \
         \n{b} Price performance and trading patterns \
         \n{b} Support and resistance levels \
         \n{b} Volume analysis and liquidity metrics \
         \n{b} Moving averages and momentum indicators",
        ticker = ticker,
        b = BULLET
    )
}

/// Body text of the methodology and disclaimers page.
pub fn methodology_body() -> String {
    format!(
        "Research Methodology and Disclaimers \
         \n\nThis sector and ticker analysis report is generated using a combination of quantitative \
         and qualitative research methodologies, including: \
         \n\nData Sources: \
         \n{b} Financial statements and regulatory filings \
         \n{b} Market data and trading information \
         \n{b} Industry research and analyst reports \
         \n{b} Company announcements and press releases \
         \n\nAnalytical Framework: \
         \n{b} Fundamental analysis of financial metrics \
         \n{b} Technical analysis of price movements \
         \n{b} Sector comparison and peer analysis \
         \n{b} Macroeconomic factor assessment \
         \n\nImportant Disclaimers: \
         \n\nThis report is for informational purposes only and should not be construed as \
         investment advice. Past performance does not guarantee future results. All \
         investments carry risk of loss, and there is no guarantee that any investment \
         strategy will be successful. \
         \n\nThe information contained in this report is believed to be accurate at the time \
         of publication but may become outdated. Readers should conduct their own research \
         and consult with qualified financial advisors before making investment decisions. \
         \n\nThis analysis is generated using automated systems and may contain errors or \
         omissions. The authors disclaim any liability for decisions made based on this report.",
        b = BULLET
    )
}
