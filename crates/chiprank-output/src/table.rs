//! Terminal-friendly ranking tables.

use crate::export::RankingRow;

/// Render the top `limit` rows as a fixed-width text table.
///
/// Pass `None` to render the whole table.
pub fn format_ranking_table(rows: &[RankingRow], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(rows.len()).min(rows.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<8} {:<24} {:>7}  {:>9}  {:>7}  {:>7}\n",
        "Rank", "Ticker", "Company", "Score", "Val", "R&D", "YTD"
    ));

    for row in &rows[..shown] {
        out.push_str(&format!(
            "{:>4}  {:<8} {:<24} {:>7.1}  {:>9}  {:>7}  {:>7}\n",
            row.rank,
            row.ticker,
            truncate(&row.name, 24),
            row.score_0_100,
            row.valuation_display,
            row.rd_display,
            row.ytd_display,
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
