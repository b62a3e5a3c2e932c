//! Horizontal bar chart of the ranked 0–100 scores.
//!
//! Renders one labeled bar per company, best rank at the top, with a
//! vertical reference line at the 50 midpoint. Pure presentation; the chart
//! consumes the ranked rows and feeds nothing back.

use crate::export::RankingRow;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Nothing to chart.
    #[error("Cannot render a chart from an empty table")]
    EmptyTable,

    /// Backend drawing error.
    #[error("Chart rendering error: {0}")]
    Render(String),
}

/// Chart dimensions and title.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Chart title.
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "Global Semiconductor Quant Strategy: 3-Factor Model".to_string(),
        }
    }
}

/// Y-axis labels, bottom to top, so rank 1 lands at the top of the chart.
pub(crate) fn bar_labels(rows: &[RankingRow]) -> Vec<String> {
    rows.iter()
        .rev()
        .map(|row| format!("{} ({})", row.name, row.ticker))
        .collect()
}

/// Render the ranked rows as a horizontal bar chart PNG.
pub fn render_score_chart(
    path: impl AsRef<Path>,
    rows: &[RankingRow],
    config: &ChartConfig,
) -> Result<(), ChartError> {
    if rows.is_empty() {
        return Err(ChartError::EmptyTable);
    }
    let n = rows.len() as u32;
    let labels = bar_labels(rows);

    let root =
        BitMapBackend::new(path.as_ref(), (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d(0.0..105.0_f64, (0..n).into_segmented())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Composite Score (Innovation + Value + Momentum)")
        .y_labels(rows.len())
        .y_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(render_err)?;

    // Bars, drawn bottom-to-top to match the label order
    chart
        .draw_series(rows.iter().rev().enumerate().map(|(i, row)| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(i)),
                    (row.score_0_100, SegmentValue::Exact(i + 1)),
                ],
                BLUE.mix(0.6).filled(),
            );
            bar.set_margin(3, 3, 0, 0);
            bar
        }))
        .map_err(render_err)?;

    // Score labels just past each bar end
    chart
        .draw_series(rows.iter().rev().enumerate().map(|(i, row)| {
            Text::new(
                format!("{:.1}", row.score_0_100),
                (row.score_0_100 + 1.0, SegmentValue::CenterOf(i as u32)),
                ("sans-serif", 14),
            )
        }))
        .map_err(render_err)?;

    // Midpoint reference line
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (50.0, SegmentValue::Exact(0)),
                (50.0, SegmentValue::Exact(n)),
            ],
            RGBColor(128, 128, 128),
        )))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: usize, ticker: &str, name: &str, score: f64) -> RankingRow {
        RankingRow {
            rank,
            ticker: ticker.to_string(),
            name: name.to_string(),
            score_0_100: score,
            composite: 0.0,
            z_valuation: 0.0,
            z_innovation: 0.0,
            z_momentum: 0.0,
            valuation_multiple: 10.0,
            rd_intensity: 0.1,
            market_cap: 100.0,
            revenue: 50.0,
            ebitda: 10.0,
            rd_expense: 5.0,
            ytd_return: 20.0,
            valuation_display: "10.0x".to_string(),
            rd_display: "10.0%".to_string(),
            ytd_display: "20.0%".to_string(),
        }
    }

    #[test]
    fn test_labels_put_rank_one_on_top() {
        let rows = vec![
            row(1, "NVDA", "NVIDIA", 100.0),
            row(2, "TSM", "Taiwan Semiconductor", 70.0),
            row(3, "INTC", "Intel", 0.0),
        ];
        let labels = bar_labels(&rows);

        // Bottom-to-top: the last label is the top of the chart
        assert_eq!(labels.first().unwrap(), "Intel (INTC)");
        assert_eq!(labels.last().unwrap(), "NVIDIA (NVDA)");
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let config = ChartConfig::default();
        let err = render_score_chart("/tmp/never-written.png", &[], &config).unwrap_err();
        assert!(matches!(err, ChartError::EmptyTable));
    }

    #[test]
    fn test_default_config_dimensions() {
        let config = ChartConfig::default();
        assert!(config.width > 0 && config.height > 0);
    }
}
