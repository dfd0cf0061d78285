use serde::{Deserialize, Serialize};

use crate::services::aggregation::SeriesDataset;

const INCOME_COLOR: &str = "rgba(0, 123, 255, 0.6)";
const EXPENSE_COLOR: &str = "rgba(255, 0, 0, 0.6)";
const BORDER_COLOR: &str = "rgba(0, 0, 0, 0.6)";

/// Bar chart input in the shape Chart.js expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

impl From<SeriesDataset> for ChartData {
    fn from(dataset: SeriesDataset) -> Self {
        let palette = [INCOME_COLOR, EXPENSE_COLOR];
        let datasets = dataset
            .series
            .into_iter()
            .enumerate()
            .map(|(index, series)| ChartDataset {
                label: series.name,
                data: series.values,
                background_color: palette[index % palette.len()].to_string(),
                border_color: BORDER_COLOR.to_string(),
                border_width: 1,
            })
            .collect();

        Self {
            labels: dataset.labels,
            datasets,
        }
    }
}
