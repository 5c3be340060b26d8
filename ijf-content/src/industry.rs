use crate::error::{ContentError, Result};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Legend/tooltip label for the single dataset in the industry chart.
pub const DATASET_LABEL: &str = "Number of Businesses";

/// Chart title shown above the industry chart.
pub const CHART_TITLE: &str = "Top Industries by Number of Businesses";

/// Fallback dataset used when the embedded fixture is missing or malformed.
/// Order matches the chart's top-to-bottom bar order.
const BUILTIN_INDUSTRIES: [(&str, u32, &str); 7] = [
    ("Rental, hiring & real estate", 951, "#81B29A"),
    ("Construction", 636, "#F2CC8F"),
    ("Agriculture, forestry & fishing", 606, "#E07A5F"),
    ("Financial & insurance services", 522, "#3D405B"),
    ("Retail trade", 414, "#F4F1DE"),
    ("Professional, scientific & technical", 384, "#B0A8B9"),
    ("Health care & social assistance", 258, "#8E8D8A"),
];

/// Number of businesses registered in one Invercargill industry.
///
/// One row of `fixtures/industries.csv`, rendered as one bar of the
/// horizontal industry chart.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct IndustryStat {
    /// Industry name as shown on the category axis
    pub label: String,
    /// Number of businesses in the industry
    pub businesses: u32,
    /// Bar fill colour (`#RRGGBB`)
    pub color: String,
}

impl IndustryStat {
    /// The built-in industry dataset, in display order.
    pub fn builtin() -> Vec<IndustryStat> {
        BUILTIN_INDUSTRIES
            .iter()
            .map(|(label, businesses, color)| IndustryStat {
                label: label.to_string(),
                businesses: *businesses,
                color: color.to_string(),
            })
            .collect()
    }

    /// Parse a CSV string of industry rows into a vector of IndustryStats.
    ///
    /// Expected CSV columns: label, businesses, color. Row order is kept.
    pub fn parse_industry_csv(csv_object: &str) -> Result<Vec<IndustryStat>> {
        let mut stats: Vec<IndustryStat> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.deserialize() {
            let stat: IndustryStat = row?;
            if stat.label.is_empty() {
                return Err(ContentError::InvalidFormat(format!(
                    "industry row {} has an empty label",
                    stats.len() + 1
                )));
            }
            if !is_hex_color(&stat.color) {
                return Err(ContentError::InvalidFormat(format!(
                    "industry '{}' has invalid color '{}'",
                    stat.label, stat.color
                )));
            }
            stats.push(stat);
        }
        Ok(stats)
    }

    /// Parse the embedded fixture, falling back to the built-in dataset.
    ///
    /// Returns the dataset to chart plus the parse error, if any, so the
    /// caller can surface it.
    pub fn load_or_builtin(csv_object: &str) -> (Vec<IndustryStat>, Option<ContentError>) {
        match Self::parse_industry_csv(csv_object) {
            Ok(stats) if !stats.is_empty() => (stats, None),
            Ok(_) => {
                log::warn!("Industry fixture is empty, using built-in dataset");
                (Self::builtin(), None)
            }
            Err(e) => {
                log::error!("Failed to parse industry fixture: {}", e);
                (Self::builtin(), Some(e))
            }
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A single bar as consumed by `renderBarChart` in `bar-chart.js`.
#[derive(Debug, Serialize)]
struct BarDatum<'a> {
    label: &'a str,
    value: u32,
    color: &'a str,
}

/// Serialize the dataset into the JSON array the D3 bar chart expects.
pub fn chart_data_json(stats: &[IndustryStat]) -> String {
    let bars: Vec<BarDatum> = stats
        .iter()
        .map(|s| BarDatum {
            label: &s.label,
            value: s.businesses,
            color: &s.color,
        })
        .collect();
    serde_json::to_string(&bars).unwrap_or_default()
}

/// Chart options: horizontal bars, hidden legend, dark tooltip.
pub fn chart_config() -> Value {
    json!({
        "title": CHART_TITLE,
        "datasetLabel": DATASET_LABEL,
        "indexAxis": "y",
        "legend": false,
        "borderColor": "#FFFFFF",
        "borderWidth": 2,
        "borderRadius": 5,
        "tooltip": {
            "backgroundColor": "#3D405B",
            "titleFontSize": 14,
            "bodyFontSize": 12,
            "padding": 10,
            "cornerRadius": 5,
        },
        "xGridColor": "#EAEAEA",
        "yGrid": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../fixtures/industries.csv");

    #[test]
    fn test_fixture_matches_builtin() {
        let stats = IndustryStat::parse_industry_csv(FIXTURE).unwrap();
        assert_eq!(stats, IndustryStat::builtin());
    }

    #[test]
    fn test_builtin_order_and_values() {
        let stats = IndustryStat::builtin();
        let values: Vec<u32> = stats.iter().map(|s| s.businesses).collect();
        assert_eq!(values, vec![951, 636, 606, 522, 414, 384, 258]);
        assert_eq!(stats[0].label, "Rental, hiring & real estate");
        assert_eq!(stats[6].label, "Health care & social assistance");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let csv_data = "\
label,businesses,color
  Construction , 636 , #F2CC8F
";
        let stats = IndustryStat::parse_industry_csv(csv_data).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label, "Construction");
        assert_eq!(stats[0].businesses, 636);
        assert_eq!(stats[0].color, "#F2CC8F");
    }

    #[test]
    fn test_parse_rejects_non_numeric_count() {
        let csv_data = "label,businesses,color\nConstruction,lots,#F2CC8F\n";
        let err = IndustryStat::parse_industry_csv(csv_data).unwrap_err();
        assert!(matches!(err, ContentError::CsvParse(_)));
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        let csv_data = "label,businesses,color\nConstruction,636,yellow\n";
        let err = IndustryStat::parse_industry_csv(csv_data).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv_data = "label,businesses,color\n";
        let stats = IndustryStat::parse_industry_csv(csv_data).unwrap();
        assert_eq!(stats.len(), 0);
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let (stats, err) = IndustryStat::load_or_builtin("label,businesses,color\nX,1,nope\n");
        assert_eq!(stats, IndustryStat::builtin());
        assert!(err.is_some());

        let (stats, err) = IndustryStat::load_or_builtin("");
        assert_eq!(stats.len(), 7);
        assert!(err.is_none());
    }

    #[test]
    fn test_chart_data_has_seven_bars_in_order() {
        let json = chart_data_json(&IndustryStat::builtin());
        let bars: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(bars.len(), 7);
        assert_eq!(bars[1]["label"], "Construction");
        assert_eq!(bars[1]["value"], 636);
        assert_eq!(bars[3]["color"], "#3D405B");
    }

    #[test]
    fn test_chart_config_is_horizontal() {
        let config = chart_config();
        assert_eq!(config["indexAxis"], "y");
        assert_eq!(config["legend"], false);
        assert_eq!(config["tooltip"]["backgroundColor"], "#3D405B");
    }
}
