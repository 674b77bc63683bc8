//! Observation and chart-description types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built in-memory by the figure pipeline
//! - handed to a plotting front end as `data` + `layout` JSON
//! - inspected in tests without any rendering machinery

use serde::Serialize;

/// One indicator observation, flattened from the provider's nested payload.
///
/// A row only exists for a (country, year) pair with a reported value;
/// missing values are dropped during reshaping, never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    /// Country display name as returned by the provider (not an ISO code).
    pub country: String,
    pub year: i32,
    pub value: f64,
}

/// Flattened observations in provider row order.
///
/// No uniqueness is enforced on (country, year); duplicate observations from
/// the provider pass through unchanged.
pub type ObservationTable = Vec<ObservationRow>;

/// All observations for one country, split into parallel x/y vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeries {
    pub country: String,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

/// Group a table by country display name, preserving row order within each
/// group and first-appearance order across groups.
///
/// This is a pure query over the table: re-flattening the groups reproduces
/// the original rows (possibly reordered across countries, never within one).
pub fn group_by_country(table: &[ObservationRow]) -> Vec<CountrySeries> {
    let mut groups: Vec<CountrySeries> = Vec::new();

    for row in table {
        match groups.iter_mut().find(|g| g.country == row.country) {
            Some(group) => {
                group.years.push(row.year);
                group.values.push(row.value);
            }
            None => groups.push(CountrySeries {
                country: row.country.clone(),
                years: vec![row.year],
                values: vec![row.value],
            }),
        }
    }

    groups
}

/// How a series should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[serde(rename = "lines")]
    Line,
    Bar,
}

/// X-axis payload of a series: years for time-series charts, country names
/// for snapshot bar charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisData {
    Years(Vec<i32>),
    Countries(Vec<String>),
}

/// One plottable series.
///
/// Field names follow the Plotly trace shape (`x`, `y`, `mode`, `name`) so a
/// Plotly-style front end can consume the serialized form verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub x: AxisData,
    pub y: Vec<f64>,
    pub mode: DisplayMode,
    pub name: String,
}

/// Fixed tick placement on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickSpec {
    /// First tick value.
    pub tick0: i32,
    /// Spacing between ticks.
    pub dtick: i32,
}

/// One axis: a title plus optional fixed tick placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
    // A flattened `None` emits no tick fields at all.
    #[serde(flatten)]
    pub ticks: Option<TickSpec>,
}

impl AxisSpec {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ticks: None,
        }
    }

    pub fn with_ticks(title: impl Into<String>, tick0: i32, dtick: i32) -> Self {
        Self {
            title: title.into(),
            ticks: Some(TickSpec { tick0, dtick }),
        }
    }
}

/// Display hints for a whole chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: AxisSpec,
    pub yaxis: AxisSpec,
}

/// A render-agnostic chart: series data plus layout hints, consumed by a
/// separate rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<ChartSeries>,
    pub layout: ChartLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, value: f64) -> ObservationRow {
        ObservationRow {
            country: country.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn grouping_splits_per_country_series() {
        let table = vec![
            row("Australia", 2015, 10.0),
            row("Canada", 2015, 5.0),
        ];

        let groups = group_by_country(&table);

        assert_eq!(
            groups,
            vec![
                CountrySeries {
                    country: "Australia".to_string(),
                    years: vec![2015],
                    values: vec![10.0],
                },
                CountrySeries {
                    country: "Canada".to_string(),
                    years: vec![2015],
                    values: vec![5.0],
                },
            ]
        );
    }

    #[test]
    fn grouping_then_flattening_loses_nothing() {
        let table = vec![
            row("Australia", 2016, 11.0),
            row("Canada", 2016, 6.0),
            row("Australia", 2015, 10.0),
            row("Canada", 2015, 5.0),
            // Duplicate (country, year) pairs pass through unchanged.
            row("Australia", 2015, 10.0),
        ];

        let mut flattened: Vec<ObservationRow> = Vec::new();
        for group in group_by_country(&table) {
            for (year, value) in group.years.iter().zip(&group.values) {
                flattened.push(row(&group.country, *year, *value));
            }
        }

        assert_eq!(flattened.len(), table.len());
        for original in &table {
            let in_table = table.iter().filter(|r| *r == original).count();
            let in_flat = flattened.iter().filter(|r| *r == original).count();
            assert_eq!(in_table, in_flat, "row multiplicity changed: {original:?}");
        }
    }

    #[test]
    fn grouping_preserves_row_order_within_a_country() {
        let table = vec![
            row("Canada", 2020, 3.0),
            row("Australia", 2019, 2.0),
            row("Canada", 2018, 1.0),
        ];

        let groups = group_by_country(&table);

        assert_eq!(groups[0].country, "Canada");
        assert_eq!(groups[0].years, vec![2020, 2018]);
        assert_eq!(groups[1].country, "Australia");
        assert_eq!(groups[1].years, vec![2019]);
    }

    #[test]
    fn grouping_keys_on_exact_display_name() {
        // The provider's display name is the grouping key; a capitalization
        // difference is a different group.
        let table = vec![row("Canada", 2020, 1.0), row("CANADA", 2020, 2.0)];
        assert_eq!(group_by_country(&table).len(), 2);
    }

    #[test]
    fn chart_description_serializes_in_plotly_shape() {
        let chart = ChartDescription {
            data: vec![ChartSeries {
                x: AxisData::Years(vec![2010, 2012]),
                y: vec![1.5, 2.5],
                mode: DisplayMode::Line,
                name: "Canada".to_string(),
            }],
            layout: ChartLayout {
                title: "t".to_string(),
                xaxis: AxisSpec::with_ticks("year", 2010, 2),
                yaxis: AxisSpec::titled("population"),
            },
        };

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["data"][0]["x"], serde_json::json!([2010, 2012]));
        assert_eq!(json["data"][0]["mode"], "lines");
        assert_eq!(json["layout"]["xaxis"]["tick0"], 2010);
        assert_eq!(json["layout"]["xaxis"]["dtick"], 2);
        assert!(json["layout"]["yaxis"].get("tick0").is_none());
    }

    #[test]
    fn bar_series_serializes_country_names_on_x() {
        let series = ChartSeries {
            x: AxisData::Countries(vec!["Canada".to_string(), "Australia".to_string()]),
            y: vec![9.0, 8.0],
            mode: DisplayMode::Bar,
            name: "Country".to_string(),
        };

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["x"], serde_json::json!(["Canada", "Australia"]));
        assert_eq!(json["mode"], "bar");
    }
}
