//! The four fixed dashboard figures.
//!
//! [`build_figures`] fetches four World Bank indicators for Australia, Canada
//! and the US and assembles one chart description per indicator: two line
//! charts over 2010–2020 and two single-year bar charts for 2020. Output
//! order is positional and fixed; any fetch failure aborts the whole build
//! with no partial set of charts.

use crate::data::IndicatorSource;
use crate::domain::{
    group_by_country, AxisData, AxisSpec, ChartDescription, ChartLayout, ChartSeries,
    DisplayMode, ObservationTable,
};
use crate::error::Error;

const COUNTRIES: &str = "au;ca;us";
const TICK_START: i32 = 2010;
const TICK_SPACING: i32 = 2;

// NOTE: the first two titles are transposed relative to their indicator
// codes (SP.RUR.TOTL is rural population, SP.POP.GROW is growth rate).
// Kept as-is for parity with the deployed dashboard.
const TITLE_ONE: &str = "Population Growth for Australia, Canada & US between 2010 and 2020";
const TITLE_TWO: &str = "Rural Population for Australia, Canada & US between 2010 and 2020";
const TITLE_THREE: &str =
    "Percent of females employed in industry for Australia, Canada & US in 2020";
const TITLE_FOUR: &str =
    "Percent of females employed in service for Australia, Canada & US in 2020";

/// Build the four dashboard chart descriptions, in fixed order:
///
/// 0. rural-population line chart
/// 1. population-growth line chart
/// 2. female-industry-employment bar chart
/// 3. female-service-employment bar chart
///
/// Each chart costs one independent network round-trip through `source`; an
/// error from any of the four fetches propagates unmodified.
pub fn build_figures(source: &impl IndicatorSource) -> Result<Vec<ChartDescription>, Error> {
    let rural = source.fetch("SP.RUR.TOTL", COUNTRIES, "2010:2020")?;
    let growth = source.fetch("SP.POP.GROW", COUNTRIES, "2010:2020")?;
    let industry = source.fetch("SL.IND.EMPL.FE.ZS", COUNTRIES, "2020")?;
    let service = source.fetch("SL.SRV.EMPL.FE.ZS", COUNTRIES, "2020")?;

    Ok(vec![
        line_chart(&rural, TITLE_ONE, "year", "population"),
        line_chart(&growth, TITLE_TWO, "year", "population"),
        bar_chart(industry, TITLE_THREE, "Country", "percent"),
        bar_chart(service, TITLE_FOUR, "Country", "percent"),
    ])
}

/// One line series per country over the observed years.
///
/// Countries are ordered by descending peak value so the legend leads with
/// the largest series; within each country the points run chronologically.
fn line_chart(
    table: &ObservationTable,
    title: &str,
    x_title: &str,
    y_title: &str,
) -> ChartDescription {
    let mut groups = group_by_country(table);
    groups.sort_by(|a, b| peak(&b.values).total_cmp(&peak(&a.values)));

    let data = groups
        .into_iter()
        .map(|group| {
            let mut points: Vec<(i32, f64)> =
                group.years.into_iter().zip(group.values).collect();
            points.sort_by_key(|(year, _)| *year);
            let (years, values): (Vec<i32>, Vec<f64>) = points.into_iter().unzip();

            ChartSeries {
                x: AxisData::Years(years),
                y: values,
                mode: DisplayMode::Line,
                name: group.country,
            }
        })
        .collect();

    ChartDescription {
        data,
        layout: ChartLayout {
            title: title.to_string(),
            xaxis: AxisSpec::with_ticks(x_title, TICK_START, TICK_SPACING),
            yaxis: AxisSpec::titled(y_title),
        },
    }
}

/// A single bar series spanning all countries, widest value first.
fn bar_chart(
    mut table: ObservationTable,
    title: &str,
    x_title: &str,
    y_title: &str,
) -> ChartDescription {
    table.sort_by(|a, b| b.value.total_cmp(&a.value));

    let (countries, values): (Vec<String>, Vec<f64>) = table
        .into_iter()
        .map(|row| (row.country, row.value))
        .unzip();

    ChartDescription {
        data: vec![ChartSeries {
            x: AxisData::Countries(countries),
            y: values,
            mode: DisplayMode::Bar,
            name: "Country".to_string(),
        }],
        layout: ChartLayout {
            title: title.to_string(),
            xaxis: AxisSpec::titled(x_title),
            yaxis: AxisSpec::titled(y_title),
        },
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
