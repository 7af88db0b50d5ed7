//! Canned analysis text, selected by the current region view and
//! timeframe. The prose is pre-written; only the headline figures are
//! interpolated from the metric tables.

use model::{MetricId, RegionId, RegionView, Timeframe};

use crate::metrics;

/// One selected analysis block: a title, body paragraphs, and the policy
/// note shown beneath them.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub policy_note: String,
}

fn current(region: RegionId, id: MetricId) -> f64 {
    metrics::current_value(region, id).unwrap_or_default()
}

fn forecast_end(region: RegionId, id: MetricId) -> f64 {
    metrics::metric(region, id)
        .and_then(|m| m.forecast.last().map(|p| p.value))
        .unwrap_or_default()
}

/// Selects the analysis block for the given view. Pure text selection:
/// every branch returns pre-written paragraphs.
pub fn analysis_for(region: RegionView, timeframe: Timeframe) -> Analysis {
    use RegionId::{UnitedStates as Us, Washington as Wa};

    let (title, paragraphs) = match (region, timeframe) {
        (RegionView::UnitedStates, Timeframe::Current) => (
            "Current US Inequality Analysis",
            vec![
                format!(
                    "The United States continues to face significant income inequality challenges. \
                     The current Gini coefficient of {:.2} indicates high inequality compared to \
                     other developed nations.",
                    current(Us, MetricId::Gini)
                ),
                format!(
                    "Wealth concentration remains a pressing issue, with the top 1% owning \
                     approximately {:.1}% of the nation's wealth.",
                    current(Us, MetricId::WealthTop1)
                ),
                format!(
                    "The income ratio between the top 10% and bottom 50% of earners stands at \
                     {:.1}x, highlighting the significant gap between high and low-income households.",
                    current(Us, MetricId::IncomeRatio)
                ),
            ],
        ),
        (RegionView::UnitedStates, Timeframe::Historical) => (
            "US Inequality Historical Trends",
            vec![
                "Over the past two decades, income inequality in the United States has shown a \
                 persistent upward trend. The Gini coefficient has increased by approximately 10% \
                 since 2000."
                    .to_string(),
                "Wealth concentration has accelerated more rapidly than income inequality, with \
                 the share owned by the top 1% growing substantially."
                    .to_string(),
                "While poverty rates have fluctuated, particularly during economic recessions, the \
                 long-term trend shows only marginal improvement despite periods of strong economic \
                 growth."
                    .to_string(),
            ],
        ),
        (RegionView::UnitedStates, Timeframe::Forecast) => (
            "US Inequality Forecast",
            vec![
                format!(
                    "Forecasts indicate continued challenges with inequality in the United States \
                     over the next decade. Without significant policy interventions, the Gini \
                     coefficient is projected to increase to approximately {:.2} by 2035.",
                    forecast_end(Us, MetricId::Gini)
                ),
                format!(
                    "Wealth concentration trends suggest the top 1% share could reach {:.1}% by \
                     2035, representing a significant increase from current levels.",
                    forecast_end(Us, MetricId::WealthTop1)
                ),
                "On a positive note, poverty rates are projected to decrease modestly, though \
                 progress may be uneven across different demographic groups and regions."
                    .to_string(),
            ],
        ),
        (RegionView::Washington, Timeframe::Current) => (
            "Current Washington State Inequality Analysis",
            vec![
                format!(
                    "Washington State shows slightly better inequality metrics than the national \
                     average, with a Gini coefficient of {:.2}.",
                    current(Wa, MetricId::Gini)
                ),
                format!(
                    "The state's robust tech economy has created high-paying jobs, but has also \
                     contributed to income disparities, with an income ratio of {:.1}x between top \
                     and bottom earners.",
                    current(Wa, MetricId::IncomeRatio)
                ),
                format!(
                    "Washington's poverty rate of {:.1}% is lower than the national average, \
                     reflecting stronger economic opportunities in the state.",
                    current(Wa, MetricId::PovertyRate)
                ),
            ],
        ),
        (RegionView::Washington, Timeframe::Historical) => (
            "Washington State Historical Inequality Trends",
            vec![
                "Washington State has seen its inequality metrics worsen over time, though at a \
                 slower rate than the national average. The rise of the technology sector has \
                 created significant wealth, but not all residents have benefited equally."
                    .to_string(),
                "Housing affordability has emerged as a major factor in inequality, particularly \
                 in the Seattle metropolitan area, where housing costs have increased dramatically."
                    .to_string(),
                "Despite economic growth, poverty rates have remained stubborn in certain regions \
                 of the state, particularly in rural areas and among certain demographic groups."
                    .to_string(),
            ],
        ),
        (RegionView::Washington, Timeframe::Forecast) => (
            "Washington State Inequality Forecast",
            vec![
                format!(
                    "Washington State's inequality forecasts suggest a more stable trajectory than \
                     the national outlook, with the Gini coefficient projected to remain around \
                     {:.2} by 2035.",
                    forecast_end(Wa, MetricId::Gini)
                ),
                "The state's proactive policy approaches, including its progressive minimum wage \
                 policies, may help temper income inequality growth. However, continued vigilance \
                 is needed."
                    .to_string(),
                format!(
                    "Poverty rates are projected to continue their declining trend, potentially \
                     reaching {:.1}% by 2035.",
                    forecast_end(Wa, MetricId::PovertyRate)
                ),
            ],
        ),
        (RegionView::Comparison, Timeframe::Current) => (
            "US vs. Washington State Comparison",
            vec![
                format!(
                    "Washington State currently shows moderately better inequality metrics than \
                     the US average, with a Gini coefficient {:.2} points lower than the national \
                     figure.",
                    current(Us, MetricId::Gini) - current(Wa, MetricId::Gini)
                ),
                format!(
                    "The poverty rate in Washington ({:.1}%) compares favorably to the national \
                     rate of {:.1}%, representing a meaningful difference in economic hardship.",
                    current(Wa, MetricId::PovertyRate),
                    current(Us, MetricId::PovertyRate)
                ),
                "Wealth concentration patterns, however, are similar between Washington and the \
                 national average, highlighting that this is a broader structural challenge."
                    .to_string(),
            ],
        ),
        (RegionView::Comparison, Timeframe::Historical) => (
            "Historical Comparison: US vs. Washington",
            vec![
                "Historically, Washington State has maintained better inequality metrics than the \
                 US average, though both have shown worsening trends over the past two decades."
                    .to_string(),
                "The gap between Washington and national poverty rates has remained relatively \
                 constant, suggesting similar underlying economic forces despite Washington's \
                 stronger overall economy."
                    .to_string(),
                "Income ratio trends have been slightly more favorable in Washington compared to \
                 national figures, potentially due to stronger wage growth across income levels."
                    .to_string(),
            ],
        ),
        (RegionView::Comparison, Timeframe::Forecast) => (
            "Comparative Forecast: US vs. Washington",
            vec![
                "Forecasts suggest Washington State will maintain its advantage over national \
                 inequality metrics, though the gap may narrow slightly by 2035."
                    .to_string(),
                "The poverty rate differential is expected to persist, with Washington projected \
                 to maintain approximately a 2 percentage point advantage over the national \
                 average."
                    .to_string(),
                "Both the US and Washington face challenges with wealth concentration, with \
                 similar upward trajectories projected unless significant policy interventions are \
                 implemented."
                    .to_string(),
            ],
        ),
    };

    let policy_note = if timeframe == Timeframe::Forecast {
        "These projections highlight the need for targeted policy interventions to address \
         systemic inequality. Progressive taxation, educational investments, and affordable \
         housing initiatives could help mitigate these trends."
    } else {
        "Current inequality metrics point to the need for structural economic reforms. \
         Policymakers should consider progressive taxation, educational investments, and \
         affordable housing initiatives to address these challenges."
    };

    Analysis {
        title: title.to_string(),
        paragraphs,
        policy_note: policy_note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_combination_selects_a_block() {
        for region in [
            RegionView::UnitedStates,
            RegionView::Washington,
            RegionView::Comparison,
        ] {
            for timeframe in [Timeframe::Current, Timeframe::Historical, Timeframe::Forecast] {
                let analysis = analysis_for(region, timeframe);
                assert!(!analysis.title.is_empty());
                assert_eq!(analysis.paragraphs.len(), 3);
                assert!(!analysis.policy_note.is_empty());
            }
        }
    }

    #[test]
    fn current_us_analysis_interpolates_table_values() {
        let analysis = analysis_for(RegionView::UnitedStates, Timeframe::Current);
        assert_eq!(analysis.title, "Current US Inequality Analysis");
        assert!(analysis.paragraphs[0].contains("0.49"));
        assert!(analysis.paragraphs[1].contains("32.3%"));
        assert!(analysis.paragraphs[2].contains("14.2x"));
    }

    #[test]
    fn forecast_views_use_the_forecast_policy_note() {
        let forecast = analysis_for(RegionView::Washington, Timeframe::Forecast);
        assert!(forecast.policy_note.starts_with("These projections"));
        let current = analysis_for(RegionView::Washington, Timeframe::Current);
        assert!(current.policy_note.starts_with("Current inequality"));
    }

    #[test]
    fn comparison_view_reports_the_gini_gap() {
        let analysis = analysis_for(RegionView::Comparison, Timeframe::Current);
        assert!(analysis.paragraphs[0].contains("0.03 points lower"));
    }
}
