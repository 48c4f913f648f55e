#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Panel, Style, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::{
    calculator::GradeCalculator,
    constants::{MAX_SCORE, PASSING_THRESHOLD},
    grade::{Category, GradeResult, GradeSet, Status},
};

/// Fractional digits needed to write any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Formats `value` with `digits` decimals the way a browser's `toFixed` does:
/// the exact binary value is rounded, and only a value sitting exactly on a
/// midpoint rounds away from zero. `1.45` is stored just below the midpoint,
/// so it gives `1.4`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let exact = format!("{value:.EXACT_DIGITS$}");
    let on_midpoint = exact
        .split_once('.')
        .map(|(_, fraction)| &fraction[digits..])
        .and_then(|tail| tail.strip_prefix('5'))
        .is_some_and(|rest| rest.bytes().all(|b| b == b'0'));

    if on_midpoint {
        // midpoints are multiples of 1/4 here, so scaling by 10^digits is exact
        let scale = 10f64.powi(digits as i32);
        let rounded = (value * scale).round() / scale;
        format!("{rounded:.digits$}")
    } else {
        format!("{value:.digits$}")
    }
}

/// Formats with one decimal (`10.25` -> `10.3`, `1.45` -> `1.4`)
pub fn fixed1(value: f64) -> String {
    to_fixed(value, 1)
}

/// Formats a percentage as a whole number
pub fn percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 0))
}

/// The two legend cards: grading system and band ranges
pub fn legend_sections() -> [(&'static str, Vec<String>); 2] {
    let system = Category::ALL
        .iter()
        .map(|c| {
            format!(
                "{}: {} {} ({:.0}% del total)",
                c.label(),
                c.slots(),
                c.noun(),
                c.weight() * 100.0
            )
        })
        .chain([
            format!("Nota mínima para aprobar: {PASSING_THRESHOLD}"),
            format!("Escala: 0 - {MAX_SCORE} puntos"),
        ])
        .collect();

    let bands = Status::ALL
        .iter()
        .map(|s| format!("{}: {}", s.range_label(), s.label()))
        .collect();

    [("Sistema de Calificación", system), ("Rangos de Calificación", bands)]
}

/// Renders the legend as plain indented bullet lists
pub fn render_legend() -> String {
    legend_sections()
        .iter()
        .map(|(title, lines)| {
            let body = lines.iter().map(|l| format!("  • {l}")).join("\n");
            format!("{}\n{body}", title.bold())
        })
        .join("\n\n")
}

#[derive(Tabled)]
/// One table row per category
struct CategoryRow {
    #[tabled(rename = "Categoría")]
    /// * `category`: category title
    category: String,
    #[tabled(rename = "Notas")]
    /// * `scores`: every score of the category
    scores:   String,
    #[tabled(rename = "Promedio")]
    /// * `average`: category average
    average:  String,
    #[tabled(rename = "Peso")]
    /// * `weight`: share of the final grade
    weight:   String,
    #[tabled(rename = "Puntos")]
    /// * `points`: contribution to the final grade
    points:   String,
    #[tabled(rename = "Estado")]
    /// * `status`: band of the category average
    status:   String,
}

/// Result fields plus the derived presentation values, as emitted in JSON
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult {
    /// the core result
    #[serde(flatten)]
    result:             GradeResult,
    /// contribution of the permanentes average
    permanentes_points: f64,
    /// contribution of the parciales average
    parciales_points:   f64,
    /// percent of the way to passing, capped at 100
    passing_progress:   f64,
}

/// Top-level JSON document
#[derive(Serialize)]
struct JsonReport<'a> {
    /// the scores as entered
    grades: &'a GradeSet,
    /// the derived result
    result: JsonResult,
}

/// A snapshot of scores and their result, ready to print.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct GradeReport {
    /// The scores as entered
    grades: GradeSet,
    /// Result derived from `grades`
    result: GradeResult,
    /// Header shown above the table
    #[builder(default = String::from("Resultado Final"), setter(into))]
    title:  String,
}

impl From<&GradeCalculator> for GradeReport {
    fn from(calc: &GradeCalculator) -> Self {
        GradeReport::builder()
            .grades(*calc.grades())
            .result(*calc.result())
            .build()
    }
}

impl From<GradeSet> for GradeReport {
    fn from(grades: GradeSet) -> Self {
        GradeReport::builder()
            .grades(grades)
            .result(grades.compute())
            .build()
    }
}

impl GradeReport {
    /// The scores in this report
    pub fn grades(&self) -> &GradeSet {
        &self.grades
    }

    /// The result in this report
    pub fn result(&self) -> &GradeResult {
        &self.result
    }

    /// Renders a per-category table with a total footer.
    pub fn render_table(&self) -> String {
        let rows: Vec<CategoryRow> = Category::ALL
            .iter()
            .map(|&category| CategoryRow {
                category: category.label().to_string(),
                scores:   self.grades.scores(category).iter().map(|s| fixed1(*s)).join(", "),
                average:  fixed1(self.result.average(category)),
                weight:   format!("{:.0}%", category.weight() * 100.0),
                points:   format!("{} pts", fixed1(self.result.points(category))),
                status:   self.result.category_status(category).label().to_string(),
            })
            .collect();

        Table::new(rows)
            .with(Style::modern())
            .with(Panel::header(self.title.as_str()))
            .with(Panel::footer(format!(
                "Total: {} / {MAX_SCORE}",
                fixed1(self.result.final_grade)
            )))
            .modify(Rows::first(), Alignment::center())
            .modify(Rows::last(), Alignment::center())
            .to_string()
    }

    /// Renders the final grade, its band and the progress towards passing.
    pub fn render_summary(&self) -> String {
        let status = self.result.status;
        let verdict = if self.result.is_passing {
            "Curso aprobado".green()
        } else {
            "Curso reprobado".red()
        };

        format!(
            "Nota final: {} / {MAX_SCORE} · {}\n{verdict}\nProgreso hacia la aprobación: {}",
            fixed1(self.result.final_grade),
            status.label().color(status.color_name()).bold(),
            percent(self.result.passing_progress()),
        )
    }

    /// Renders the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        let doc = JsonReport {
            grades: &self.grades,
            result: JsonResult {
                result:             self.result,
                permanentes_points: self.result.points(Category::Permanentes),
                parciales_points:   self.result.points(Category::Parciales),
                passing_progress:   self.result.passing_progress(),
            },
        };
        serde_json::to_string_pretty(&doc).context("Failed to serialize grade report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed1_rounds_exact_midpoints_up() {
        assert_eq!(fixed1(10.25), "10.3");
        assert_eq!(fixed1(0.25), "0.3");
        assert_eq!(fixed1(0.75), "0.8");
        assert_eq!(fixed1(10.6), "10.6");
        assert_eq!(fixed1(10.600000000000001), "10.6");
        assert_eq!(fixed1(0.0), "0.0");
        assert_eq!(fixed1(20.0), "20.0");
    }

    #[test]
    fn fixed1_rounds_the_stored_value() {
        // 1.45 and 0.15 are stored just below the midpoint
        assert_eq!(fixed1(1.45), "1.4");
        let average = GradeSet::from_scores([0.6, 0.0, 0.0, 0.0], [0.0; 2])
            .compute()
            .permanentes_average;
        assert_eq!(fixed1(average), "0.1");
    }

    #[test]
    fn percent_is_whole() {
        assert_eq!(percent(95.238), "95%");
        assert_eq!(percent(100.0), "100%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(0.5), "1%");
        assert_eq!(percent(2.5), "3%");
        assert_eq!(percent(2.4999999999999996), "2%");
    }

    #[test]
    fn band_color_names_are_known_to_colored() {
        let colors: Vec<colored::Color> =
            Status::ALL.iter().map(|s| colored::Color::from(s.color_name())).collect();
        assert_eq!(
            colors,
            [
                colored::Color::Green,
                colored::Color::Blue,
                colored::Color::Yellow,
                colored::Color::Red
            ]
        );
    }

    #[test]
    fn table_has_rows_and_total() {
        colored::control::set_override(false);
        let report = GradeReport::from(GradeSet::from_scores([10.0; 4], [11.0; 2]));
        let table = report.render_table();

        assert!(table.contains("Resultado Final"));
        assert!(table.contains("10.0, 10.0, 10.0, 10.0"));
        assert!(table.contains("11.0, 11.0"));
        assert!(table.contains("4.0 pts"));
        assert!(table.contains("6.6 pts"));
        assert!(table.contains("Total: 10.6 / 20"));
    }

    #[test]
    fn custom_title() {
        let grades = GradeSet::new();
        let report = GradeReport::builder()
            .grades(grades)
            .result(grades.compute())
            .title("Ciclo 2024-I")
            .build();
        assert!(report.render_table().contains("Ciclo 2024-I"));
    }

    #[test]
    fn json_carries_points_and_progress() {
        let report = GradeReport::from(GradeSet::from_scores([14.0; 4], [14.0; 2]));
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(value["result"]["status"], "Muy Bueno");
        assert_eq!(value["result"]["finalGrade"], 14.0);
        assert_eq!(value["result"]["isPassing"], true);
        assert_eq!(value["result"]["passingProgress"], 100.0);
        assert_eq!(value["grades"]["parciales"].as_array().map(Vec::len), Some(2));
    }
}
