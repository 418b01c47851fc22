//! Plain-text rendering of the core's view models.

use comfy_table::{Cell, Table};

use paretolab_core::pareto::ParetoRanking;
use paretolab_core::view::{EvaluationView, ScenarioView};

pub fn scenario(view: &ScenarioView) -> String {
    let mut out = format!("Scenario: {}\n{}\n\n", view.scenario, view.description);
    out.push_str("Assign a priority (1-10) to each problem according to your perception:\n");

    let mut table = Table::new();
    table.set_header(vec!["#", "Problem", "Incidents", "Description", "Priority"]);
    for (i, slider) in view.sliders.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&slider.problem),
            Cell::new(slider.incident_count),
            Cell::new(&slider.description),
            Cell::new(format!("{} (default {})", slider.value, slider.default)),
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');
    out
}

pub fn ranking(ranking: &ParetoRanking, key_problems: &[String]) -> String {
    let mut table = Table::new();
    let with_priority = ranking.entries.iter().any(|e| e.priority.is_some());

    let mut header = vec!["#", "Problem"];
    if with_priority {
        header.push("Priority");
    }
    header.extend(["Incidents", "Cumulative", "% Cumulative", "Key"]);
    table.set_header(header);

    for (i, entry) in ranking.entries.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1), Cell::new(&entry.problem_name)];
        if with_priority {
            row.push(Cell::new(
                entry.priority.map(|p| p.to_string()).unwrap_or_default(),
            ));
        }
        row.push(Cell::new(entry.incident_count));
        row.push(Cell::new(entry.cumulative_incidents));
        row.push(Cell::new(format!("{:.1}%", entry.cumulative_percent)));
        row.push(Cell::new(if key_problems.contains(&entry.problem_name) {
            "*"
        } else {
            ""
        }));
        table.add_row(row);
    }

    let mut out = table.to_string();
    if ranking.is_degenerate() && !ranking.entries.is_empty() {
        out.push_str("\nNo incidents recorded; every cumulative share is 0%.");
    }
    out
}

pub fn evaluation(view: &EvaluationView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.user_chart.title));
    out.push_str(&ranking(&view.user_ranking, &view.comparison.user_candidates));
    out.push_str("\n\n");

    out.push_str("Analysis of your prioritization:\n");
    for line in &view.summary {
        out.push_str(&format!("  {line}\n"));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", view.real_chart.title));
    out.push_str(&ranking(&view.real_ranking, &view.real_top));
    out.push('\n');
    out
}
