use circleforge::api::{EvaluationResult, ReplaySummary};
use circleforge::config::ScoringWeights;
use circleforge::scorer::{ClosureCheck, ScoreDetails};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn score_color(score: f64) -> Color {
    if score >= 90.0 {
        Color::Green
    } else if score >= 70.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn print_evaluation(name: &str, result: &EvaluationResult, decimals: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stroke").add_attribute(Attribute::Bold),
        Cell::new(name),
    ]);

    match result.score {
        Some(score) => {
            table.add_row(vec![
                Cell::new("Score").add_attribute(Attribute::Bold),
                Cell::new(format!("{:.*}%", decimals, score)).fg(score_color(score)),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Score").add_attribute(Attribute::Bold),
                Cell::new("--%").fg(Color::Red),
            ]);
        }
    }

    if let Some(d) = &result.details {
        add_detail_rows(&mut table, d, decimals);
    }
    add_closure_rows(&mut table, &result.closure, decimals);

    let message = match &result.message {
        Some(msg) => msg.clone(),
        None => "Make it a closed circle!".to_string(),
    };
    table.add_row(vec![Cell::new("Verdict"), Cell::new(message)]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

fn add_detail_rows(table: &mut Table, d: &ScoreDetails, decimals: usize) {
    table.add_row(vec![Cell::new("Points"), Cell::new(d.point_count)]);
    table.add_row(vec![
        Cell::new("Avg Radius"),
        Cell::new(format!("{:.*}", decimals, d.avg_radius)),
    ]);
    table.add_row(vec![
        Cell::new("Mean Dev"),
        Cell::new(format!("{:.*}", decimals, d.mean_deviation)),
    ]);
    table.add_row(vec![
        Cell::new("Radial"),
        Cell::new(format!("{:.*}%", decimals, d.radial_score * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Sweep"),
        Cell::new(format!("{:.1}°", d.total_angle.to_degrees())),
    ]);
    table.add_row(vec![
        Cell::new("Coverage"),
        Cell::new(format!("{:.*}%", decimals, d.coverage * 100.0)),
    ]);
}

fn add_closure_rows(table: &mut Table, c: &ClosureCheck, decimals: usize) {
    let verdict = if c.closed {
        Cell::new("closed").fg(Color::Green)
    } else {
        Cell::new("open").fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new("Gap / Limit"),
        Cell::new(format!(
            "{:.*} / {:.*}",
            decimals, c.gap, decimals, c.threshold
        )),
    ]);
    table.add_row(vec![Cell::new("Closure"), verdict]);
}

pub fn print_audit_report(
    results: &[(String, ScoreDetails, ClosureCheck)],
    w: &ScoringWeights,
    decimals: usize,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shape").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new(format!("Radial\n×{:.2}", w.radial_weight)),
        Cell::new(format!("Cover\n×{:.2}", w.coverage_weight)),
        Cell::new("Sweep°"),
        Cell::new("AvgR"),
        Cell::new("Gap"),
        Cell::new("Limit"),
        Cell::new("Closed").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d, c) in results {
        let closed = if c.closed {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.*}", decimals, d.score)).fg(score_color(d.score)),
            Cell::new(format!("{:.3}", d.radial_score)),
            Cell::new(format!("{:.3}", d.coverage)),
            Cell::new(format!("{:.1}", d.total_angle.to_degrees())),
            Cell::new(format!("{:.1}", d.avg_radius)),
            Cell::new(format!("{:.1}", c.gap)),
            Cell::new(format!("{:.1}", c.threshold)),
            closed,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_replay_report(
    summary: &ReplaySummary,
    best_before: f64,
    best_after: f64,
    decimals: usize,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let rows: Vec<(&str, String)> = vec![
        ("Strokes", summary.strokes_started.to_string()),
        ("Live Updates", summary.live_updates.to_string()),
        ("Scored", summary.scored.to_string()),
        ("Unclosed", summary.unclosed.to_string()),
        ("Clears", summary.clears.to_string()),
        ("Resizes", summary.resizes.to_string()),
        ("New Bests", summary.new_bests.to_string()),
        (
            "Top Score",
            summary
                .best_final
                .map_or_else(|| "--".to_string(), |s| format!("{:.*}%", decimals, s)),
        ),
        ("Best Before", format!("{:.*}%", decimals, best_before)),
        ("Best After", format!("{:.*}%", decimals, best_after)),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}
