//! Plain-text standings tables.

use crate::models::standings::{ConstructorStanding, DriverStanding};

fn render(title: String, name_header: &str, rows: Vec<[String; 4]>) -> String {
    let headers = [
        "Pos".to_string(),
        name_header.to_string(),
        "Points".to_string(),
        "Wins".to_string(),
    ];

    let mut widths = headers.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("{title}\n");
    for row in std::iter::once(&headers).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn driver_table(season: &str, standings: &[DriverStanding]) -> String {
    let rows = standings
        .iter()
        .map(|s| {
            [s.position.clone(), s.driver.display_name(), s.points.clone(), s.wins.clone()]
        })
        .collect();
    render(format!("{season} Driver Standings"), "Driver", rows)
}

pub fn constructor_table(season: &str, standings: &[ConstructorStanding]) -> String {
    let rows = standings
        .iter()
        .map(|s| {
            [s.position.clone(), s.constructor.name.clone(), s.points.clone(), s.wins.clone()]
        })
        .collect();
    render(format!("{season} Constructor Standings"), "Constructor", rows)
}
