//! Plain-text rendering of a dashboard snapshot
//!
//! Terminal stand-in for the chart front end: prices line, Greek bars, and
//! the call/put P&L grid with a spot marker.

use crate::core::{Greeks, PnLSeries};

use super::DashboardSnapshot;

/// Width of each half of a Greek bar (negative side, positive side)
pub const BAR_WIDTH: usize = 20;

const LABEL_WIDTH: usize = 9;
const CELL_WIDTH: usize = 9;

/// "Call: $10.45    Put: $5.57"
pub fn render_prices(snapshot: &DashboardSnapshot) -> String {
    format!(
        "Call: ${:.2}    Put: ${:.2}",
        snapshot.call.price, snapshot.put.price
    )
}

/// Horizontal bars for the six Greeks, scaled to the largest magnitude.
///
/// Negative values grow left of the axis, positive values right of it.
pub fn render_greeks(greeks: &Greeks) -> String {
    let values = greeks.labelled();
    let scale = values.iter().fold(0.0_f64, |acc, (_, v)| acc.max(v.abs()));

    let mut out = String::new();
    for (label, value) in values {
        let len = if scale > 0.0 {
            ((value.abs() / scale) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(len);
        let (left, right) = if value < 0.0 {
            (bar, String::new())
        } else {
            (String::new(), bar)
        };

        out.push_str(&format!(
            "{:<lw$} {:>bw$}|{:<bw$} {:>10.4}\n",
            label,
            left,
            right,
            value,
            lw = LABEL_WIDTH,
            bw = BAR_WIDTH
        ));
    }
    out
}

/// Two-row P&L grid with a marker under the column nearest `spot`
pub fn render_heatmap(pnl: &PnLSeries, spot: f64) -> String {
    let mut out = String::new();

    let rows = [
        ("Price", &pnl.stock_prices),
        ("Call", &pnl.pnl_call),
        ("Put", &pnl.pnl_put),
    ];
    for (label, row) in rows {
        out.push_str(&format!("{:<lw$}", label, lw = LABEL_WIDTH));
        for value in row {
            out.push_str(&format!("{:>cw$.2}", value, cw = CELL_WIDTH));
        }
        out.push('\n');
    }

    if let Some(idx) = pnl.nearest_index(spot) {
        let column_end = LABEL_WIDTH + (idx + 1) * CELL_WIDTH;
        let spot_label = format!("S: {:.2}", spot);
        out.push_str(&format!("{:>w$}\n", "^", w = column_end));
        out.push_str(&format!("{:>w$}\n", spot_label, w = column_end));
    }

    out
}

/// Full text dashboard
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&render_prices(snapshot));
    out.push_str("\n\n");

    out.push_str("Greeks\n");
    out.push_str(&render_greeks(&snapshot.greeks));
    out.push('\n');

    out.push_str(&format!(
        "Profit and Loss ($), premium {:.2}, scale ±{:.2}\n",
        snapshot.premium, snapshot.heatmap_bound
    ));
    out.push_str(&render_heatmap(&snapshot.pnl, snapshot.spot_marker));

    out
}
