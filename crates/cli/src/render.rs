//! Text rendering for the derived view models.

use armory_browse::{BrowseSession, BrowseView, CompareView, SortDirection, SortKey};
use armory_browse::view::format_price;

const CHECK: &str = "✓";
const CROSS: &str = "✗";

/// Render the whole display: controls summary, results table, note cards,
/// and (when open) the comparison drawer.
pub fn render(session: &BrowseSession, view: &BrowseView) -> String {
    let mut out = String::new();
    out.push_str(&render_controls(session));
    out.push('\n');
    out.push_str(&render_table(session, view));
    out.push_str(&render_notes(view));
    if let Some(compare) = &view.compare {
        out.push('\n');
        out.push_str(&render_compare(compare));
    }
    out
}

/// One-line summary of the active controls.
pub fn render_controls(session: &BrowseSession) -> String {
    let criteria = session.criteria();
    let mut parts: Vec<String> = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(format!("query \"{}\"", criteria.query));
    }
    if !criteria.calibers.is_empty() {
        parts.push(format!("calibers [{}]", criteria.calibers.join(", ")));
    }
    if !criteria.types.is_empty() {
        parts.push(format!("types [{}]", criteria.types.join(", ")));
    }
    if criteria.optics_only {
        parts.push("optics-ready only".to_string());
    }
    if criteria.comped_only {
        parts.push("compensated only".to_string());
    }
    parts.push(match criteria.max_price {
        0 => "max price: no limit".to_string(),
        cap => format!("max price: {}", format_price(Some(cap))),
    });

    let spec = session.sort_spec();
    let arrow = match spec.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };
    parts.push(format!("sort: {} {}", spec.key.label(), arrow));

    parts.join(" | ")
}

/// The results table, one row per surviving item.
pub fn render_table(session: &BrowseSession, view: &BrowseView) -> String {
    let mut headers: Vec<String> = SortKey::all()
        .iter()
        .map(|key| {
            if *key == session.sort_spec().key {
                format!("{}*", key.label())
            } else {
                key.label().to_string()
            }
        })
        .collect();
    headers.push("Compare".to_string());

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            vec![
                row.brand.clone(),
                row.model.clone(),
                row.kind.clone(),
                row.caliber.clone(),
                row.barrel.clone(),
                row.capacity.clone(),
                row.weight_oz.clone(),
                glyph(row.comped).to_string(),
                glyph(row.optics_ready).to_string(),
                row.msrp.clone(),
                if row.selected {
                    format!("[{}] {}", CHECK, row.id)
                } else {
                    format!("[ ] {}", row.id)
                },
            ]
        })
        .collect();

    layout(&headers, &rows)
}

/// Note cards: heading plus free text, in table order.
pub fn render_notes(view: &BrowseView) -> String {
    let mut out = String::new();
    for card in &view.notes {
        out.push('\n');
        out.push_str(&card.heading);
        out.push('\n');
        out.push_str("  ");
        out.push_str(&card.notes);
        out.push('\n');
    }
    out
}

/// The comparison drawer.
pub fn render_compare(compare: &CompareView) -> String {
    let headers: Vec<String> = [
        "Model",
        "Type",
        "Caliber",
        "Barrel (in)",
        "Capacity",
        "Weight (oz)",
        "Comp",
        "Optics",
        "MSRP",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows: Vec<Vec<String>> = compare
        .rows
        .iter()
        .map(|row| {
            vec![
                row.model.clone(),
                row.kind.clone(),
                row.caliber.clone(),
                row.barrel.clone(),
                row.capacity.clone(),
                row.weight_oz.clone(),
                glyph(row.comped).to_string(),
                glyph(row.optics_ready).to_string(),
                row.msrp.clone(),
            ]
        })
        .collect();

    format!(
        "Compare ({}/{})\n{}",
        compare.count,
        compare.cap,
        layout(&headers, &rows)
    )
}

fn glyph(on: bool) -> &'static str {
    if on { CHECK } else { CROSS }
}

// Column widths sized to the widest cell, two spaces between columns.
fn layout(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    let rule_len: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        out.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.chars().count()) + 2;
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_browse::ControlEvent;
    use armory_catalog::Catalog;
    use armory_core::ItemSlug;

    fn session() -> BrowseSession {
        BrowseSession::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn table_lists_every_row_under_a_header() {
        let session = session();
        let rendered = render_table(&session, &session.view());
        let lines: Vec<&str> = rendered.lines().collect();
        // Header, rule, six rows.
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("MSRP*"));
        assert!(lines[2].contains("Glock"));
    }

    #[test]
    fn controls_line_reflects_active_state() {
        let mut session = session();
        session.apply(ControlEvent::QueryChanged("staccato".to_string()));
        session.apply(ControlEvent::MaxPriceChanged(3000));
        let line = render_controls(&session);
        assert!(line.contains("query \"staccato\""));
        assert!(line.contains("max price: $3,000"));
        assert!(line.contains("sort: MSRP ↑"));
    }

    #[test]
    fn drawer_renders_count_over_cap() {
        let mut session = session();
        session.apply(ControlEvent::CompareToggled(ItemSlug::from("cz-shadow2")));
        let view = session.view();
        let rendered = render_compare(view.compare.as_ref().unwrap());
        assert!(rendered.starts_with("Compare (1/4)"));
        assert!(rendered.contains("CZ Shadow 2 Optics-Ready"));
    }

    #[test]
    fn full_render_omits_the_drawer_when_selection_is_empty() {
        let session = session();
        let rendered = render(&session, &session.view());
        assert!(!rendered.contains("Compare ("));
    }
}
