//! Result table markup

use contracts::usecases::common::Cell;

use super::cell_format::cell_text;

/// Renders columns and rows as an HTML table
///
/// Every header and cell is escaped. Rows are written positionally and are not
/// checked against the column count, so a short or long row stays ragged.
pub fn render_table(columns: &[String], rows: &[Vec<Cell>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in columns {
        html.push_str("<th>");
        html.push_str(&html_escape(column));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&html_escape(&cell_text(cell)));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

/// Simple HTML escape
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
