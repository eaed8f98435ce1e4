//! Server-rendered dashboard page.

use std::fmt::Write;

use super::ScanRequest;
use crate::domain::{format_usd, Opportunity};

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:72rem;padding:0 1rem}\
form{display:flex;gap:.5rem;flex-wrap:wrap;margin-bottom:1.5rem}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #ddd;padding:.4rem .6rem;text-align:left}\
.profit{color:#0a7d32;font-weight:600}";

/// Render the dashboard.
///
/// `results` is `None` when no scan was requested.
pub fn render(request: &ScanRequest, results: Option<&[Opportunity]>) -> String {
    let mut html = String::new();
    let event = escape_html(request.event.as_deref().unwrap_or(""));
    let state = request
        .region
        .as_ref()
        .map(|r| escape_html(r.as_str()))
        .unwrap_or_default();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>TicketFinder</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>TicketFinder</h1>\n<p>Cross-marketplace ticket arbitrage scanner</p>\n\
         <form method=\"get\" action=\"/\">\n\
         <input name=\"event\" placeholder=\"Event (e.g. Taylor Swift)\" value=\"{event}\" required>\n\
         <input name=\"state\" placeholder=\"State\" maxlength=\"2\" value=\"{state}\">\n\
         <input name=\"min_profit\" type=\"number\" step=\"0.01\" min=\"0\" value=\"{}\">\n\
         <input name=\"min_roi\" type=\"number\" step=\"0.01\" min=\"0\" value=\"{}\">\n\
         <button type=\"submit\">Scan</button>\n</form>\n",
        request.min_profit, request.min_roi
    );

    if let Some(opportunities) = results {
        render_results(&mut html, &event, opportunities);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_results(html: &mut String, event: &str, opportunities: &[Opportunity]) {
    if opportunities.is_empty() {
        let _ = writeln!(html, "<p>No opportunities found for <strong>{event}</strong>.</p>");
        return;
    }

    let _ = writeln!(
        html,
        "<h2>Found {} opportunity(s) for {event}</h2>\n<table>\n<thead><tr>\
         <th>Event</th><th>Location</th><th>Seats</th><th>Qty</th>\
         <th>Buy</th><th>Sell</th><th>Profit</th><th>ROI</th></tr></thead>\n<tbody>",
        opportunities.len()
    );

    for opp in opportunities {
        let roi = opp.roi() * rust_decimal::Decimal::ONE_HUNDRED;
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}, {}</td><td>Sec {} Row {}</td><td>{}</td>\
             <td>{} @ {}</td><td>{} @ {}</td><td class=\"profit\">{}</td><td>{:.2}%</td></tr>",
            escape_html(opp.event_name()),
            escape_html(opp.city()),
            escape_html(opp.region()),
            escape_html(opp.section()),
            escape_html(opp.row()),
            opp.quantity(),
            escape_html(opp.buy_source().as_str()),
            format_usd(opp.buy_price()),
            escape_html(opp.sell_source().as_str()),
            format_usd(opp.sell_price()),
            format_usd(opp.estimated_profit()),
            roi,
        );
    }

    html.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_opportunities;
    use crate::testkit::{config, domain::listing};
    use rust_decimal_macros::dec;

    fn request(event: Option<&str>) -> ScanRequest {
        ScanRequest {
            event: event.map(str::to_string),
            region: None,
            min_profit: dec!(15),
            min_roi: dec!(0.08),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn form_only_without_results() {
        let html = render(&request(None), None);

        assert!(html.contains("<title>TicketFinder</title>"));
        assert!(html.contains("value=\"15\""));
        assert!(!html.contains("No opportunities found"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn empty_results_message_escapes_event() {
        let html = render(&request(Some("<script>")), Some(&[][..]));

        assert!(html.contains("No opportunities found"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn renders_result_rows() {
        let listings = vec![listing("ticketmaster", dec!(80)), listing("stubhub", dec!(135))];
        let opps = find_opportunities(&listings, &config::permissive());
        let html = render(&request(Some("Test Event")), Some(opps.as_slice()));

        assert!(html.contains("Found 1 opportunity(s)"));
        assert!(html.contains("ticketmaster @ $80.00"));
        assert!(html.contains("$67.00"));
        assert!(html.contains("38.07%"));
    }
}
