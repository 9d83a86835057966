pub mod printer;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::shipment::ShipmentStatus;
use crate::receipt::text::TextBuilder;

/// Everything a printed receipt shows, already resolved to display values.
/// Building the view is the caller's job; rendering is a pure projection.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptView {
    pub tracking_no: String,
    pub status: ShipmentStatus,
    pub sender_name: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub origin: String,
    pub dest: String,
    pub package_type: String,
    pub quantity: u32,
    pub weight: Option<f64>,
    pub total_cost: f64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub driver_name: Option<String>,
}

pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Fixed-width plain-text receipt for thermal printers (32 or 48 columns).
/// Missing optional fields are omitted entirely, never rendered blank.
pub fn render_text(view: &ReceiptView, width: usize) -> String {
    let mut b = TextBuilder::new(width);

    b.sep_double();
    b.center("COURIER RECEIPT");
    b.sep_double();
    b.line(&format!("Tracking: {}", view.tracking_no));
    b.line_lr("Date", &format_date(view.created_at));
    b.sep_single();
    b.line(&format!("From: {}", view.sender_name));
    b.line(&format!("      {}", view.sender_phone));
    b.line(&format!("To:   {}", view.receiver_name));
    b.line(&format!("      {}", view.receiver_phone));
    b.line_lr(&view.origin, &view.dest);
    b.sep_single();
    b.line_lr("Package", &view.package_type);
    b.line_lr("Qty", &view.quantity.to_string());
    if let Some(weight) = view.weight {
        b.line_lr("Weight", &format!("{weight:.1} kg"));
    }
    b.line_lr("Status", &format!("{:?}", view.status));
    if let Some(driver) = &view.driver_name {
        b.line_lr("Driver", driver);
    }
    if let Some(delivered) = view.delivered_at {
        b.line_lr("Delivered", &format_date(delivered));
    }
    b.sep_single();
    b.line_lr("TOTAL", &format_currency(view.total_cost, &view.currency));
    b.sep_double();
    b.center("Thank you");
    b.blank();

    b.build()
}

/// Hypertext fragment for screen and PDF rendering.
pub fn render_html(view: &ReceiptView) -> String {
    let mut rows = String::new();
    let mut row = |label: &str, value: &str| {
        rows.push_str(&format!(
            "    <dt>{}</dt><dd>{}</dd>\n",
            escape(label),
            escape(value)
        ));
    };

    row("Date", &format_date(view.created_at));
    row("From", &format!("{} ({})", view.sender_name, view.sender_phone));
    row("To", &format!("{} ({})", view.receiver_name, view.receiver_phone));
    row("Route", &format!("{} to {}", view.origin, view.dest));
    row("Package", &view.package_type);
    row("Quantity", &view.quantity.to_string());
    if let Some(weight) = view.weight {
        row("Weight", &format!("{weight:.1} kg"));
    }
    row("Status", &format!("{:?}", view.status));
    if let Some(driver) = &view.driver_name {
        row("Driver", driver);
    }
    if let Some(delivered) = view.delivered_at {
        row("Delivered", &format_date(delivered));
    }
    row("Total", &format_currency(view.total_cost, &view.currency));

    format!(
        "<div class=\"receipt\">\n  <h2>Courier Receipt</h2>\n  \
         <p class=\"tracking\">{}</p>\n  <dl>\n{}  </dl>\n</div>\n",
        escape(&view.tracking_no),
        rows
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{format_currency, render_html, render_text, ReceiptView};
    use crate::models::shipment::ShipmentStatus;

    fn view() -> ReceiptView {
        ReceiptView {
            tracking_no: "TRK4X9X".to_string(),
            status: ShipmentStatus::InTransit,
            sender_name: "Aminata Sawadogo-Compaore of Ouagadougou".to_string(),
            sender_phone: "+22670000010".to_string(),
            receiver_name: "Boubacar Sangare".to_string(),
            receiver_phone: "+22370000011".to_string(),
            origin: "Ouagadougou Central".to_string(),
            dest: "Bobo-Dioulasso".to_string(),
            package_type: "Parcel by weight".to_string(),
            quantity: 2,
            weight: Some(12.5),
            total_cost: 6250.0,
            currency: "XOF".to_string(),
            created_at: Utc::now(),
            delivered_at: None,
            driver_name: None,
        }
    }

    #[test]
    fn text_receipt_round_trips_the_tracking_number() {
        for width in [32, 48] {
            let rendered = render_text(&view(), width);
            let line = rendered
                .lines()
                .find(|l| l.starts_with("Tracking: "))
                .unwrap();
            assert_eq!(line.trim_start_matches("Tracking: "), "TRK4X9X");
        }
    }

    #[test]
    fn text_receipt_respects_the_line_width() {
        for width in [32, 48] {
            let rendered = render_text(&view(), width);
            for line in rendered.lines() {
                assert!(line.chars().count() <= width, "line too wide: {line:?}");
            }
        }
    }

    #[test]
    fn over_wide_fields_are_truncated_with_an_ellipsis() {
        let rendered = render_text(&view(), 32);
        assert!(rendered.contains('…'));
    }

    #[test]
    fn missing_optional_fields_are_omitted() {
        let rendered = render_text(&view(), 48);
        assert!(!rendered.contains("Driver"));
        assert!(!rendered.contains("Delivered"));

        let mut with_driver = view();
        with_driver.driver_name = Some("Salif Ouattara".to_string());
        let rendered = render_text(&with_driver, 48);
        assert!(rendered.contains("Driver"));
    }

    #[test]
    fn html_receipt_contains_the_tracking_number_and_escapes_markup() {
        let mut v = view();
        v.receiver_name = "Acme <Trading>".to_string();
        let html = render_html(&v);
        assert!(html.contains("TRK4X9X"));
        assert!(html.contains("Acme &lt;Trading&gt;"));
        assert!(!html.contains("<Trading>"));
    }

    #[test]
    fn currency_is_rendered_with_two_decimals() {
        assert_eq!(format_currency(1500.0, "XOF"), "1500.00 XOF");
        assert_eq!(format_currency(12.345, "USD"), "12.35 USD");
    }
}
