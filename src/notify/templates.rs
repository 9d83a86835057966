use crate::models::client::Client;
use crate::models::notification::NotifyEvent;
use crate::models::shipment::Shipment;

/// Render the message body for an event. Templates are plain string
/// interpolation over shipment and recipient fields; any conditional logic
/// belongs to the caller choosing the event.
pub fn render(event: &NotifyEvent, shipment: &Shipment, recipient: &Client) -> String {
    let tracking = &shipment.tracking_no;
    let name = &recipient.full_name;

    match event {
        NotifyEvent::Created => format!(
            "Hello {name}, shipment {tracking} has been registered. \
             Use your tracking number to follow it."
        ),
        NotifyEvent::InTransit => format!("Hello {name}, shipment {tracking} is on its way."),
        NotifyEvent::Delivered => format!(
            "Hello {name}, shipment {tracking} has been delivered. Thank you."
        ),
        NotifyEvent::Failed => format!(
            "Hello {name}, shipment {tracking} could not be completed. \
             Please contact your branch."
        ),
        NotifyEvent::Delayed => format!(
            "Hello {name}, shipment {tracking} is running late. \
             We apologize for the delay."
        ),
        NotifyEvent::Custom(message) => format!("Update for shipment {tracking}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::render;
    use crate::models::client::Client;
    use crate::models::notification::NotifyEvent;
    use crate::models::shipment::{Shipment, ShipmentStatus};

    fn fixtures() -> (Shipment, Client) {
        let now = Utc::now();
        let shipment = Shipment {
            id: Uuid::from_u128(1),
            tracking_no: "TRK7Q2M".to_string(),
            status: ShipmentStatus::Pending,
            sender_id: Uuid::from_u128(2),
            receiver_id: Uuid::from_u128(3),
            origin_id: Uuid::from_u128(4),
            dest_id: Uuid::from_u128(5),
            package_type_id: Uuid::from_u128(6),
            quantity: 1,
            total_weight: None,
            total_volume: None,
            total_cost: 500.0,
            created_at: now,
            updated_at: now,
        };
        let client = Client {
            id: Uuid::from_u128(3),
            phone_number: "+22670000003".to_string(),
            full_name: "Fatou Diallo".to_string(),
            is_verified: true,
            created_at: now,
        };
        (shipment, client)
    }

    #[test]
    fn every_template_mentions_the_tracking_number() {
        let (shipment, client) = fixtures();
        let events = [
            NotifyEvent::Created,
            NotifyEvent::InTransit,
            NotifyEvent::Delivered,
            NotifyEvent::Failed,
            NotifyEvent::Delayed,
            NotifyEvent::Custom("held at customs".to_string()),
        ];

        for event in &events {
            let body = render(event, &shipment, &client);
            assert!(body.contains("TRK7Q2M"), "{event:?} missing tracking number");
        }
    }

    #[test]
    fn custom_event_carries_the_operator_message() {
        let (shipment, client) = fixtures();
        let body = render(
            &NotifyEvent::Custom("held at customs".to_string()),
            &shipment,
            &client,
        );
        assert!(body.contains("held at customs"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (shipment, client) = fixtures();
        let a = render(&NotifyEvent::Created, &shipment, &client);
        let b = render(&NotifyEvent::Created, &shipment, &client);
        assert_eq!(a, b);
    }
}
