use crate::error::AppError;
use crate::models::manifest::ManifestStatus;
use crate::models::shipment::ShipmentStatus;

impl ShipmentStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Cancelled)
    }

    /// The happy path is linear: Pending -> InTransit -> Arrived ->
    /// Delivered. Cancellation is reachable from any non-terminal state.
    pub fn can_transition_to(self, next: ShipmentStatus) -> bool {
        use ShipmentStatus::*;

        match (self, next) {
            (Pending, InTransit) | (InTransit, Arrived) | (Arrived, Delivered) => true,
            (Pending | InTransit | Arrived, Cancelled) => true,
            _ => false,
        }
    }
}

impl ManifestStatus {
    pub fn can_transition_to(self, next: ManifestStatus) -> bool {
        use ManifestStatus::*;

        matches!((self, next), (Pending, InTransit) | (InTransit, Completed))
    }
}

/// Reject an illegal shipment status change before anything is mutated.
pub fn validate_shipment_transition(
    from: ShipmentStatus,
    to: ShipmentStatus,
) -> Result<(), AppError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
    }
}

pub fn validate_manifest_transition(
    from: ManifestStatus,
    to: ManifestStatus,
) -> Result<(), AppError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_manifest_transition, validate_shipment_transition};
    use crate::error::AppError;
    use crate::models::manifest::ManifestStatus;
    use crate::models::shipment::ShipmentStatus;

    const ALL: [ShipmentStatus; 5] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Arrived,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
    ];

    #[test]
    fn happy_path_is_accepted() {
        assert!(validate_shipment_transition(ShipmentStatus::Pending, ShipmentStatus::InTransit).is_ok());
        assert!(validate_shipment_transition(ShipmentStatus::InTransit, ShipmentStatus::Arrived).is_ok());
        assert!(validate_shipment_transition(ShipmentStatus::Arrived, ShipmentStatus::Delivered).is_ok());
    }

    #[test]
    fn cancellation_is_reachable_from_every_non_terminal_state() {
        for status in [
            ShipmentStatus::Pending,
            ShipmentStatus::InTransit,
            ShipmentStatus::Arrived,
        ] {
            assert!(validate_shipment_transition(status, ShipmentStatus::Cancelled).is_ok());
        }
    }

    #[test]
    fn terminal_states_reject_every_transition() {
        for terminal in [ShipmentStatus::Delivered, ShipmentStatus::Cancelled] {
            for target in ALL {
                let result = validate_shipment_transition(terminal, target);
                assert!(
                    matches!(result, Err(AppError::InvalidTransition { .. })),
                    "{terminal:?} -> {target:?} should be rejected"
                );
            }
        }
    }

    #[test]
    fn backward_transitions_are_rejected() {
        assert!(validate_shipment_transition(ShipmentStatus::InTransit, ShipmentStatus::Pending).is_err());
        assert!(validate_shipment_transition(ShipmentStatus::Arrived, ShipmentStatus::InTransit).is_err());
        assert!(validate_shipment_transition(ShipmentStatus::Delivered, ShipmentStatus::Pending).is_err());
    }

    #[test]
    fn skipping_states_is_rejected() {
        assert!(validate_shipment_transition(ShipmentStatus::Pending, ShipmentStatus::Arrived).is_err());
        assert!(validate_shipment_transition(ShipmentStatus::Pending, ShipmentStatus::Delivered).is_err());
        assert!(validate_shipment_transition(ShipmentStatus::InTransit, ShipmentStatus::Delivered).is_err());
    }

    #[test]
    fn manifest_lifecycle_is_linear() {
        assert!(validate_manifest_transition(ManifestStatus::Pending, ManifestStatus::InTransit).is_ok());
        assert!(validate_manifest_transition(ManifestStatus::InTransit, ManifestStatus::Completed).is_ok());

        assert!(validate_manifest_transition(ManifestStatus::Pending, ManifestStatus::Completed).is_err());
        assert!(validate_manifest_transition(ManifestStatus::Completed, ManifestStatus::InTransit).is_err());
        assert!(validate_manifest_transition(ManifestStatus::Completed, ManifestStatus::Pending).is_err());
    }
}
