use crate::model::{PrecautionRequired, TransportMode};
use serde::Deserialize;

///
/// Ticket fields sent by requester.
/// Presence of the fields is validated by the service,
/// so missing ones deserialize to their defaults.
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    pub patient_name: String,
    pub origin_location: String,
    pub destination_location: String,
    pub bed_label: String,
    pub transport_mode: Option<TransportMode>,
    pub precaution_required: PrecautionRequired,
    pub precaution_type: Option<String>,
    pub notes: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_json_deserialize_ok() {
        let json = r#"{
            "patientName": "Maria Santos",
            "originLocation": "uti",
            "destinationLocation": "centro-cirurgico",
            "bedLabel": "15A",
            "transportMode": "maca",
            "precautionRequired": "sim",
            "precautionType": "Isolamento por contato"
        }"#;

        let ticket = serde_json::from_str::<Ticket>(json).unwrap();

        assert_eq!(ticket.patient_name, "Maria Santos");
        assert_eq!(ticket.transport_mode, Some(TransportMode::Stretcher));
        assert_eq!(ticket.precaution_required, PrecautionRequired::Yes);
        assert_eq!(
            ticket.precaution_type.as_deref(),
            Some("Isolamento por contato")
        );
        assert_eq!(ticket.notes, "");
    }

    #[test]
    fn ticket_json_missing_fields_default() {
        let ticket = serde_json::from_str::<Ticket>("{}").unwrap();

        assert_eq!(ticket.patient_name, "");
        assert_eq!(ticket.transport_mode, None);
        assert_eq!(ticket.precaution_required, PrecautionRequired::No);
    }

    #[test]
    fn ticket_json_unknown_transport_mode() {
        let json = r#"{ "transportMode": "helicoptero" }"#;

        let result = serde_json::from_str::<Ticket>(json);

        assert!(result.is_err());
    }
}
