use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use super::errors::AppointmentError;
use super::value_objects::AppointmentStatus;

/// A showroom visit request submitted through the booking form.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub model_interest: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentProps {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub model_interest: Option<String>,
    pub notes: Option<String>,
}

impl Appointment {
    /// Validates and normalizes a booking: fields are trimmed, the email
    /// lowercased, blank optionals dropped. New bookings start pending.
    pub fn new(props: NewAppointmentProps) -> Result<Self, AppointmentError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(AppointmentError::NameEmpty);
        }

        let email = props.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppointmentError::EmailInvalid);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone: clean_optional(props.phone),
            visit_date: props.visit_date,
            visit_time: props.visit_time,
            model_interest: clean_optional(props.model_interest),
            notes: clean_optional(props.notes),
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewAppointmentProps {
        NewAppointmentProps {
            name: "  Jordan Rivers  ".to_string(),
            email: "  Jordan.Rivers@Example.COM ".to_string(),
            phone: Some(" 555-0130 ".to_string()),
            visit_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            visit_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            model_interest: Some("Cascade 6".to_string()),
            notes: Some("   ".to_string()),
        }
    }

    #[test]
    fn should_create_pending_appointment() {
        let appointment = Appointment::new(props()).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.name, "Jordan Rivers");
    }

    #[test]
    fn should_trim_and_lowercase_email() {
        let appointment = Appointment::new(props()).unwrap();

        assert_eq!(appointment.email, "jordan.rivers@example.com");
    }

    #[test]
    fn should_drop_blank_optionals_and_trim_the_rest() {
        let appointment = Appointment::new(props()).unwrap();

        assert_eq!(appointment.phone.as_deref(), Some("555-0130"));
        assert_eq!(appointment.notes, None);
    }

    #[test]
    fn should_reject_blank_name() {
        let mut invalid = props();
        invalid.name = "   ".to_string();

        assert!(matches!(
            Appointment::new(invalid),
            Err(AppointmentError::NameEmpty)
        ));
    }

    #[test]
    fn should_reject_malformed_email() {
        let mut invalid = props();
        invalid.email = "not-an-email".to_string();

        assert!(matches!(
            Appointment::new(invalid),
            Err(AppointmentError::EmailInvalid)
        ));
    }

    #[test]
    fn should_reject_empty_email() {
        let mut invalid = props();
        invalid.email = "  ".to_string();

        assert!(matches!(
            Appointment::new(invalid),
            Err(AppointmentError::EmailInvalid)
        ));
    }
}
