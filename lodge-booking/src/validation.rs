//! Checks a raw booking request before it reaches the reservation desk.
//!
//! Every problem is collected so the caller can show all of them at once.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use lodge_catalog::Room;
use lodge_shared::Masked;
use crate::models::BookingDraft;

/// Booking form input as submitted by a guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Masked<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

fn default_guests() -> u32 {
    1
}

/// Date rules applied to every request
#[derive(Debug, Clone, Copy)]
pub struct StayPolicy {
    pub today: NaiveDate,
    pub min_stay_nights: u32,
    pub allow_past_check_in: bool,
}

impl StayPolicy {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            today,
            min_stay_nights: 1,
            allow_past_check_in: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Booking request has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn is_valid_email(email: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));
    RE.is_match(email)
}

impl BookingRequest {
    /// Validate the request against `room` and `policy`, producing a draft
    /// ready for the reservation desk.
    pub fn validate(&self, room: &Room, policy: &StayPolicy) -> Result<BookingDraft, ValidationErrors> {
        let mut errors = Vec::new();
        let mut fail = |field: &'static str, message: String| errors.push(FieldError { field, message });

        if self.guest_name.trim().is_empty() {
            fail("guest_name", "Name is required".to_string());
        }

        let email = self.email.expose().trim();
        if email.is_empty() {
            fail("email", "Email is required".to_string());
        } else if !is_valid_email(email) {
            fail("email", "Email is invalid".to_string());
        }

        if self.phone.expose().trim().is_empty() {
            fail("phone", "Phone number is required".to_string());
        }

        if self.guests == 0 || self.guests > room.capacity {
            fail(
                "guests",
                format!("{} sleeps between 1 and {} guests", room.name, room.capacity),
            );
        }

        let dates = match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_in, check_out)),
            _ => {
                fail("check_in", "Please select check-in and check-out dates".to_string());
                None
            }
        };

        if let Some((check_in, check_out)) = dates {
            if !policy.allow_past_check_in && check_in < policy.today {
                fail("check_in", "Check-in date cannot be in the past".to_string());
            }
            if check_out <= check_in {
                fail("check_out", "Check-out date must be after check-in date".to_string());
            } else {
                let nights = (check_out - check_in).num_days();
                if nights < i64::from(policy.min_stay_nights) {
                    let plural = if policy.min_stay_nights > 1 { "s" } else { "" };
                    fail(
                        "check_out",
                        format!("Minimum stay is {} night{}", policy.min_stay_nights, plural),
                    );
                }
            }
        }

        match dates {
            Some((check_in, check_out)) if errors.is_empty() => Ok(BookingDraft {
                room_id: room.id.clone(),
                guest_name: self.guest_name.trim().to_string(),
                email: Masked(email.to_string()),
                phone: Masked(self.phone.expose().trim().to_string()),
                check_in,
                check_out,
                guests: self.guests,
            }),
            _ => Err(ValidationErrors { errors }),
        }
    }
}
