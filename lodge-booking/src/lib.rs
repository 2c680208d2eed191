pub mod models;
pub mod availability;
pub mod quote;
pub mod validation;

pub use models::{Booking, BookingDraft, BookingStatus, InvalidStayDates, StayDates};
pub use availability::{first_conflict, is_available};
pub use quote::StayQuote;
pub use validation::{BookingRequest, FieldError, StayPolicy, ValidationErrors};
