//! Shared text returned by the service.
//!
//! Keep user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

/// Substituted for any itinerary section the model failed to produce.
pub const GENERATION_FALLBACK: &str =
    "Sorry, I couldn't process your request at the moment. Please try again later.";

pub const TRAVEL_TIPS: &[&str] = &[
    "Keep digital and paper copies of your passport and bookings.",
    "Notify your bank before travelling to avoid blocked cards.",
    "Pack a reusable water bottle; many airports have refill stations.",
    "Learn a few greetings in the local language before you arrive.",
    "Carry a small amount of local cash for markets and taxis.",
    "Book popular attractions online in advance to skip the queues.",
    "Download offline maps in case mobile data is unavailable.",
    "Leave a copy of your itinerary with someone at home.",
];

pub const RATE_LIMITED: &str = "rate_limited";
pub const INVALID_FORM: &str = "Invalid form submission";
