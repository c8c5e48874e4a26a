//! The itinerary prompt chain.
//!
//! A trip is planned by six sequential generation calls. The day-by-day plan
//! builds on the overview, dining, packing and place extraction build on the
//! day plan, and the extracted places become a directions link.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::{prompts, TextGenerator};
use crate::locations::{maps_link, parse_locations};
use crate::messages::GENERATION_FALLBACK;
use crate::trip::TripRequest;

/// Everything returned to the client for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub high_level_plan: String,
    pub daily_itinerary: String,
    pub dining_recommendations: String,
    pub packing_list: String,
    pub fun_fact: String,
    pub maps_link: String,
}

/// Summary of the trip shared by every prompt that needs it.
pub fn build_context(trip: &TripRequest) -> String {
    let mut context = format!(
        "a {}-day trip to {} for {}",
        trip.days,
        trip.city,
        trip.travelers_description()
    );
    if let Some(date) = trip.travel_date {
        context.push_str(&format!(" starting on {}", date.format("%Y-%m-%d")));
    }
    context.push_str(&format!(
        ". The budget is approximately {} {} (which is about ${} USD).",
        trip.budget,
        trip.currency,
        trip.budget_usd()
    ));
    if let Some(notes) = &trip.notes {
        context.push_str(&format!(" Traveler notes: {notes}."));
    }
    context
}

/// Ask the generator for one section, substituting the fallback on failure.
async fn generate_section(generator: &dyn TextGenerator, section: &str, prompt: &str) -> String {
    generate_or_none(generator, section, prompt)
        .await
        .unwrap_or_else(|| GENERATION_FALLBACK.to_string())
}

async fn generate_or_none(
    generator: &dyn TextGenerator,
    section: &str,
    prompt: &str,
) -> Option<String> {
    match generator.generate(prompt).await {
        Ok(text) => {
            debug!(section, chars = text.chars().count(), "generated section");
            Some(text)
        }
        Err(err) => {
            warn!(section, error = %err, "Generation failed, using fallback");
            None
        }
    }
}

/// Run the whole chain for `trip`.
///
/// Never fails: each section that cannot be generated holds the fallback
/// text, and later prompts embed whatever text the earlier steps produced.
#[instrument(level = "debug", skip_all, fields(city = %trip.city, days = trip.days))]
pub async fn generate_itinerary(
    generator: &dyn TextGenerator,
    trip: &TripRequest,
) -> GeneratedItinerary {
    info!(
        budget = trip.budget,
        currency = %trip.currency,
        budget_usd = trip.budget_usd(),
        "Planning itinerary"
    );
    let context = build_context(trip);

    let high_level_plan = generate_section(
        generator,
        "high_level_plan",
        &prompts::overview_prompt(&context),
    )
    .await;

    let daily_itinerary = generate_section(
        generator,
        "daily_itinerary",
        &prompts::daily_itinerary_prompt(&context, &high_level_plan),
    )
    .await;

    let dining_recommendations = generate_section(
        generator,
        "dining_recommendations",
        &prompts::dining_prompt(&daily_itinerary),
    )
    .await;

    let packing_list = generate_section(
        generator,
        "packing_list",
        &prompts::packing_list_prompt(&context, &daily_itinerary),
    )
    .await;

    let fun_fact =
        generate_section(generator, "fun_fact", &prompts::fun_fact_prompt(&trip.city)).await;

    // A failed extraction yields no places rather than a link to the apology.
    let locations = generate_or_none(
        generator,
        "locations",
        &prompts::location_extraction_prompt(&daily_itinerary, &dining_recommendations),
    )
    .await
    .map(|text| parse_locations(&text))
    .unwrap_or_default();
    debug!(count = locations.len(), "extracted locations");

    GeneratedItinerary {
        high_level_plan,
        daily_itinerary,
        dining_recommendations,
        packing_list,
        fun_fact,
        maps_link: maps_link(&trip.city, &locations),
    }
}
