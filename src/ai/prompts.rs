//! Prompt templates for the itinerary chain.
//!
//! Each step of the chain gets its own function so the wording can be tuned
//! in one place. Templates that build on earlier replies take that text as an
//! argument and embed it verbatim, fallback text included.

/// Delimiter the location extraction prompt asks the model to use.
pub const LOCATION_DELIMITER: char = '|';

pub fn overview_prompt(context: &str) -> String {
    format!(
        "Generate a high-level travel plan for {context} \
         Keep this budget in mind for all recommendations. \
         Include a brief summary and a list of key attractions."
    )
}

pub fn daily_itinerary_prompt(context: &str, high_level_plan: &str) -> String {
    format!(
        "Based on this high-level plan, create a detailed day-by-day itinerary for {context} \
         IMPORTANT: For each day, you must start the line with a bold heading like \
         '**Day 1: [Theme of the Day]**'. Follow this format strictly for every day. \
         High-level plan: {high_level_plan}"
    )
}

pub fn dining_prompt(daily_itinerary: &str) -> String {
    format!(
        "Based on this itinerary, recommend budget-friendly dining options \
         (breakfast, lunch, dinner) near the locations mentioned: {daily_itinerary}"
    )
}

pub fn packing_list_prompt(context: &str, daily_itinerary: &str) -> String {
    format!(
        "Create a concise packing list for {context} \
         Group items by category and account for the planned activities. \
         Itinerary: {daily_itinerary}"
    )
}

pub fn fun_fact_prompt(city: &str) -> String {
    format!("Share one surprising and little-known fun fact about {city} in two sentences or fewer.")
}

pub fn location_extraction_prompt(daily_itinerary: &str, dining_recommendations: &str) -> String {
    format!(
        "From the following itinerary, extract only the key place names (attractions, restaurants) \
         and list them separated by '{LOCATION_DELIMITER}'. Do not add any other text or explanation. \
         Itinerary: {daily_itinerary} and {dining_recommendations}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_prompts_embed_previous_text() {
        assert!(daily_itinerary_prompt("ctx.", "PLAN").ends_with("High-level plan: PLAN"));
        assert!(dining_prompt("DAYS").ends_with("DAYS"));
        assert!(packing_list_prompt("ctx.", "DAYS").contains("Itinerary: DAYS"));
        assert!(location_extraction_prompt("DAYS", "FOOD").ends_with("DAYS and FOOD"));
    }

    #[test]
    fn location_prompt_names_delimiter() {
        assert!(location_extraction_prompt("a", "b").contains("separated by '|'"));
    }
}
