use tokio::sync::Mutex;

/// Round-robin over a fixed tip list, shared by all requests.
#[derive(Debug)]
pub struct TipRotation {
    tips: &'static [&'static str],
    next: Mutex<usize>,
}

impl TipRotation {
    pub fn new(tips: &'static [&'static str]) -> Self {
        Self {
            tips,
            next: Mutex::new(0),
        }
    }

    /// Return the current tip and advance, wrapping after the last entry.
    /// Returns `None` only for an empty list.
    pub async fn next_tip(&self) -> Option<&'static str> {
        if self.tips.is_empty() {
            return None;
        }
        let mut next = self.next.lock().await;
        let tip = self.tips[*next];
        *next = (*next + 1) % self.tips.len();
        tracing::trace!(index = *next, "advanced tip rotation");
        Some(tip)
    }
}

impl Default for TipRotation {
    fn default() -> Self {
        Self::new(crate::messages::TRAVEL_TIPS)
    }
}
