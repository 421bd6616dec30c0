//! Read-only views: the dashboard overview and the public landing payload.

use serde::Serialize;

use super::hero::{HeroCard, HeroSection};

/// Row counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub hero_cards: i64,
    pub statistics: i64,
    pub objectives: i64,
    pub photobio_cards: i64,
}

/// Public landing content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landing {
    pub hero: HeroSection,
    pub cards: Vec<HeroCard>,
    pub site_title: String,
    pub site_description: String,
}
