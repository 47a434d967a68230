//! Built-in price list
//!
//! The studio's directions, package tiers, timelines, add-ons and display
//! currencies. Every table is non-empty and every direction has packages.

use crate::models::{Addon, Currency, DayRange, Direction, Package, PriceRange, Timeline};

pub(super) fn currencies() -> Vec<Currency> {
    vec![
        Currency::new("USD", "$", 1.0),
        Currency::new("EUR", "€", 1.08),
        Currency::new("CZK", "Kč", 0.044),
    ]
}

pub(super) fn directions() -> Vec<Direction> {
    vec![
        Direction::new("logo", "Logo", 4, PriceRange::new(350, 5250), 2800),
        Direction::new("logo-guide", "Logo & guide", 3, PriceRange::new(1750, 7350), 4200),
        Direction::new("guidelines", "Guidelines", 3, PriceRange::new(700, 3150), 1900),
        Direction::new("brand-book", "Brand book", 3, PriceRange::new(3850, 12250), 7000),
        Direction::new("ui-kit", "UI kit", 3, PriceRange::new(700, 4900), 2600),
        Direction::new("web-design", "Web design", 4, PriceRange::new(1750, 14700), 4200),
        Direction::new("presentation", "Presentation", 1, PriceRange::new(360, 3600), 950),
        Direction::new("social", "Social media", 1, PriceRange::new(525, 4200), 1200),
    ]
}

/// Essential / Standard / Pro tiers; Standard is the popular one
fn tiers(
    essential: (i64, u32, u32),
    standard: (i64, u32, u32),
    pro: (i64, u32, u32),
) -> Vec<Package> {
    vec![
        Package::new(
            "essential",
            "Essential",
            essential.0,
            DayRange::new(essential.1, essential.2),
        ),
        Package::new(
            "standard",
            "Standard",
            standard.0,
            DayRange::new(standard.1, standard.2),
        )
        .popular(),
        Package::new("pro", "Pro", pro.0, DayRange::new(pro.1, pro.2)),
    ]
}

pub(super) fn packages() -> Vec<(&'static str, Vec<Package>)> {
    vec![
        ("logo", tiers((350, 3, 5), (2800, 7, 12), (5250, 12, 18))),
        ("logo-guide", tiers((1750, 7, 10), (4200, 10, 16), (7350, 16, 24))),
        ("guidelines", tiers((700, 4, 7), (1900, 7, 10), (3150, 10, 14))),
        ("brand-book", tiers((3850, 10, 14), (7000, 14, 21), (12250, 21, 35))),
        ("ui-kit", tiers((700, 5, 7), (2600, 7, 12), (4900, 12, 18))),
        ("web-design", tiers((1750, 7, 12), (4200, 12, 20), (14700, 25, 45))),
        ("presentation", tiers((360, 3, 5), (950, 5, 8), (3600, 8, 14))),
        ("social", tiers((525, 2, 4), (1200, 4, 7), (4200, 7, 12))),
    ]
}

pub(super) fn timelines() -> Vec<Timeline> {
    vec![
        Timeline::new("standard", "Standard timeline", 1.0, "Balanced scope and speed"),
        Timeline::new("rush", "Rush", 1.25, "Priority execution"),
        Timeline::new("flex", "Flexible", 0.95, "More flexibility on dates"),
    ]
}

pub(super) fn addons() -> Vec<Addon> {
    vec![
        Addon::new("revisions", "Extra revision round", 250),
        Addon::new("handoff", "Handoff session", 180),
        Addon::new("support", "Post-launch support", 400),
        Addon::new("assets", "Social templates pack", 220),
    ]
}
