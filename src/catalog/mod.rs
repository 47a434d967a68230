//! Read-only price catalog
//!
//! Lookups never fail. Each entity kind has a documented default that an
//! unknown id resolves to:
//!
//! | entity | default |
//! |---|---|
//! | direction | the first direction (`logo`) |
//! | packages of a direction | the first direction's packages |
//! | package | `standard`, otherwise the first package of the set |
//! | timeline | the first timeline (`standard`) |
//! | add-on | no entity; contributes a zero price |
//! | currency | the first currency (`USD`) |

mod builtin;

use std::collections::HashMap;

use crate::models::{
    Addon, AddonId, Currency, CurrencyId, Direction, DirectionId, Package, PackageId, Timeline,
    TimelineId, Usd,
};

/// Package id preferred when the selected one is missing from a direction
pub const DEFAULT_PACKAGE: &str = "standard";

/// Timeline id a fresh selection starts with
pub const DEFAULT_TIMELINE: &str = "standard";

/// How many directions the calculator's first step offers
pub const WIZARD_DIRECTION_COUNT: usize = 6;

/// Directions featured as typical starting points
const STARTING_POINTS: [&str; 3] = ["logo", "web-design", "ui-kit"];

/// The studio's price list
#[derive(Debug, Clone)]
pub struct Catalog {
    directions: Vec<Direction>,
    packages: HashMap<DirectionId, Vec<Package>>,
    timelines: Vec<Timeline>,
    addons: Vec<Addon>,
    currencies: Vec<Currency>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Load the built-in price list
    pub fn builtin() -> Self {
        let packages = builtin::packages()
            .into_iter()
            .map(|(direction, tiers)| (DirectionId::new(direction), tiers))
            .collect();

        Self {
            directions: builtin::directions(),
            packages,
            timelines: builtin::timelines(),
            addons: builtin::addons(),
            currencies: builtin::currencies(),
        }
    }

    // Directions

    /// All directions in display order
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// The directions offered on the calculator's first step
    pub fn wizard_directions(&self) -> &[Direction] {
        let count = WIZARD_DIRECTION_COUNT.min(self.directions.len());
        &self.directions[..count]
    }

    /// Directions featured with their popular price
    pub fn starting_points(&self) -> Vec<&Direction> {
        STARTING_POINTS
            .iter()
            .filter_map(|id| self.directions.iter().find(|d| d.id == *id))
            .collect()
    }

    pub fn direction(&self, id: &DirectionId) -> Option<&Direction> {
        self.directions.iter().find(|d| &d.id == id)
    }

    /// Find a direction, falling back to the first direction
    pub fn direction_or_default(&self, id: &DirectionId) -> &Direction {
        self.direction(id).unwrap_or(&self.directions[0])
    }

    // Packages

    /// Package tiers of a direction, falling back to the first direction's tiers
    pub fn packages_for(&self, direction: &DirectionId) -> &[Package] {
        self.packages
            .get(direction)
            .or_else(|| self.packages.get(&self.directions[0].id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find a package within a direction
    ///
    /// Falls back to the direction's `standard` package, then to its first
    /// package. The direction itself falls back per [`Catalog::packages_for`].
    pub fn package_or_default(&self, direction: &DirectionId, id: &PackageId) -> &Package {
        let tiers = self.packages_for(direction);
        tiers
            .iter()
            .find(|p| &p.id == id)
            .or_else(|| tiers.iter().find(|p| p.id == DEFAULT_PACKAGE))
            .unwrap_or(&tiers[0])
    }

    // Timelines

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn timeline(&self, id: &TimelineId) -> Option<&Timeline> {
        self.timelines.iter().find(|t| &t.id == id)
    }

    /// Find a timeline, falling back to the first timeline
    pub fn timeline_or_default(&self, id: &TimelineId) -> &Timeline {
        self.timeline(id).unwrap_or(&self.timelines[0])
    }

    // Add-ons

    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn addon(&self, id: &AddonId) -> Option<&Addon> {
        self.addons.iter().find(|a| &a.id == id)
    }

    /// Price of an add-on; unknown ids cost nothing
    pub fn addon_price_or_zero(&self, id: &AddonId) -> Usd {
        self.addon(id).map(|a| a.price).unwrap_or_default()
    }

    // Currencies

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn currency(&self, id: &CurrencyId) -> Option<&Currency> {
        self.currencies.iter().find(|c| &c.id == id)
    }

    /// Find a currency, falling back to USD
    pub fn currency_or_default(&self, id: &CurrencyId) -> &Currency {
        self.currency(id).unwrap_or(&self.currencies[0])
    }
}
