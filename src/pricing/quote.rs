//! Quote calculation
//!
//! Turns a (direction, package, timeline, add-ons) choice into a total price
//! and a delivery window. Every id is resolved through the catalog's
//! fallbacks, so a quote can always be produced.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{AddonId, DayRange, DirectionId, Package, PackageId, Timeline, TimelineId, Usd};

/// A computed estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Resolved direction
    pub direction: DirectionId,

    /// Resolved package within the direction
    pub package: PackageId,

    /// Resolved timeline
    pub timeline: TimelineId,

    /// Add-ons as selected, including ids the catalog does not know
    pub addons: Vec<AddonId>,

    pub base_price: Usd,
    pub addons_total: Usd,
    pub multiplier: f64,

    /// `round((base_price + addons_total) * multiplier)`
    pub total: Usd,

    /// Package days divided by the multiplier, each bound rounded
    pub days: DayRange,
}

/// Compute a quote for a selection
pub fn compute_quote<'a, I>(
    catalog: &Catalog,
    direction: &DirectionId,
    package: &PackageId,
    timeline: &TimelineId,
    addons: I,
) -> Quote
where
    I: IntoIterator<Item = &'a AddonId>,
{
    let resolved_direction = catalog.direction_or_default(direction);
    let package = catalog.package_or_default(direction, package);
    let timeline = catalog.timeline_or_default(timeline);

    let addons: Vec<AddonId> = addons.into_iter().cloned().collect();
    let addons_total: Usd = addons
        .iter()
        .map(|id| catalog.addon_price_or_zero(id))
        .sum();

    let (total, days) = price(package, timeline, addons_total);

    Quote {
        direction: resolved_direction.id.clone(),
        package: package.id.clone(),
        timeline: timeline.id.clone(),
        addons,
        base_price: package.base_price,
        addons_total,
        multiplier: timeline.multiplier,
        total,
        days,
    }
}

/// Apply a timeline to a package plus add-on total
pub fn price(package: &Package, timeline: &Timeline, addons_total: Usd) -> (Usd, DayRange) {
    let total = (package.base_price + addons_total).scale(timeline.multiplier);
    let days = package.days.compress(timeline.multiplier);
    (total, days)
}
