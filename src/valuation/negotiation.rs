//! Offer evaluation: the accept/reject protocol.
//!
//! Single round, single comparison. The player turns their valuation into
//! an asking price (personality-shaped), the threshold shifts with
//! competing offers, and the offer is accepted iff it clears the
//! threshold.

use serde::Serialize;

use super::types::{PlayerProfile, TeamContext};
use crate::cli::types::RolePromise;

/// Greed can inflate the asking price by up to this fraction.
const GREED_PREMIUM: f64 = 0.30;
/// Loyalty can discount the incumbent program by up to this fraction.
const LOYALTY_DISCOUNT: f64 = 0.15;
/// Ego inflates the ask by up to this fraction when the role disappoints.
const EGO_PREMIUM: f64 = 0.10;
/// Each competing offer raises the threshold by this fraction.
const COMPETING_STEP: f64 = 0.05;
/// Competing offers beyond this many stop raising the threshold.
const MAX_COMPETING_OFFERS: u8 = 4;

/// Terms of a single NIL offer.
#[derive(Debug, Clone, Copy)]
pub struct OfferTerms {
    /// Dollars on the table.
    pub amount: u64,
    /// Role promised alongside the money.
    pub role: RolePromise,
    /// Competing offers the player currently holds.
    pub competing_offers: u8,
}

/// Result of evaluating one offer.
#[derive(Debug, Clone, Serialize)]
pub struct OfferOutcome {
    pub player: String,
    pub accepted: bool,
    /// The player's asking price in dollars.
    pub asking_price: u64,
    /// Amount the offer had to clear.
    pub threshold: u64,
    /// Offer minus threshold (negative = shortfall).
    pub margin: i64,
    /// Present on rejection: the amount that would have been accepted,
    /// rounded up to the nearest $1,000.
    pub counter: Option<u64>,
    pub reasoning: String,
}

/// The role a player believes their rating earns.
pub fn expected_role(player: &PlayerProfile) -> RolePromise {
    if player.overall >= 80 {
        RolePromise::Starter
    } else if player.overall >= 60 {
        RolePromise::Rotation
    } else {
        RolePromise::Bench
    }
}

/// Evaluate an offer against a player's valuation.
///
/// `valuation` is the dollar figure from [`crate::valuation::nil::evaluate`].
/// A zero offer is always rejected.
pub fn evaluate_offer(
    player: &PlayerProfile,
    team: &TeamContext,
    valuation: u64,
    offer: &OfferTerms,
) -> OfferOutcome {
    let personality = &player.personality;
    let incumbent = player.team_id == Some(team.team_id);
    let wants = expected_role(player);
    let role_shortfall = offer.role.rank() < wants.rank();

    let mut asking = valuation as f64 * (1.0 + GREED_PREMIUM * personality.greed);
    if incumbent {
        asking *= 1.0 - LOYALTY_DISCOUNT * personality.loyalty;
    }
    if role_shortfall {
        asking *= 1.0 + EGO_PREMIUM * personality.ego;
    }

    let competing = offer.competing_offers.min(MAX_COMPETING_OFFERS);
    let threshold = asking * (1.0 + COMPETING_STEP * competing as f64);

    let asking_price = asking.round() as u64;
    let threshold_dollars = threshold.round() as u64;
    let accepted = offer.amount > 0 && offer.amount >= threshold_dollars;
    let margin = offer.amount as i64 - threshold_dollars as i64;

    let reasoning = if accepted {
        format!(
            "Offer of ${} clears the ${} threshold (asking ${}, {} competing offer{})",
            offer.amount,
            threshold_dollars,
            asking_price,
            competing,
            if competing == 1 { "" } else { "s" },
        )
    } else if role_shortfall {
        format!(
            "Rejected: ${} short of the ${} threshold, and a {} role is beneath a player expecting {}",
            margin.unsigned_abs(),
            threshold_dollars,
            offer.role,
            wants,
        )
    } else {
        format!(
            "Rejected: ${} short of the ${} threshold",
            margin.unsigned_abs(),
            threshold_dollars,
        )
    };

    OfferOutcome {
        player: player.name.clone(),
        accepted,
        asking_price,
        threshold: threshold_dollars,
        margin,
        counter: if accepted {
            None
        } else {
            Some(round_up_thousand(threshold_dollars))
        },
        reasoning,
    }
}

/// Round up to the nearest $1,000.
fn round_up_thousand(dollars: u64) -> u64 {
    dollars.div_ceil(1000) * 1000
}
