// src/systems/stock_system.rs
//! Stock pile handling: dealing one card to the discard pile, and recycling
//! the discard pile back into an empty stock.

use log::{debug, info};

use crate::components::board::Board;
use crate::components::card::Card;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::logic::rules::stock_waste;

/// What a recycle did: how many cards went back to the stock, and which
/// card (the bottom of the old discard pile) was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillReport {
    pub returned: usize,
    pub dropped: Option<Entity>,
}

/// Moves the top stock card onto the discard pile, face up.
/// Returns the dealt card, or `None` when the stock is empty.
pub fn deal_one_card_from_stock(
    world: &mut World,
    board: &mut Board,
) -> Result<Option<Entity>, EngineError> {
    let (stock, discard) = board.stock_and_discard_mut();
    if !stock_waste::can_deal_from_stock(stock.is_empty()) {
        debug!("Stock is empty. Nothing to deal.");
        return Ok(None);
    }
    let Some(top) = stock.top_card() else {
        return Ok(None);
    };

    stock.remove_card(world, top);
    discard.add_card(world, top);
    let card = world
        .get_component_mut::<Card>(top)
        .ok_or(EngineError::MissingCard(top))?;
    if !card.is_face_up {
        card.flip();
    }
    info!("Placed {} to the waste.", card);
    Ok(Some(top))
}

/// Turns the discard pile back into the stock.
///
/// Only allowed when the stock is empty and the discard pile is not. Cards
/// are taken from the top of the discard pile down to (but not including)
/// the bottom one, flipped face down and appended to the stock in that
/// order. The bottom discard card is dropped from play: it ends up in no
/// pile at all, and the returned report names it.
pub fn refill_stock_from_discard(
    world: &mut World,
    board: &mut Board,
) -> Result<Option<RefillReport>, EngineError> {
    let (stock, discard) = board.stock_and_discard_mut();
    if !stock_waste::can_refill_stock_from_discard(stock.is_empty(), discard.is_empty()) {
        debug!("Refill skipped (stock not empty, or discard empty).");
        return Ok(None);
    }

    let discarded = discard.clear(world);
    let dropped = discarded.first().copied();
    for &entity in discarded.iter().skip(1).rev() {
        let card = world
            .get_component_mut::<Card>(entity)
            .ok_or(EngineError::MissingCard(entity))?;
        if card.is_face_up {
            card.flip();
        }
        stock.add_card(world, entity);
    }

    info!("Stock refilled from discard pile.");
    Ok(Some(RefillReport {
        returned: stock.num_of_cards(),
        dropped,
    }))
}
