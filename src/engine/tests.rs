// src/engine/tests.rs

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::components::card::{Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::logic::deck::DECK_SIZE;

fn seeded(seed: u64) -> GameEngine {
    GameEngine::new(&GameConfig::with_seed(seed))
}

fn find(engine: &GameEngine, suit: Suit, rank: Rank) -> Entity {
    engine
        .card_entities()
        .into_iter()
        .find(|&e| {
            let card = engine.card(e).unwrap();
            card.suit == suit && card.rank == rank
        })
        .unwrap()
}

/// 全部の山を空にして、全カードを裏向きに戻す。
fn clear_table(engine: &mut GameEngine) {
    engine.board.clear_all(&mut engine.world);
    for e in engine.card_entities() {
        let card = engine.world.get_component_mut::<Card>(e).unwrap();
        if card.is_face_up {
            card.flip();
        }
    }
}

fn place(engine: &mut GameEngine, stack: StackType, suit: Suit, rank: Rank, face_up: bool) -> Entity {
    let e = find(engine, suit, rank);
    engine.board.pile_mut(stack).unwrap().add_card(&mut engine.world, e);
    let card = engine.world.get_component_mut::<Card>(e).unwrap();
    if card.is_face_up != face_up {
        card.flip();
    }
    e
}

fn is_face_up(engine: &GameEngine, e: Entity) -> bool {
    engine.card(e).unwrap().is_face_up
}

fn assert_fresh_deal(engine: &GameEngine) {
    let board = engine.board();
    let sizes: Vec<usize> = board.tableaus().iter().map(|p| p.num_of_cards()).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(board.stock().num_of_cards(), 24);
    assert!(board.discard().is_empty());
    assert!(board.foundations().iter().all(|p| p.is_empty()));
    assert_eq!(board.total_cards(), DECK_SIZE);

    for pile in board.tableaus() {
        let (top, rest) = pile.cards().split_last().unwrap();
        assert!(is_face_up(engine, *top));
        assert!(rest.iter().all(|&e| !is_face_up(engine, e)));
    }
    assert!(board.stock().cards().iter().all(|&e| !is_face_up(engine, e)));

    let distinct: HashSet<(Suit, Rank)> = engine
        .card_entities()
        .into_iter()
        .map(|e| {
            let card = engine.card(e).unwrap();
            (card.suit, card.rank)
        })
        .collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    // 逆参照と山の中身が一致してる
    for pile in board.piles() {
        for (index, &e) in pile.cards().iter().enumerate() {
            let info = engine.world().get_component::<StackInfo>(e).unwrap();
            assert_eq!(info.stack_type, pile.stack_type());
            assert_eq!(info.position_in_stack, index);
        }
    }
}

#[test]
fn new_game_is_dealt_klondike_style() {
    let engine = seeded(7);
    assert_fresh_deal(&engine);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(!engine.is_game_won());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn deal_invariants_hold_for_any_seed(seed in any::<u64>()) {
        assert_fresh_deal(&seeded(seed));
    }
}

#[test]
fn same_seed_gives_same_game() {
    assert_eq!(seeded(123).snapshot(), seeded(123).snapshot());
}

#[test]
fn clicking_stock_top_deals_face_up() {
    let mut engine = seeded(1);
    let stock: Vec<Entity> = engine.board().stock().cards().to_vec();
    let top = *stock.last().unwrap();

    assert_eq!(engine.card_clicked(stock[0]).unwrap(), ClickOutcome::Ignored);
    assert_eq!(engine.card_clicked(top).unwrap(), ClickOutcome::Dealt(top));

    assert_eq!(engine.board().discard().cards(), &[top]);
    assert!(is_face_up(&engine, top));
    assert!(engine.is_draggable(top).unwrap());
    assert_eq!(engine.board().stock().num_of_cards(), 23);
}

#[test]
fn clicking_face_down_tableau_top_flips_it() {
    let mut engine = seeded(2);
    let top = engine.board().tableaus()[3].top_card().unwrap();
    let below = engine.board().tableaus()[3].cards()[0];
    engine.world.get_component_mut::<Card>(top).unwrap().flip();

    assert_eq!(engine.card_clicked(below).unwrap(), ClickOutcome::Ignored);
    assert_eq!(engine.card_clicked(top).unwrap(), ClickOutcome::Flipped(top));
    assert!(is_face_up(&engine, top));
    // 表向きのカードをクリックしても裏には戻らない
    assert_eq!(engine.card_clicked(top).unwrap(), ClickOutcome::Ignored);
    assert!(is_face_up(&engine, top));
    assert_eq!(engine.board().tableaus()[3].num_of_cards(), 4);
}

#[test]
fn stock_cycle_refill_drops_bottom_discard_card() {
    let mut engine = seeded(3);
    let stock: Vec<Entity> = engine.board().stock().cards().to_vec();

    for _ in 0..24 {
        assert!(matches!(engine.stock_clicked().unwrap(), ClickOutcome::Dealt(_)));
    }
    assert!(engine.board().stock().is_empty());
    let bottom = engine.board().discard().cards()[0];
    assert_eq!(bottom, stock[23]);

    let outcome = engine.stock_clicked().unwrap();
    assert_eq!(
        outcome,
        ClickOutcome::Refilled(RefillReport { returned: 23, dropped: Some(bottom) })
    );
    assert!(engine.board().discard().is_empty());
    assert_eq!(engine.board().stock().cards(), &stock[..23]);
    assert!(engine.board().stock().cards().iter().all(|&e| !is_face_up(&engine, e)));
    assert_eq!(engine.board().total_cards(), DECK_SIZE - 1);

    // 落ちた 1 枚は、もう触れない
    assert_eq!(engine.card_clicked(bottom).unwrap(), ClickOutcome::Ignored);
    assert!(!engine.is_draggable(bottom).unwrap());
    assert_eq!(engine.begin_drag(bottom).unwrap(), None);
    let snapshot = engine.snapshot();
    let gone = snapshot.card(bottom.0).unwrap();
    assert_eq!(gone.stack_type, None);
    assert_eq!(gone.position_in_stack, None);

    assert_eq!(engine.stock_clicked().unwrap(), ClickOutcome::Dealt(stock[22]));
}

#[test]
fn stock_click_with_nothing_left_is_ignored() {
    let mut engine = seeded(4);
    let (stock, discard) = engine.board.stock_and_discard_mut();
    stock.clear(&mut engine.world);
    discard.clear(&mut engine.world);

    assert_eq!(engine.stock_clicked().unwrap(), ClickOutcome::Ignored);
    assert_eq!(engine.refill_stock_from_discard().unwrap(), None);
}

#[test]
fn inert_drags() {
    let mut engine = seeded(5);
    let face_down = engine.board().tableaus()[6].cards()[0];
    let stock_top = engine.board().stock().top_card().unwrap();

    assert_eq!(engine.begin_drag(face_down).unwrap(), None);
    assert_eq!(engine.begin_drag(stock_top).unwrap(), None);

    engine.stock_clicked().unwrap();
    engine.stock_clicked().unwrap();
    let discard: Vec<Entity> = engine.board().discard().cards().to_vec();
    assert_eq!(engine.begin_drag(discard[0]).unwrap(), None);
    assert_eq!(engine.begin_drag(discard[1]).unwrap(), Some(vec![discard[1]]));
    assert!(engine.drag_session().is_some());
}

#[test]
fn release_without_drag_is_cancelled() {
    let mut engine = seeded(6);
    assert_eq!(
        engine.release_drag(&[StackType::Tableau(0)]).unwrap(),
        MoveOutcome::Cancelled
    );
}

#[test]
fn run_move_carries_cards_above_and_flips_nothing() {
    let mut engine = seeded(8);
    clear_table(&mut engine);
    let king = place(&mut engine, StackType::Tableau(0), Suit::Spade, Rank::King, false);
    let nine = place(&mut engine, StackType::Tableau(0), Suit::Heart, Rank::Nine, true);
    let eight = place(&mut engine, StackType::Tableau(0), Suit::Club, Rank::Eight, true);
    let ten = place(&mut engine, StackType::Tableau(1), Suit::Club, Rank::Ten, true);

    assert_eq!(engine.begin_drag(nine).unwrap(), Some(vec![nine, eight]));
    let outcome = engine.release_drag(&[StackType::Tableau(1)]).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            cards: vec![nine, eight],
            from: StackType::Tableau(0),
            to: StackType::Tableau(1),
        }
    );
    assert_eq!(engine.board().tableaus()[1].cards(), &[ten, nine, eight]);
    assert_eq!(engine.board().tableaus()[0].cards(), &[king]);
    assert!(!is_face_up(&engine, king));
    assert!(is_face_up(&engine, nine) && is_face_up(&engine, eight));
    assert!(engine.drag_session().is_none());
}

#[test]
fn illegal_release_changes_nothing() {
    let mut engine = seeded(9);
    clear_table(&mut engine);
    let seven = place(&mut engine, StackType::Tableau(0), Suit::Heart, Rank::Seven, true);
    place(&mut engine, StackType::Tableau(1), Suit::Diamond, Rank::Eight, true);
    let before = engine.snapshot();

    let outcome = engine.drop_card(seven, &[StackType::Tableau(1), StackType::Foundation(0)]).unwrap();

    assert_eq!(outcome, MoveOutcome::Cancelled);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn tableau_candidate_wins_over_foundation() {
    let mut engine = seeded(10);
    clear_table(&mut engine);
    let ace = place(&mut engine, StackType::Discard, Suit::Heart, Rank::Ace, true);
    place(&mut engine, StackType::Tableau(2), Suit::Spade, Rank::Two, true);

    let outcome = engine
        .drop_card(ace, &[StackType::Foundation(0), StackType::Tableau(2)])
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved { cards: vec![ace], from: StackType::Discard, to: StackType::Tableau(2) }
    );
    assert!(engine.board().foundations()[0].is_empty());
}

#[test]
fn origin_pile_is_never_a_destination() {
    let mut engine = seeded(11);
    clear_table(&mut engine);
    let king = place(&mut engine, StackType::Tableau(0), Suit::Diamond, Rank::King, true);

    assert_eq!(engine.drop_card(king, &[StackType::Tableau(0)]).unwrap(), MoveOutcome::Cancelled);
    assert_eq!(
        engine.drop_card(king, &[StackType::Tableau(0), StackType::Tableau(4)]).unwrap(),
        MoveOutcome::Moved { cards: vec![king], from: StackType::Tableau(0), to: StackType::Tableau(4) }
    );
}

#[test]
fn only_foundation_top_can_be_dragged() {
    let mut engine = seeded(12);
    clear_table(&mut engine);
    let ace = place(&mut engine, StackType::Foundation(1), Suit::Club, Rank::Ace, true);
    let two = place(&mut engine, StackType::Foundation(1), Suit::Club, Rank::Two, true);
    place(&mut engine, StackType::Tableau(5), Suit::Heart, Rank::Three, true);

    assert_eq!(engine.begin_drag(ace).unwrap(), None);
    assert_eq!(engine.begin_drag(two).unwrap(), Some(vec![two]));
    assert!(engine.release_drag(&[StackType::Tableau(5)]).unwrap().is_moved());
    assert_eq!(engine.board().foundations()[1].cards(), &[ace]);
}

#[test]
fn completing_the_foundations_wins() {
    let mut engine = seeded(13);
    clear_table(&mut engine);
    let mut last = None;
    for (i, suit) in ALL_SUITS.iter().enumerate() {
        for rank in ALL_RANKS {
            if *suit == Suit::Club && rank == Rank::King {
                last = Some(place(&mut engine, StackType::Discard, *suit, rank, true));
            } else {
                place(&mut engine, StackType::Foundation(i as u8), *suit, rank, true);
            }
        }
    }
    let king = last.unwrap();
    let clubs = ALL_SUITS.iter().position(|s| *s == Suit::Club).unwrap() as u8;
    assert!(!engine.is_game_won());

    let outcome = engine.drop_card(king, &[StackType::Foundation(clubs)]).unwrap();

    assert!(outcome.is_moved());
    assert!(engine.is_game_won());
    assert!(engine.snapshot().won);
}

#[test]
fn moving_a_card_off_a_full_foundation_clears_the_win() {
    let mut engine = seeded(18);
    clear_table(&mut engine);
    let mut king = None;
    for (i, suit) in ALL_SUITS.iter().enumerate() {
        for rank in ALL_RANKS {
            let e = place(&mut engine, StackType::Foundation(i as u8), *suit, rank, true);
            if *suit == Suit::Club && rank == Rank::King {
                king = Some(e);
            }
        }
    }
    let king = king.unwrap();
    engine.win_system.run(&mut engine.world, &mut engine.board);
    assert!(engine.is_game_won());

    let outcome = engine.drop_card(king, &[StackType::Tableau(0)]).unwrap();

    assert!(outcome.is_moved());
    let sizes: Vec<usize> = engine.board().foundations().iter().map(|p| p.num_of_cards()).collect();
    assert_eq!(sizes.iter().sum::<usize>(), DECK_SIZE - 1);
    assert!(!engine.is_game_won());
    assert!(!engine.snapshot().won);
}

#[test]
fn restart_reuses_cards_and_redeals() {
    let mut engine = seeded(14);
    let ids = engine.card_entities();
    engine.stock_clicked().unwrap();
    engine.stock_clicked().unwrap();
    let discard_top = engine.board().discard().top_card().unwrap();
    engine.begin_drag(discard_top).unwrap();

    engine.restart();

    assert_eq!(engine.card_entities(), ids);
    assert_eq!(engine.world().entity_count(), DECK_SIZE + 1);
    assert!(engine.drag_session().is_none());
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_fresh_deal(&engine);
}

#[test]
fn restart_after_win_plays_again() {
    let mut engine = seeded(15);
    if let Some(state) = engine.world.get_component_mut::<GameState>(engine.game_entity) {
        state.status = GameStatus::Won;
    }
    engine.restart();
    assert!(!engine.is_game_won());
}

#[test]
fn snapshot_reports_draggable_cards() {
    let engine = seeded(16);
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.cards.len(), DECK_SIZE);
    assert_eq!(snapshot.piles.len(), 13);
    for pile in engine.board().tableaus() {
        let top = pile.top_card().unwrap();
        assert!(snapshot.card(top.0).unwrap().draggable);
    }
    let stock_top = engine.board().stock().top_card().unwrap();
    assert!(!snapshot.card(stock_top.0).unwrap().draggable);

    let tableau = snapshot.pile(StackType::Tableau(6)).unwrap();
    assert_eq!(tableau.cards.len(), 7);
    assert_eq!(tableau.layout_gap, crate::config::layout::TABLEAU_GAP);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"draggable\":true"));
    assert!(json.contains("\"won\":false"));
}

#[test]
fn restart_recovers_dropped_and_cleared_cards() {
    let mut engine = seeded(17);
    for _ in 0..25 {
        engine.stock_clicked().unwrap();
    }
    assert_eq!(engine.board().total_cards(), DECK_SIZE - 1);
    engine.restart();
    assert_fresh_deal(&engine);

    clear_table(&mut engine);
    assert_eq!(engine.board().total_cards(), 0);
    engine.restart();
    assert_fresh_deal(&engine);
}

#[test]
fn snapshot_marks_inconsistent_card_not_draggable() {
    let mut engine = seeded(19);
    let top = engine.board().tableaus()[2].top_card().unwrap();
    // 逆参照を壊す: 山には 3 枚しかないのに 5 番目と言い張る
    engine.world.add_component(top, StackInfo::new(StackType::Tableau(2), 5));
    assert!(matches!(engine.is_draggable(top), Err(EngineError::PileMismatch { .. })));

    let snapshot = engine.snapshot();
    let card = snapshot.card(top.0).unwrap();
    assert!(!card.draggable);
    assert_eq!(card.position_in_stack, Some(5));
}
