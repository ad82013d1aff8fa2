//! Deck, hand generator, shuffle, and options tests.

use std::collections::{HashMap, HashSet};

use memrs::{
    Card, CardId, DECK_SIZE, DealError, Deck, Game, GameOptions, OptionsError, Suit, draw_hand,
    shuffle,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn deck_holds_every_card_once() {
    let deck = Deck::new();
    let cards: HashSet<Card> = deck.iter().map(|(_, card)| card).collect();

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(deck.drawn_count(), 0);
    assert_eq!(deck.undrawn_count(), DECK_SIZE);
    assert_eq!(deck.get(CardId::new(0)), Some(Card::new(Suit::Hearts, 1)));
    assert_eq!(deck.get(CardId::new(51)), Some(Card::new(Suit::Clubs, 13)));
    assert_eq!(deck.get(CardId::new(52)), None);
    assert!(deck.iter().all(|(_, card)| (1..=13).contains(&card.number)));
}

#[test]
fn draw_hand_marks_exactly_the_dealt_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let hand = draw_hand(&mut deck, 9, &mut rng).unwrap();

    assert_eq!(hand.len(), 9);
    let dealt: HashSet<CardId> = hand.iter().map(|card| card.id).collect();
    assert_eq!(dealt.len(), 9);
    assert_eq!(deck.drawn_count(), 9);
    for (id, card) in deck.iter() {
        assert_eq!(deck.is_drawn(id), dealt.contains(&id));
        if let Some(dealt_card) = hand.iter().find(|hand_card| hand_card.id == id) {
            assert_eq!(dealt_card.card(), card);
            assert!(!dealt_card.picked);
        }
    }
}

#[test]
fn draw_hand_only_uses_undrawn_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let first: HashSet<CardId> = draw_hand(&mut deck, 20, &mut rng)
        .unwrap()
        .iter()
        .map(|card| card.id)
        .collect();
    let second = draw_hand(&mut deck, 32, &mut rng).unwrap();

    assert_eq!(second.len(), 32);
    assert!(second.iter().all(|card| !first.contains(&card.id)));
    assert_eq!(deck.undrawn_count(), 0);
}

#[test]
fn draw_hand_reports_insufficient_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    draw_hand(&mut deck, 50, &mut rng).unwrap();

    assert_eq!(
        draw_hand(&mut deck, 3, &mut rng).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(deck.drawn_count(), 50);

    assert_eq!(draw_hand(&mut deck, 2, &mut rng).unwrap().len(), 2);
    assert!(draw_hand(&mut deck, 0, &mut rng).unwrap().is_empty());
}

#[test]
fn deck_reset_clears_drawn_flags() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    draw_hand(&mut deck, 52, &mut rng).unwrap();

    deck.reset();

    assert_eq!(deck.drawn_count(), 0);
    assert_eq!(deck.undrawn_ids().len(), DECK_SIZE);
}

#[test]
fn shuffle_keeps_elements() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut values: Vec<u32> = (0..20).collect();

    shuffle(&mut values[..], &mut rng);

    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());

    let mut empty: [u8; 0] = [];
    shuffle(&mut empty, &mut rng);
    let mut single = [7];
    shuffle(&mut single, &mut rng);
    assert_eq!(single, [7]);
}

#[test]
fn shuffle_is_close_to_uniform() {
    const SAMPLES: usize = 60_000;
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

    for _ in 0..SAMPLES {
        let mut values = [0, 1, 2];
        shuffle(&mut values, &mut rng);
        *counts.entry(values).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    let expected = SAMPLES / 6;
    for (permutation, count) in counts {
        assert!(
            count.abs_diff(expected) < 600,
            "{permutation:?} appeared {count} times"
        );
    }
}

#[test]
fn suit_rendering() {
    assert_eq!(Suit::Hearts.symbol(), '♥');
    assert_eq!(Suit::Clubs.symbol(), '♣');
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Spades.is_red());
    assert_eq!(Card::new(Suit::Spades, 12).to_string(), "12♠");
}

#[test]
fn options_validation() {
    assert_eq!(GameOptions::default().validate(), Ok(()));
    assert_eq!(GameOptions::default().cards_per_round(), 18);

    assert_eq!(
        GameOptions::default().with_hand_sizes(0, 6, 9).validate(),
        Err(OptionsError::ZeroHandSize)
    );
    assert_eq!(
        GameOptions::default().with_milestones(9, 3, 18).validate(),
        Err(OptionsError::MilestonesOutOfOrder)
    );
    assert_eq!(
        GameOptions::default().with_winning_score(9).validate(),
        Err(OptionsError::MilestonesOutOfOrder)
    );
    assert_eq!(
        GameOptions::default().with_hand_sizes(20, 20, 20).validate(),
        Err(OptionsError::NotEnoughCards {
            required: 60,
            available: DECK_SIZE
        })
    );

    assert_eq!(
        GameOptions::default().with_winning_score(20).validate(),
        Err(OptionsError::HandTooSmall {
            hand_size: 9,
            points: 11
        })
    );
    assert_eq!(
        GameOptions::default().with_hand_sizes(2, 6, 9).validate(),
        Err(OptionsError::HandTooSmall {
            hand_size: 2,
            points: 3
        })
    );
    assert_eq!(
        GameOptions::default().with_milestones(3, 12, 18).validate(),
        Err(OptionsError::HandTooSmall {
            hand_size: 6,
            points: 9
        })
    );
    assert_eq!(GameOptions::default().with_winning_score(16).validate(), Ok(()));

    assert_eq!(
        Game::new(GameOptions::default().with_hand_sizes(0, 1, 1), 1).unwrap_err(),
        OptionsError::ZeroHandSize
    );
}

#[test]
fn every_valid_option_set_can_be_won() {
    let option_sets = [
        GameOptions::default(),
        GameOptions::default().with_winning_score(16),
        GameOptions::default()
            .with_hand_sizes(4, 8, 12)
            .with_milestones(4, 12, 24),
        GameOptions::default()
            .with_hand_sizes(2, 3, 4)
            .with_milestones(2, 5, 8),
    ];

    for options in option_sets {
        assert_eq!(options.validate(), Ok(()));
        let mut game = Game::new(options, 7).unwrap();
        while game.can_play() {
            let id = game
                .hand()
                .iter()
                .find(|card| !card.picked)
                .map(|card| card.id)
                .expect("a winnable hand always has an unpicked card");
            game.pick_card(id).unwrap();
        }
        assert_eq!(game.phase(), memrs::Phase::GameWon, "{options:?}");
        assert_eq!(game.score().current, options.winning_score);
    }
}
