//! Deck construction properties across difficulties.

use tui_pairs::core::{build_deck, select_count, ConfigError, SimpleRng};
use tui_pairs::types::{Difficulty, ImageRef};

fn images(n: u32) -> Vec<ImageRef> {
    (0..n).map(ImageRef).collect()
}

#[test]
fn deck_length_is_twice_the_selected_count() {
    let imgs = images(5);
    for difficulty in Difficulty::ALL {
        let count = select_count(difficulty, imgs.len()).unwrap();
        let deck = build_deck(&imgs, count, &mut SimpleRng::new(9)).unwrap();
        assert_eq!(deck.len(), 2 * difficulty.card_count());
    }
}

#[test]
fn every_chosen_image_appears_exactly_twice() {
    // images = [A,B,C,D,E], easy => deck built from [A,B,C] doubled.
    let imgs = images(5);
    let deck = build_deck(&imgs, 3, &mut SimpleRng::new(31)).unwrap();

    for (i, img) in imgs.iter().enumerate() {
        let n = deck.iter().filter(|c| c.image == *img).count();
        assert_eq!(n, if i < 3 { 2 } else { 0 }, "image {i}");
    }
}

#[test]
fn shuffle_is_a_bijection_over_the_doubled_multiset() {
    let imgs = images(5);
    let deck = build_deck(&imgs, 5, &mut SimpleRng::new(12345)).unwrap();

    let mut got: Vec<u32> = deck.iter().map(|c| c.image.0).collect();
    got.sort_unstable();
    assert_eq!(got, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn source_takes_a_prefix_not_a_random_subset() {
    let imgs = images(10);
    let deck = build_deck(&imgs, 4, &mut SimpleRng::new(7)).unwrap();
    assert!(deck.iter().all(|c| c.image.0 < 4));
}

#[test]
fn different_seeds_usually_give_different_orders() {
    let imgs = images(5);
    let a = build_deck(&imgs, 5, &mut SimpleRng::new(1)).unwrap();
    let b = build_deck(&imgs, 5, &mut SimpleRng::new(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn validation_runs_before_any_deck_is_built() {
    let err = select_count(Difficulty::Medium, 3).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotEnoughImages {
            difficulty: Difficulty::Medium,
            needed: 4,
            available: 3,
        }
    );
}
