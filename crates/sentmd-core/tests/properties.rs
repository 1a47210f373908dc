//! Property tests for the facade: score and explain must agree.

use proptest::prelude::*;
use sentmd_core::{explain_text, score_texts};
use sentmd_lexicon::{Lexicon, LexiconStore, StopwordSet};

fn arb_store() -> impl Strategy<Value = LexiconStore> {
    (
        prop::collection::vec("[a-e]{1,3}", 0..6),
        prop::collection::vec(("[a-e]{1,3}", -4.0f64..4.0), 0..10),
    )
        .prop_map(|(stops, words)| {
            let stopwords: StopwordSet = stops.into_iter().collect();
            let lexicon: Lexicon = words.into_iter().collect();
            LexiconStore::new(stopwords, lexicon)
        })
}

proptest! {
    #[test]
    fn explain_score_matches_score_texts(store in arb_store(), text in "[a-eA-E !?0-9]{0,30}") {
        let scored = score_texts(&[text.as_str()], &store).unwrap();
        let trace = explain_text(&text, &store).unwrap();
        prop_assert_eq!(scored[0].sentiment(), trace.score);
        prop_assert!((-1.0..=1.0).contains(&trace.score));
    }

    #[test]
    fn score_texts_preserves_count_and_text(
        store in arb_store(),
        texts in prop::collection::vec("[a-e ]{0,12}", 0..8),
    ) {
        let scored = score_texts(&texts, &store).unwrap();
        prop_assert_eq!(scored.len(), texts.len());
        for (s, t) in scored.iter().zip(&texts) {
            prop_assert_eq!(s.text(), t.as_str());
        }
    }
}
