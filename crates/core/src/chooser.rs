//! Player chooser - "who do I start?"
//!
//! Pulls two player names out of a free-text utterance and recommends one.
//! Two selection policies exist; the host picks one through configuration.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ChooserError;
use crate::rankings::PlayerRankings;

const SEPARATORS: [&str; 2] = [" or ", " and "];

/// How the chooser decides between two parsed names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Compare static ranks; the better (smaller) rank starts
    #[default]
    Ranked,
    /// Uniform coin flip between the two names
    Random,
}

/// Split an utterance into its two player names
///
/// Splits on the first `" or "`, falling back to the first `" and "`. Both
/// sides are trimmed; anything after a second separator is dropped.
pub fn split_players(utterance: &str) -> Result<(String, String), ChooserError> {
    let no_separator = || ChooserError::NoSeparatorFound(utterance.to_string());

    let separator = SEPARATORS
        .into_iter()
        .find(|sep| utterance.contains(sep))
        .ok_or_else(no_separator)?;

    let mut parts = utterance.split(separator);
    let first = parts.next().unwrap_or_default().trim();
    let second = parts.next().unwrap_or_default().trim();

    if first.is_empty() || second.is_empty() {
        return Err(no_separator());
    }

    Ok((first.to_string(), second.to_string()))
}

/// Picks which of two players to start
#[derive(Debug, Clone)]
pub struct PlayerChooser {
    rankings: Arc<PlayerRankings>,
    policy: SelectionPolicy,
}

impl PlayerChooser {
    pub fn new(rankings: Arc<PlayerRankings>, policy: SelectionPolicy) -> Self {
        Self { rankings, policy }
    }

    /// Recommend one of the two players named in `utterance`
    ///
    /// `rng` is only consulted under [`SelectionPolicy::Random`].
    pub fn choose<R: Rng + ?Sized>(
        &self,
        utterance: &str,
        rng: &mut R,
    ) -> Result<String, ChooserError> {
        let (first, second) = split_players(utterance)?;

        match self.policy {
            SelectionPolicy::Ranked => self.choose_ranked(first, second),
            SelectionPolicy::Random => {
                if rng.gen_bool(0.5) {
                    Ok(first)
                } else {
                    Ok(second)
                }
            }
        }
    }

    fn choose_ranked(&self, first: String, second: String) -> Result<String, ChooserError> {
        let Some((pool, first_rank, second_rank)) = self.rankings.shared_pool(&first, &second)
        else {
            return Err(ChooserError::PlayerNotFound { first, second });
        };

        tracing::debug!(
            pool = %pool,
            first = %first,
            first_rank,
            second = %second,
            second_rank,
            "Comparing ranked players"
        );

        // Ties go to the first name
        if first_rank > second_rank {
            Ok(second)
        } else {
            Ok(first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn ranked() -> PlayerChooser {
        PlayerChooser::new(Arc::new(PlayerRankings::builtin()), SelectionPolicy::Ranked)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_split_on_or() {
        let (a, b) = split_players("Todd Gurley or Kareem Hunt").unwrap();
        assert_eq!(a, "Todd Gurley");
        assert_eq!(b, "Kareem Hunt");
    }

    #[test]
    fn test_split_trims_both_sides() {
        let (a, b) = split_players("  Aaron Rodgers   or  Kirk Cousins ").unwrap();
        assert_eq!(a, "Aaron Rodgers");
        assert_eq!(b, "Kirk Cousins");
    }

    #[test]
    fn test_split_falls_back_to_and() {
        let (a, b) = split_players("Saquon Barkley and Rashaad Penny").unwrap();
        assert_eq!(a, "Saquon Barkley");
        assert_eq!(b, "Rashaad Penny");
    }

    #[test]
    fn test_or_wins_over_and() {
        let (a, b) = split_players("Hunt and Barkley or Gurley").unwrap();
        assert_eq!(a, "Hunt and Barkley");
        assert_eq!(b, "Gurley");
    }

    #[test]
    fn test_split_keeps_first_two_operands() {
        let (a, b) = split_players("A or B or C").unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("A", "B"));
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(
            split_players("just a sentence"),
            Err(ChooserError::NoSeparatorFound("just a sentence".to_string()))
        );
        // "or" inside a word is not a separator
        assert!(split_players("Gordon").is_err());
    }

    #[test]
    fn test_split_with_empty_side() {
        assert!(split_players(" or Kareem Hunt").is_err());
        assert!(split_players("Kareem Hunt or  ").is_err());
    }

    #[test]
    fn test_ranked_better_rank_starts() {
        let chooser = ranked();
        assert_eq!(
            chooser.choose("Todd Gurley or Kareem Hunt", &mut rng()).unwrap(),
            "Todd Gurley"
        );
        assert_eq!(
            chooser.choose("Rashaad Penny or Saquon Barkley", &mut rng()).unwrap(),
            "Saquon Barkley"
        );
    }

    #[test]
    fn test_ranked_falls_through_to_quarterbacks() {
        let chooser = ranked();
        assert_eq!(
            chooser.choose("Nathan Peterman and Patrick Mahomes", &mut rng()).unwrap(),
            "Patrick Mahomes"
        );
    }

    #[test]
    fn test_ranked_tie_goes_to_first() {
        let flex: HashMap<String, u32> =
            [("Alpha".to_string(), 5), ("Beta".to_string(), 5)].into_iter().collect();
        let rankings = PlayerRankings::new(flex, HashMap::new()).unwrap();
        let chooser = PlayerChooser::new(Arc::new(rankings), SelectionPolicy::Ranked);

        assert_eq!(chooser.choose("Beta or Alpha", &mut rng()).unwrap(), "Beta");
        assert_eq!(chooser.choose("Alpha or Beta", &mut rng()).unwrap(), "Alpha");
    }

    #[test]
    fn test_ranked_unknown_player() {
        let err = ranked()
            .choose("Patrick Mahomes or Unknown Guy", &mut rng())
            .unwrap_err();
        assert_eq!(
            err,
            ChooserError::PlayerNotFound {
                first: "Patrick Mahomes".to_string(),
                second: "Unknown Guy".to_string(),
            }
        );
    }

    #[test]
    fn test_ranked_pools_do_not_mix() {
        let err = ranked()
            .choose("Todd Gurley or Patrick Mahomes", &mut rng())
            .unwrap_err();
        assert!(matches!(err, ChooserError::PlayerNotFound { .. }));
    }

    #[test]
    fn test_ranked_is_deterministic() {
        let chooser = ranked();
        let mut rng = rng();
        let first = chooser.choose("Kirk Cousins or Aaron Rodgers", &mut rng);
        for _ in 0..20 {
            assert_eq!(chooser.choose("Kirk Cousins or Aaron Rodgers", &mut rng), first);
        }
        assert_eq!(first.unwrap(), "Aaron Rodgers");
    }

    #[test]
    fn test_random_picks_one_of_the_two() {
        let chooser = PlayerChooser::new(Arc::new(PlayerRankings::builtin()), SelectionPolicy::Random);
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let pick = chooser.choose("Unknown Guy or Other Guy", &mut rng).unwrap();
            assert!(pick == "Unknown Guy" || pick == "Other Guy");
            seen.insert(pick);
        }
        // Not deterministic: both names come up
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_random_still_needs_separator() {
        let chooser = PlayerChooser::new(Arc::new(PlayerRankings::builtin()), SelectionPolicy::Random);
        assert!(matches!(
            chooser.choose("Todd Gurley", &mut rng()),
            Err(ChooserError::NoSeparatorFound(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_split_recovers_both_names(
            first in "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}",
            second in "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}",
            pad in " {0,3}",
            sep in prop::sample::select(vec![" or ", " and "]),
        ) {
            let utterance = format!("{pad}{first}{sep}{second}{pad}");
            let (a, b) = split_players(&utterance).unwrap();
            prop_assert_eq!(a, first);
            prop_assert_eq!(b, second);
        }
    }
}
