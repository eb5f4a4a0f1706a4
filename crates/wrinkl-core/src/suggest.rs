//! "Did you mean" suggestions for ledger ids that failed to resolve.

/// Candidates within this many edits of the target are suggested.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Levenshtein edit distance between two strings, counted in chars.
///
/// No normalization is applied; comparison is exact.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1].min(table[i][j - 1]).min(table[i - 1][j])
            };
        }
    }

    table[a.len()][b.len()]
}

/// Return the candidates that plausibly match `target`.
///
/// A candidate matches when either string contains the other, or when it is
/// within [`MAX_SUGGESTION_DISTANCE`] edits. Matches keep the order in which
/// `candidates` yields them and are not ranked by closeness. An empty result
/// means nothing matched; falling back to the full list is up to the caller.
pub fn suggest<I, S>(target: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matches: Vec<String> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if matches.iter().any(|m| m == candidate) {
            continue;
        }
        let contains = candidate.contains(target) || target.contains(candidate);
        if contains || levenshtein(candidate, target) <= MAX_SUGGESTION_DISTANCE {
            matches.push(candidate.to_string());
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("", "abcd"), 4);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let words = ["", "a", "auth", "user-auth", "user-authentication", "ÅÄÖ", "payment"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        assert_eq!(levenshtein("é", "e"), 1);
        assert_eq!(levenshtein("", "ÅÄÖ"), 3);
    }

    #[test]
    fn exact_match_is_suggested() {
        let got = suggest("login", ["signup", "login"]);
        assert_eq!(got, vec!["login"]);
    }

    #[test]
    fn substring_beats_distance() {
        let got = suggest(
            "user-auth",
            ["user-authentication", "payment-integration"],
        );
        assert_eq!(got, vec!["user-authentication"]);
    }

    #[test]
    fn target_containing_candidate_matches() {
        let got = suggest("email-notifications-v2", ["email", "billing"]);
        assert_eq!(got, vec!["email"]);
    }

    #[test]
    fn near_misses_within_three_edits() {
        let got = suggest("paymnt", ["payment", "payments-v2", "search"]);
        assert_eq!(got, vec!["payment"]);
    }

    #[test]
    fn keeps_enumeration_order() {
        let got = suggest("auth", ["oauth-login", "zzz", "auth", "authz"]);
        assert_eq!(got, vec!["oauth-login", "auth", "authz"]);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let got = suggest("auth", ["auth", "auth"]);
        assert_eq!(got, vec!["auth"]);
    }

    #[test]
    fn no_candidates_no_suggestions() {
        let got = suggest("anything", Vec::<String>::new());
        assert!(got.is_empty());
    }

    #[test]
    fn unrelated_candidates_are_excluded() {
        let got = suggest("search-index", ["payment-integration", "dark-mode"]);
        assert!(got.is_empty());
    }
}
