//! Part-of-speech tagging and lemmatization.
//!
//! The concept extractor consumes tagging through the [`Tagger`] trait. The
//! shipped implementation is a lexicon/heuristic tagger: good enough to
//! recover noun lemmas from ordinary prose, deterministic across calls, and
//! dependency-free. A model-backed tagging service can implement the same
//! trait.

use concord_core::error::Result;
use concord_core::types::{PartOfSpeech, TaggedToken};
use regex::Regex;

/// Service that classifies the tokens of one sentence.
///
/// Output order follows token order in the sentence. Lemmas are lowercase.
/// Implementations must be deterministic: the same sentence always yields
/// the same token sequence.
pub trait Tagger: Send + Sync {
    /// Tag every token of `sentence` with a lemma and part-of-speech class.
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>>;
}

/// Lexicon- and suffix-based tagger.
///
/// Classification order per token:
/// 1. numeric tokens are numerals;
/// 2. closed-class lexicons (determiners, pronouns, prepositions,
///    conjunctions, auxiliaries and common verbs, common adjectives);
/// 3. suffix heuristics (`-ly` adverb, `-ing`/`-ed` verb);
/// 4. everything else defaults to a noun.
///
/// Defaulting unknown content words to nouns mirrors how open-class
/// vocabulary skews in prose and keeps the concept extractor permissive.
/// Noun lemmas get plural suffixes stripped ("mats" -> "mat",
/// "industries" -> "industry").
pub struct LexiconTagger {
    token_regex: Regex,
}

impl LexiconTagger {
    /// Create a new tagger with a pre-compiled token pattern.
    pub fn new() -> Self {
        Self {
            // Words (with internal apostrophes/hyphens) or digit runs.
            token_regex: Regex::new(r"[A-Za-z]+(?:['\-][A-Za-z]+)*|\d+").unwrap(),
        }
    }

    fn classify(&self, token: &str) -> PartOfSpeech {
        if token.chars().all(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Numeral;
        }
        if is_determiner(token) {
            return PartOfSpeech::Determiner;
        }
        if is_pronoun(token) {
            return PartOfSpeech::Pronoun;
        }
        if is_preposition(token) {
            return PartOfSpeech::Preposition;
        }
        if is_conjunction(token) {
            return PartOfSpeech::Conjunction;
        }
        if is_verb(token) {
            return PartOfSpeech::Verb;
        }
        if is_adjective(token) {
            return PartOfSpeech::Adjective;
        }
        if is_adverb(token) || (token.len() > 3 && token.ends_with("ly")) {
            return PartOfSpeech::Adverb;
        }
        if token.len() > 4 && (token.ends_with("ing") || token.ends_with("ed")) {
            return PartOfSpeech::Verb;
        }
        PartOfSpeech::Noun
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        let mut tokens = Vec::new();
        for m in self.token_regex.find_iter(sentence) {
            let lower = m.as_str().to_lowercase();
            let pos = self.classify(&lower);
            let lemma = match pos {
                PartOfSpeech::Noun => lemmatize_noun(&lower),
                _ => lower,
            };
            tokens.push(TaggedToken::new(lemma, pos));
        }
        Ok(tokens)
    }
}

/// Strip regular plural suffixes from a lowercase noun.
fn lemmatize_noun(noun: &str) -> String {
    if noun.len() > 4 && noun.ends_with("ies") {
        return format!("{}y", &noun[..noun.len() - 3]);
    }
    if noun.len() > 4
        && (noun.ends_with("sses")
            || noun.ends_with("xes")
            || noun.ends_with("zes")
            || noun.ends_with("ches")
            || noun.ends_with("shes"))
    {
        return noun[..noun.len() - 2].to_string();
    }
    if noun.len() > 3
        && noun.ends_with('s')
        && !noun.ends_with("ss")
        && !noun.ends_with("us")
        && !noun.ends_with("is")
    {
        return noun[..noun.len() - 1].to_string();
    }
    noun.to_string()
}

fn is_determiner(token: &str) -> bool {
    matches!(
        token,
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "some" | "any" | "each"
            | "every" | "no" | "both" | "either" | "neither"
    )
}

fn is_pronoun(token: &str) -> bool {
    matches!(
        token,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us"
            | "them" | "my" | "your" | "his" | "its" | "our" | "their" | "mine" | "yours"
            | "ours" | "theirs" | "who" | "whom" | "whose" | "which" | "what" | "something"
            | "anything" | "nothing" | "everything" | "someone" | "anyone" | "everyone"
    )
}

fn is_preposition(token: &str) -> bool {
    matches!(
        token,
        "on" | "in" | "at" | "by" | "for" | "with" | "from" | "to" | "of" | "off" | "over"
            | "under" | "into" | "onto" | "about" | "above" | "below" | "after" | "before"
            | "between" | "through" | "during" | "without" | "within" | "against" | "across"
            | "along" | "around" | "near" | "up" | "down" | "out"
    )
}

fn is_conjunction(token: &str) -> bool {
    matches!(
        token,
        "and" | "or" | "but" | "because" | "so" | "nor" | "yet" | "although" | "though"
            | "while" | "if" | "when" | "whenever" | "where" | "wherever" | "as" | "since"
            | "unless" | "until" | "whether" | "than"
    )
}

/// Auxiliaries plus a lexicon of frequent verbs. Third-person `-s` forms are
/// checked against the base form, so "sits" and "helps" classify as verbs.
fn is_verb(token: &str) -> bool {
    if is_verb_base(token) {
        return true;
    }
    token.len() > 2 && token.ends_with('s') && is_verb_base(&token[..token.len() - 1])
}

fn is_verb_base(token: &str) -> bool {
    matches!(
        token,
        // Auxiliaries and copulas.
        "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "do" | "does" | "did"
            | "have" | "has" | "had" | "will" | "would" | "shall" | "should" | "can" | "could"
            | "may" | "might" | "must"
            // Frequent lexical verbs.
            | "sit" | "stand" | "run" | "walk" | "go" | "come" | "make" | "take" | "get"
            | "give" | "see" | "look" | "know" | "think" | "say" | "tell" | "ask" | "use"
            | "find" | "want" | "need" | "help" | "keep" | "let" | "put" | "mean" | "become"
            | "leave" | "feel" | "bring" | "begin" | "show" | "hear" | "play" | "move"
            | "believe" | "hold" | "happen" | "write" | "read" | "learn" | "teach" | "create"
            | "free" | "seem" | "try" | "call" | "turn" | "start" | "stop" | "like" | "love"
            // Irregular past forms.
            | "sat" | "ran" | "went" | "came" | "made" | "took" | "got" | "gave" | "saw"
            | "knew" | "thought" | "said" | "told" | "found" | "kept" | "meant" | "became"
            | "left" | "felt" | "brought" | "began" | "heard" | "held" | "wrote" | "ate"
    )
}

fn is_adverb(token: &str) -> bool {
    matches!(
        token,
        "very" | "too" | "also" | "not" | "now" | "then" | "here" | "there" | "always"
            | "never" | "often" | "sometimes" | "well" | "just" | "still" | "already"
            | "soon" | "again" | "once" | "even" | "perhaps" | "maybe"
    )
}

fn is_adjective(token: &str) -> bool {
    matches!(
        token,
        "soft" | "hard" | "new" | "old" | "good" | "bad" | "big" | "small" | "large" | "long"
            | "short" | "high" | "low" | "easy" | "difficult" | "early" | "late" | "young"
            | "important" | "different" | "same" | "able" | "available" | "strong" | "weak"
            | "many" | "few" | "more" | "most" | "much" | "several" | "other" | "own"
            | "innovative" | "repetitive" | "likely" | "possible" | "common" | "real"
            | "simple" | "full" | "empty" | "quick" | "slow" | "warm" | "cold"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sentence: &str) -> Vec<TaggedToken> {
        LexiconTagger::new().tag(sentence).unwrap()
    }

    fn nouns(sentence: &str) -> Vec<String> {
        tag(sentence)
            .into_iter()
            .filter(|t| t.pos == PartOfSpeech::Noun)
            .map(|t| t.lemma)
            .collect()
    }

    #[test]
    fn test_plural_nouns_lemmatized() {
        assert_eq!(nouns("Cats sit on mats."), vec!["cat", "mat"]);
    }

    #[test]
    fn test_irregular_plural_suffixes() {
        assert_eq!(lemmatize_noun("industries"), "industry");
        assert_eq!(lemmatize_noun("classes"), "class");
        assert_eq!(lemmatize_noun("boxes"), "box");
        assert_eq!(lemmatize_noun("branches"), "branch");
        assert_eq!(lemmatize_noun("machines"), "machine");
        // Words ending in -ss, -us, -is keep their suffix.
        assert_eq!(lemmatize_noun("glass"), "glass");
        assert_eq!(lemmatize_noun("bonus"), "bonus");
        assert_eq!(lemmatize_noun("analysis"), "analysis");
    }

    #[test]
    fn test_function_words_are_not_nouns() {
        assert!(nouns("The and because of it").is_empty());
    }

    #[test]
    fn test_copula_and_adjective() {
        let tokens = tag("Mats are soft.");
        assert_eq!(tokens[0], TaggedToken::new("mat", PartOfSpeech::Noun));
        assert_eq!(tokens[1], TaggedToken::new("are", PartOfSpeech::Verb));
        assert_eq!(tokens[2], TaggedToken::new("soft", PartOfSpeech::Adjective));
    }

    #[test]
    fn test_third_person_verbs() {
        let tokens = tag("Automation helps employees");
        assert_eq!(tokens[1].pos, PartOfSpeech::Verb);
        assert_eq!(tokens[2], TaggedToken::new("employee", PartOfSpeech::Noun));
    }

    #[test]
    fn test_suffix_heuristics() {
        let tokens = tag("Machines are quickly learning");
        assert_eq!(tokens[2].pos, PartOfSpeech::Adverb);
        assert_eq!(tokens[3].pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_numerals() {
        let tokens = tag("42 employees");
        assert_eq!(tokens[0], TaggedToken::new("42", PartOfSpeech::Numeral));
    }

    #[test]
    fn test_lemmas_are_lowercase() {
        let tokens = tag("MACHINES Learn");
        assert_eq!(tokens[0].lemma, "machine");
        assert_eq!(tokens[1].lemma, "learn");
    }

    #[test]
    fn test_deterministic_across_calls() {
        let tagger = LexiconTagger::new();
        let a = tagger.tag("AI is transforming industries.").unwrap();
        let b = tagger.tag("AI is transforming industries.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_sentence_yields_no_tokens() {
        assert!(tag("").is_empty());
        assert!(tag("  ...  ").is_empty());
    }

    #[test]
    fn test_punctuation_stripped_by_tokenizer() {
        let tokens = tag("opportunities, tech; data!");
        let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["opportunity", "tech", "data"]);
    }
}
