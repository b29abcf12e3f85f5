//! Stemming algorithms for reducing words to their root forms.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Step 2 suffix table, longest first. The first matching suffix decides;
/// shorter suffixes are not tried when its measure condition fails.
const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("ization", "ize"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("tional", "tion"),
    ("biliti", "ble"),
    ("entli", "ent"),
    ("ousli", "ous"),
    ("ation", "ate"),
    ("alism", "al"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("ator", "ate"),
    ("eli", "e"),
];

/// Step 3 suffix table, longest first.
const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ness", ""),
    ("ful", ""),
];

/// Step 4 suffix table, longest first. "ion" additionally requires the stem
/// to end in s or t.
const STEP4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ion", "ism", "ate", "iti",
    "ous", "ive", "ize", "al", "er", "ic", "ou",
];

/// The Porter stemming algorithm.
///
/// Deterministic suffix stripping over the word's letters: the same input
/// always produces the same stem, and many inflected forms collapse to one
/// stem ("running", "runs" → "run"). Words of one or two letters are only
/// lowercased.
#[derive(Clone, Debug, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// A letter is a consonant unless it is a/e/i/o/u, or a y preceded by a
    /// consonant.
    fn is_consonant(chars: &[char], i: usize) -> bool {
        match chars[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !Self::is_consonant(chars, i - 1),
            _ => true,
        }
    }

    /// The measure of a stem: the number of vowel-consonant spans in it.
    fn measure(chars: &[char]) -> usize {
        let n = chars.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && Self::is_consonant(chars, i) {
            i += 1;
        }
        while i < n {
            while i < n && !Self::is_consonant(chars, i) {
                i += 1;
            }
            if i == n {
                break;
            }
            m += 1;
            while i < n && Self::is_consonant(chars, i) {
                i += 1;
            }
        }
        m
    }

    fn has_vowel(chars: &[char]) -> bool {
        (0..chars.len()).any(|i| !Self::is_consonant(chars, i))
    }

    fn ends_double_consonant(chars: &[char]) -> bool {
        let n = chars.len();
        n >= 2 && chars[n - 1] == chars[n - 2] && Self::is_consonant(chars, n - 1)
    }

    /// Consonant-vowel-consonant ending where the final consonant is not
    /// w, x or y.
    fn ends_cvc(chars: &[char]) -> bool {
        let n = chars.len();
        n >= 3
            && Self::is_consonant(chars, n - 3)
            && !Self::is_consonant(chars, n - 2)
            && Self::is_consonant(chars, n - 1)
            && !matches!(chars[n - 1], 'w' | 'x' | 'y')
    }

    /// All table suffixes are ASCII, so byte length equals char length.
    fn ends_with(chars: &[char], suffix: &str) -> bool {
        let k = suffix.len();
        chars.len() >= k && chars[chars.len() - k..].iter().copied().eq(suffix.chars())
    }

    /// Step 1a: plural forms (sses → ss, ies → i, s → "").
    fn step1a(&self, mut word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "sses") || Self::ends_with(&word, "ies") {
            word.truncate(word.len() - 2);
        } else if !Self::ends_with(&word, "ss") && Self::ends_with(&word, "s") {
            word.truncate(word.len() - 1);
        }
        word
    }

    /// Step 1b: past and progressive forms (eed, ed, ing), with the
    /// cleanup rules that restore a final e or undo a doubled consonant.
    fn step1b(&self, mut word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "eed") {
            if Self::measure(&word[..word.len() - 3]) > 0 {
                word.truncate(word.len() - 1);
            }
            return word;
        }

        let stripped = if Self::ends_with(&word, "ed") && Self::has_vowel(&word[..word.len() - 2])
        {
            word.truncate(word.len() - 2);
            true
        } else if Self::ends_with(&word, "ing") && Self::has_vowel(&word[..word.len() - 3]) {
            word.truncate(word.len() - 3);
            true
        } else {
            false
        };

        if stripped {
            if Self::ends_with(&word, "at")
                || Self::ends_with(&word, "bl")
                || Self::ends_with(&word, "iz")
            {
                word.push('e');
            } else if Self::ends_double_consonant(&word)
                && !matches!(word.last(), Some('l') | Some('s') | Some('z'))
            {
                word.pop();
            } else if Self::measure(&word) == 1 && Self::ends_cvc(&word) {
                word.push('e');
            }
        }
        word
    }

    /// Step 1c: final y → i when the rest of the word contains a vowel.
    fn step1c(&self, mut word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "y") && Self::has_vowel(&word[..word.len() - 1]) {
            let n = word.len();
            word[n - 1] = 'i';
        }
        word
    }

    fn apply_table(&self, mut word: Vec<char>, table: &[(&str, &str)]) -> Vec<char> {
        for (suffix, replacement) in table {
            if Self::ends_with(&word, suffix) {
                let stem_len = word.len() - suffix.len();
                if Self::measure(&word[..stem_len]) > 0 {
                    word.truncate(stem_len);
                    word.extend(replacement.chars());
                }
                return word;
            }
        }
        word
    }

    /// Step 2: double suffixes (ational → ate, iveness → ive, ...).
    fn step2(&self, word: Vec<char>) -> Vec<char> {
        self.apply_table(word, STEP2_SUFFIXES)
    }

    /// Step 3: -ic-, -full, -ness and friends.
    fn step3(&self, word: Vec<char>) -> Vec<char> {
        self.apply_table(word, STEP3_SUFFIXES)
    }

    /// Step 4: remaining suffixes are dropped outright when the stem is
    /// long enough (measure > 1).
    fn step4(&self, mut word: Vec<char>) -> Vec<char> {
        for suffix in STEP4_SUFFIXES {
            if Self::ends_with(&word, suffix) {
                let stem_len = word.len() - suffix.len();
                let stem = &word[..stem_len];
                let ion_ok = *suffix != "ion" || matches!(stem.last(), Some('s') | Some('t'));
                if Self::measure(stem) > 1 && ion_ok {
                    word.truncate(stem_len);
                }
                return word;
            }
        }
        word
    }

    /// Step 5: drop a final e (m > 1, or m = 1 when not cvc) and reduce a
    /// final double l.
    fn step5(&self, mut word: Vec<char>) -> Vec<char> {
        if word.last() == Some(&'e') {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }
        if Self::ends_with(&word, "ll") && Self::measure(&word) > 1 {
            word.pop();
        }
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        if chars.len() <= 2 {
            return lower;
        }

        let word = self.step1a(chars);
        let word = self.step1b(word);
        let word = self.step1c(word);
        let word = self.step2(word);
        let word = self.step3(word);
        let word = self.step4(word);
        let word = self.step5(word);
        word.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// A filter that reduces every token to its stem.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Get the name of the underlying stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed: Vec<Token> = tokens
            .map(|token| {
                let stem = self.stemmer.stem(&token.text);
                token.with_text(stem)
            })
            .collect();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_plurals_and_participles() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("agreed"), "agree");
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("filing"), "file");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("falling"), "fall");
    }

    #[test]
    fn test_porter_y_to_i() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("spicy"), "spici");
        // No vowel before the y, so it stays
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_porter_longer_suffixes() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("traditional"), "tradit");
        assert_eq!(stemmer.stem("electrical"), "electric");
        assert_eq!(stemmer.stem("hopefulness"), "hope");
        assert_eq!(stemmer.stem("adjustment"), "adjust");
        // Measure too small for step 4, so the suffix survives
        assert_eq!(stemmer.stem("agreement"), "agreement");
    }

    #[test]
    fn test_porter_leaves_culinary_names_alone() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("paella"), "paella");
        assert_eq!(stemmer.stem("masfouf"), "masfouf");
        assert_eq!(stemmer.stem("lablebi"), "lablebi");
        assert_eq!(stemmer.stem("saffron"), "saffron");
        assert_eq!(stemmer.stem("couscous"), "couscous");
        assert_eq!(stemmer.stem("chickpeas"), "chickpea");
    }

    #[test]
    fn test_porter_short_words_and_case() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("go"), "go");
        assert_eq!(stemmer.stem("IS"), "is");
        assert_eq!(stemmer.stem("Running"), "run");
    }

    #[test]
    fn test_porter_is_deterministic() {
        let stemmer = PorterStemmer::new();

        let once = stemmer.stem("navigation");
        let twice = stemmer.stem("navigation");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![Token::new("running", 0), Token::new("dishes", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "run");
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].text, "dish");
        assert_eq!(result[1].position, 1);
    }

    #[test]
    fn test_stem_filter_name() {
        let filter = StemFilter::new();
        assert_eq!(filter.name(), "stem");
        assert_eq!(filter.stemmer_name(), "porter");
    }
}
