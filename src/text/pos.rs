// Part-of-speech exclusion filter.
//
// The cleanup pipeline drops prepositions, the infinitive "to", and verb
// forms before lemmatization. With no corpus-wide tagger available, the
// exclusion set is rendered as a deterministic lexicon-plus-suffix
// filter. It deliberately never excludes nominal gerunds ("programming",
// "painting", "engineering"): an -ing token is only dropped when its
// base form is a known verb.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Prepositions and subordinating conjunctions (the IN tag).
const PREPOSITIONS: &[&str] = &[
    "aboard", "about", "above", "across", "after", "against", "along", "amid", "among", "around",
    "at", "atop", "because", "before", "behind", "below", "beneath", "beside", "besides",
    "between", "beyond", "by", "despite", "down", "during", "except", "for", "from", "if", "in",
    "inside", "into", "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "past",
    "per", "since", "than", "that", "through", "throughout", "till", "toward", "towards", "under",
    "underneath", "unless", "until", "unto", "up", "upon", "via", "whether", "while", "with",
    "within", "without",
];

/// Auxiliaries, modals, and irregular verb inflections (the VB* tags).
/// Kept to forms that are unambiguously verbal; verbs that double as
/// common nouns ("study", "design", "focus", "work") stay out.
const VERB_FORMS: &[&str] = &[
    // be / have / do
    "am", "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "having",
    "do", "does", "did", "done", "doing",
    // modals
    "will", "would", "shall", "should", "may", "might", "must", "can", "could", "ought",
    // frequent irregulars and light verbs
    "get", "gets", "got", "gotten", "getting", "make", "makes", "made", "making", "take",
    "takes", "took", "taken", "taking", "give", "gives", "gave", "given", "giving", "go",
    "goes", "went", "gone", "going", "come", "comes", "came", "coming", "see", "sees", "saw",
    "seen", "become", "becomes", "became", "becoming", "bring", "brings", "brought",
    // catalog-boilerplate verbs, inflected forms only
    "include", "includes", "included", "including", "provide", "provides", "provided",
    "providing", "require", "requires", "required", "requiring", "use", "uses", "used",
    "using", "introduces", "introduced", "emphasizes", "emphasized", "examines", "examined",
    "explores", "explored", "covers", "covered", "offered", "offers", "intended", "designed",
    "taught", "enables", "allows", "presents", "presented", "develops", "applies",
];

/// Base forms consulted by the -ing suffix rule. An -ing token is a verb
/// form only if stripping the suffix lands on one of these.
const VERB_BASES: &[&str] = &[
    "be", "have", "do", "go", "get", "take", "make", "give", "come", "see", "know", "use",
    "become", "bring", "include", "provide", "require", "introduce", "emphasize", "examine",
    "explore", "cover", "offer", "present", "develop", "apply", "enable", "allow",
];

static PREPOSITION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PREPOSITIONS.iter().copied().collect());
static VERB_FORM_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERB_FORMS.iter().copied().collect());
static VERB_BASE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERB_BASES.iter().copied().collect());

/// True when the token's part of speech falls in the fixed exclusion set
/// (prepositions, infinitive "to", verb forms).
pub fn is_excluded(token: &str) -> bool {
    if token == "to" || PREPOSITION_SET.contains(token) || VERB_FORM_SET.contains(token) {
        return true;
    }
    if is_past_form(token) {
        return true;
    }
    is_verbal_gerund(token)
}

/// Regular past/participle forms: "-ed" with enough stem left over.
/// "-eed" nouns (speed, feed) are not past forms.
fn is_past_form(token: &str) -> bool {
    token.len() >= 5 && token.ends_with("ed") && !token.ends_with("eed")
}

/// "-ing" forms whose base is a known verb: "using", "including".
/// "programming" survives because its base is not in the verb lexicon.
fn is_verbal_gerund(token: &str) -> bool {
    let Some(stem) = token.strip_suffix("ing") else {
        return false;
    };
    if stem.len() < 2 {
        return false;
    }
    if VERB_BASE_SET.contains(stem) {
        return true;
    }
    // Silent-e bases: "us(e)ing" already covered; "becom(e)ing" needs +e
    let with_e = format!("{stem}e");
    if VERB_BASE_SET.contains(with_e.as_str()) {
        return true;
    }
    // Doubled final consonant: "getting" -> "gett" -> "get"
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        if VERB_BASE_SET.contains(&stem[..stem.len() - 1]) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepositions_and_to_excluded() {
        for token in ["to", "of", "between", "throughout", "via"] {
            assert!(is_excluded(token), "{token} should be excluded");
        }
    }

    #[test]
    fn verb_forms_excluded() {
        for token in ["is", "been", "includes", "required", "using", "taking"] {
            assert!(is_excluded(token), "{token} should be excluded");
        }
    }

    #[test]
    fn regular_past_forms_excluded() {
        for token in ["offered", "designed", "analyzed"] {
            assert!(is_excluded(token), "{token} should be excluded");
        }
    }

    #[test]
    fn eed_nouns_survive() {
        for token in ["speed", "feed", "breed"] {
            assert!(!is_excluded(token), "{token} should survive");
        }
    }

    #[test]
    fn nominal_gerunds_survive() {
        for token in ["programming", "painting", "engineering", "marketing", "writing"] {
            assert!(!is_excluded(token), "{token} should survive");
        }
    }

    #[test]
    fn content_words_survive() {
        for token in ["algorithm", "color", "theory", "design", "study"] {
            assert!(!is_excluded(token), "{token} should survive");
        }
    }
}
