// Noun lemmatization: reduce surviving tokens to dictionary base forms.
//
// Mirrors the WordNet lemmatizer's default (noun-only) behavior with an
// irregular-plural map and plural suffix rules. Rules are applied to a
// fixed point, which makes `lemmatize` idempotent, a property the
// normalizer's own idempotence rests on.

use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("people", "person"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("crises", "crisis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
        ("curricula", "curriculum"),
        ("media", "medium"),
        ("series", "series"),
        ("species", "species"),
        ("movies", "movie"),
    ])
});

/// Lemmatize one lowercase token.
pub fn lemmatize(token: &str) -> String {
    let mut current = token.to_string();
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One rule application. The first matching rule wins.
fn step(token: &str) -> String {
    if let Some(base) = IRREGULAR.get(token) {
        return (*base).to_string();
    }
    let n = token.len();

    // theories -> theory, studies -> study
    if n >= 5 && token.ends_with("ies") {
        return format!("{}y", &token[..n - 3]);
    }
    // classes -> class, boxes -> box, approaches -> approach
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if n > suffix.len() && token.ends_with(suffix) {
            return token[..n - 2].to_string();
        }
    }
    // methods -> method; leave -ss, -us, -is nouns alone
    if n > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..n - 1].to_string();
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_suffix_rules() {
        assert_eq!(lemmatize("algorithms"), "algorithm");
        assert_eq!(lemmatize("studies"), "study");
        assert_eq!(lemmatize("theories"), "theory");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("approaches"), "approach");
        assert_eq!(lemmatize("boxes"), "box");
    }

    #[test]
    fn protected_endings_untouched() {
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("campus"), "campus");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("series"), "series");
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("criteria"), "criterion");
        assert_eq!(lemmatize("curricula"), "curriculum");
    }

    #[test]
    fn idempotent_on_sampled_vocabulary() {
        for word in [
            "algorithms",
            "studies",
            "theses",
            "women",
            "painting",
            "color",
            "lens",
            "physics",
        ] {
            let once = lemmatize(word);
            assert_eq!(lemmatize(&once), once, "lemmatize not idempotent on {word}");
        }
    }
}
