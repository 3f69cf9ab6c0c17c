//! Rule-based lemmatization
//!
//! Irregular-form table first, then suffix stripping. Callers pass a
//! membership check so candidate stems can be validated against the verb
//! vocabulary before falling back to the bare heuristic.

/// Irregular verb forms mapped to their base form
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("made", "make"),
    ("left", "leave"),
    ("sent", "send"),
    ("paid", "pay"),
    ("bought", "buy"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("ran", "run"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("found", "find"),
    ("kept", "keep"),
    ("told", "tell"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
];

/// Suffixes whose plural/3rd-person form appends "es" rather than "s"
const ES_STEM_SUFFIXES: &[&str] = &["ches", "shes", "xes", "zes", "sses"];

/// Base form of a verb-like word
pub(crate) fn verb_lemma(word: &str, is_known: impl Fn(&str) -> bool) -> String {
    let lower = word.to_lowercase();

    if let Some((_, lemma)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return (*lemma).to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }

    for suffix in ["ing", "ed"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.len() < 2 {
                continue;
            }
            if is_known(stem) {
                return stem.to_string();
            }
            let restored = format!("{stem}e");
            if is_known(&restored) {
                return restored;
            }
            let chars: Vec<char> = stem.chars().collect();
            let last = chars[chars.len() - 1];
            if chars.len() >= 3 && last == chars[chars.len() - 2] && !"aeiou".contains(last) {
                return chars[..chars.len() - 1].iter().collect();
            }
            return stem.to_string();
        }
    }

    if lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
        && lower.len() > 3
    {
        let stem = &lower[..lower.len() - 1];
        if is_known(stem) {
            return stem.to_string();
        }
        if let Some(es_stem) = lower.strip_suffix("es") {
            if is_known(es_stem) || ES_STEM_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                return es_stem.to_string();
            }
        }
        return stem.to_string();
    }

    lower
}

/// Base form of a noun-like word (plural stripping only)
pub(crate) fn noun_lemma(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if ES_STEM_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return lower[..lower.len() - 2].to_string();
    }
    if lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
        && lower.len() > 3
    {
        return lower[..lower.len() - 1].to_string();
    }
    lower
}
