//! Primary-language match with partial credit for related ecosystems.

use crate::text::Profile;
use crate::types::scoring::Score;

pub const EXACT_LANGUAGE_SCORE: Score = 1.0;
pub const RELATED_LANGUAGE_SCORE: Score = 0.5;

/// Languages that share tooling or runtimes closely enough that knowing one
/// is useful in a repository written in another.
const LANGUAGE_FAMILIES: &[&[&str]] = &[
    &["javascript", "typescript"],
    &["java", "kotlin", "scala", "groovy"],
    &["c", "c++", "objective-c"],
    &["c#", "f#"],
    &["shell", "bash", "powershell"],
    &["html", "css", "scss"],
    &["python", "jupyter notebook"],
];

/// 1.0 when the profile names the repository language, 0.5 when it names a
/// language of the same family, otherwise 0.0.
pub fn language_match(profile: &Profile, language: &str) -> Score {
    let language = language.trim().to_lowercase();
    if profile.is_empty() || language.is_empty() {
        return 0.0;
    }

    if mentions_language(profile, &language) {
        return EXACT_LANGUAGE_SCORE;
    }

    let related = LANGUAGE_FAMILIES
        .iter()
        .filter(|family| family.contains(&language.as_str()))
        .flat_map(|family| family.iter())
        .any(|member| *member != language && mentions_language(profile, member));
    if related {
        RELATED_LANGUAGE_SCORE
    } else {
        0.0
    }
}

fn mentions_language(profile: &Profile, language: &str) -> bool {
    if profile.mentions(language) {
        return true;
    }
    // multi-word names such as "jupyter notebook" need every word present
    let mut words = language.split_whitespace().peekable();
    words.peek().is_some()
        && language.contains(' ')
        && words.all(|word| profile.mentions(word))
}
