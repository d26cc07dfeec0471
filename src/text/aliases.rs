//! Common abbreviations folded onto one canonical token.

const ALIASES: &[(&str, &str)] = &[
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("golang", "go"),
    ("js", "javascript"),
    ("k8s", "kubernetes"),
    ("nodejs", "node"),
    ("postgres", "postgresql"),
    ("py", "python"),
    ("python3", "python"),
    ("reactjs", "react"),
    ("rustlang", "rust"),
    ("ts", "typescript"),
    ("vuejs", "vue"),
];

/// Returns the canonical spelling for `token`, or `token` itself.
pub(crate) fn canonicalize(token: &str) -> &str {
    ALIASES
        .binary_search_by(|(alias, _)| (*alias).cmp(token))
        .map(|index| ALIASES[index].1)
        .unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_sorted_for_binary_search() {
        let keys = ALIASES.iter().map(|(alias, _)| *alias).collect::<Vec<_>>();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn canonicalize_maps_known_aliases() {
        assert_eq!(canonicalize("js"), "javascript");
        assert_eq!(canonicalize("golang"), "go");
        assert_eq!(canonicalize("rust"), "rust");
    }
}
