use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::types::ChapterManifest;

static DEFAULT_MANIFEST: Lazy<ChapterManifest> = Lazy::new(|| {
    let mut books = HashMap::new();

    books.insert(
        "cftbat".to_string(),
        to_slugs(&[
            "foreword",
            "acknowledgements",
            "introduction",
            "getting-started",
            "basic-emacs",
            "do-things",
            "core-functions-in-depth",
            "functional-programming",
            "organization",
            "read-and-eval",
            "writing-macros",
            "concurrency",
            "zombie-metaphysics",
            "core-async",
            "java",
            "multimethods-records-protocols",
            "appendix-a",
            "appendix-b",
            "afterword",
        ]),
    );

    books.insert(
        "deploy".to_string(),
        to_slugs(&[
            "preface",
            "intro",
            "set-up-a-server-and-deploy-a-clojure-app-to-it",
            "ansible-tutorial",
            "sweet-tooth-deep-dive",
        ]),
    );

    books.insert(
        "reducers".to_string(),
        to_slugs(&["intro", "know-your-reducers", "appendix-x", "references"]),
    );

    ChapterManifest::from_books(books)
});

fn to_slugs(slugs: &[&str]) -> Vec<String> {
    slugs.iter().map(|s| s.to_string()).collect()
}

/// The built-in chapter ordering used when no manifest file is supplied
pub fn default_manifest() -> &'static ChapterManifest {
    &DEFAULT_MANIFEST
}
