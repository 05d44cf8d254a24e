// src/application/ports/util.rs

/// Turns free text into a URL-safe fragment. May return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
