// src/application/ports/util.rs

/// Turns free text into a slug candidate.
///
/// Implementations must be deterministic. The built-in one lives in
/// `infrastructure::util`; callers may register their own at startup.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// Absent input stays absent; an empty string is still a (blank) value.
    fn generate(&self, input: Option<&str>) -> Option<String> {
        input.map(|value| self.slugify(value))
    }
}
