use crate::application::ports::util::SlugGenerator;

/// Built-in normalizer.
///
/// Lowercases the input, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, then turns each run of whitespace and hyphens into a single hyphen.
/// Separators at either end are trimmed; input made only of separators
/// becomes `"-"`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        normalize(input)
    }
}

pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    let mut saw_separator = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
            saw_separator = true;
        }
    }

    if slug.is_empty() && saw_separator {
        slug.push('-');
    }

    slug
}
