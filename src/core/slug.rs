//! Title slugification for file names

/// Convert a title into a URL/filename-safe slug.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single hyphen and trims hyphens from both ends. Alphanumeric is
/// Unicode-aware, so accented letters survive. Running the function on its
/// own output returns it unchanged.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            // Lowercasing can expand one char into several ('İ' becomes
            // "i\u{307}"); only the alphanumeric part belongs in a slug.
            for lower in ch.to_lowercase().filter(|c| c.is_alphanumeric()) {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
