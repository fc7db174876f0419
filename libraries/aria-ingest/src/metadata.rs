//! Default metadata derivation from file names
//!
//! A file named `"Artist - Title.ext"` fills both fields; anything else
//! becomes the title and leaves the artist for the user.

/// Derive `(title, artist)` defaults from a file name
///
/// The extension is stripped first. If the remaining name splits on the
/// literal `" - "` into exactly two parts, the first (trimmed) is the
/// artist and the second (trimmed) the title; otherwise the whole trimmed
/// stem is the title and no artist is derived.
pub fn derive_from_name(name: &str) -> (String, Option<String>) {
    let stem = strip_extension(name);
    let parts: Vec<&str> = stem.split(" - ").collect();
    if parts.len() == 2 {
        (parts[1].trim().to_string(), Some(parts[0].trim().to_string()))
    } else {
        (stem.trim().to_string(), None)
    }
}

/// Strip a trailing `.ext` segment, if any
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_artist_and_title_on_separator() {
        let (title, artist) = derive_from_name("M83 - Midnight City.mp3");
        assert_eq!(title, "Midnight City");
        assert_eq!(artist.as_deref(), Some("M83"));
    }

    #[test]
    fn trims_whitespace_around_parts() {
        let (title, artist) = derive_from_name("  The xx  -  Intro .flac");
        assert_eq!(title, "Intro");
        assert_eq!(artist.as_deref(), Some("The xx"));
    }

    #[test]
    fn whole_stem_becomes_title_without_separator() {
        let (title, artist) = derive_from_name("Genesis.ogg");
        assert_eq!(title, "Genesis");
        assert_eq!(artist, None);
    }

    #[test]
    fn more_than_two_parts_keeps_whole_stem() {
        let (title, artist) = derive_from_name("A - B - C.mp3");
        assert_eq!(title, "A - B - C");
        assert_eq!(artist, None);
    }

    #[test]
    fn only_last_extension_is_stripped() {
        let (title, _) = derive_from_name("demo.v2.mp3");
        assert_eq!(title, "demo.v2");
    }

    #[test]
    fn name_without_extension_is_kept() {
        let (title, _) = derive_from_name("Electric Feel");
        assert_eq!(title, "Electric Feel");
    }

    #[test]
    fn trailing_dot_is_not_an_extension() {
        let (title, _) = derive_from_name("song.");
        assert_eq!(title, "song.");
    }
}
