/// Reasons a seed asset filename is refused.
#[derive(Debug, PartialEq, Eq)]
pub enum FilenameError {
    Empty,
    /// Contains `/` or `\`.
    ContainsPathSeparator,
    PathTraversal,
    NullByte,
    /// Starts with a dot.
    Hidden,
    ControlCharacter,
}

impl FilenameError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "filename is empty",
            Self::ContainsPathSeparator => "path separators are not allowed",
            Self::PathTraversal => "'..' is not allowed",
            Self::NullByte => "null bytes are not allowed",
            Self::Hidden => "hidden files are not allowed",
            Self::ControlCharacter => "control characters are not allowed",
        }
    }
}

/// Validates a flat filename (no directory components allowed).
///
/// Seed documents name assets relative to the assets directory; anything that
/// could escape it is refused.
pub fn validate_flat_filename(filename: &str) -> Result<&str, FilenameError> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }
    if trimmed.contains('\0') {
        return Err(FilenameError::NullByte);
    }
    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(FilenameError::ControlCharacter);
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }
    if trimmed == ".." {
        return Err(FilenameError::PathTraversal);
    }
    if trimmed.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    Ok(trimmed)
}

/// Media lookup name: the filename with its last extension removed.
///
/// `"default-image.png"` becomes `"default-image"`, `"archive.tar.gz"` becomes
/// `"archive.tar"`, and a name without an extension is returned unchanged.
pub fn media_name(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_asset_names() {
        assert_eq!(validate_flat_filename("coffee-art.jpg"), Ok("coffee-art.jpg"));
        assert_eq!(validate_flat_filename("  padded.png  "), Ok("padded.png"));
        assert!(validate_flat_filename("foo..bar.png").is_ok());
    }

    #[test]
    fn refuses_names_that_leave_the_assets_dir() {
        assert_eq!(
            validate_flat_filename("../secrets.txt"),
            Err(FilenameError::ContainsPathSeparator)
        );
        assert_eq!(
            validate_flat_filename("nested\\a.png"),
            Err(FilenameError::ContainsPathSeparator)
        );
        assert_eq!(validate_flat_filename(".."), Err(FilenameError::PathTraversal));
        assert_eq!(validate_flat_filename(".env"), Err(FilenameError::Hidden));
        assert_eq!(validate_flat_filename("   "), Err(FilenameError::Empty));
        assert_eq!(validate_flat_filename("a\0b"), Err(FilenameError::NullByte));
        assert_eq!(
            validate_flat_filename("a\r\nb.png"),
            Err(FilenameError::ControlCharacter)
        );
    }

    #[test]
    fn media_name_strips_only_the_last_extension() {
        assert_eq!(media_name("default-image.png"), "default-image");
        assert_eq!(media_name("archive.tar.gz"), "archive.tar");
        assert_eq!(media_name("no_ext"), "no_ext");
        assert_eq!(media_name(".hidden"), ".hidden");
    }
}
