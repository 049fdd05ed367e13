use std::path::Path;

/// File name for the compressed copy of `input`: every `*` in `pattern` becomes
/// the input's stem.
pub fn output_file_name(pattern: &str, input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    pattern.replace('*', &stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        assert_eq!(
            output_file_name("*_compressed.jpg", Path::new("/photos/cat.png")),
            "cat_compressed.jpg"
        );
        assert_eq!(output_file_name("out.jpg", Path::new("cat.png")), "out.jpg");
        assert_eq!(output_file_name("*-*.jpg", Path::new("a.b.png")), "a.b-a.b.jpg");
    }
}
