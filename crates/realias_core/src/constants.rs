//! Suffix vocabulary for JavaScript/TypeScript source files.
//!
//! Eligibility is a case-sensitive suffix match on the file NAME, not a
//! `Path::extension` lookup. The distinction matters at the edges: a dotfile
//! named exactly `.ts` qualifies, while `foo.TS` and `foo.mts` do not.

/// File name suffixes of source files eligible for rewriting.
pub const SOURCE_SUFFIXES: &[&str] = &[
    ".ts",  // TypeScript
    ".tsx", // TypeScript with JSX
    ".js",  // JavaScript
    ".jsx", // JavaScript with JSX
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_suffixes_cover_js_and_ts() {
        assert!(SOURCE_SUFFIXES.contains(&".ts"));
        assert!(SOURCE_SUFFIXES.contains(&".tsx"));
        assert!(SOURCE_SUFFIXES.contains(&".js"));
        assert!(SOURCE_SUFFIXES.contains(&".jsx"));
        assert_eq!(SOURCE_SUFFIXES.len(), 4);
    }

    #[test]
    fn test_source_suffixes_carry_the_leading_dot() {
        // Suffix matching relies on the dot being part of the string
        for suffix in SOURCE_SUFFIXES {
            assert!(suffix.starts_with('.'), "suffix '{}' is missing its dot", suffix);
        }
    }
}
