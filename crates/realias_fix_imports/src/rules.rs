use regex::Regex;

/// Top-level source directories whose deep relative imports collapse to the
/// `@/` alias.
pub const MODULE_CATEGORIES: &[&str] =
    &["context", "components", "types", "services", "pages", "utils"];

/// One substitution pass: every non-overlapping match of `pattern` in the
/// buffer is replaced by `replacement`, which may reference captured groups.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule { pattern: Regex::new(pattern).unwrap(), replacement }
    }
}

/// The fixed rewrite rules, in application order.
///
/// Later rules see the output of earlier ones, so category keywords are
/// consumed by the first two rules before the `App` rule ever runs. Both
/// quote styles are captured and re-emitted verbatim, and any run of `../`
/// collapses to a single `@/`.
pub fn default_rules() -> Vec<Rule> {
    let categories = MODULE_CATEGORIES.join("|");
    vec![
        Rule::new(&format!(r#"from (['"])(?:\.\./)+({categories})"#), "from ${1}@/${2}"),
        // Side-effect imports (`import '../../services/init'`)
        Rule::new(&format!(r#"import (['"])(?:\.\./)+({categories})"#), "import ${1}@/${2}"),
        // App sits at the source root and gets imported from deep files
        Rule::new(r#"from (['"])(?:\.\./)+App"#, "from ${1}@/App"),
    ]
}

/// Applies every rule in order to `content` and returns the final buffer.
/// Plain text matching over the whole buffer: occurrences inside comments or
/// string literals that happen to match are rewritten too.
pub fn rewrite_content(content: &str, rules: &[Rule]) -> String {
    let mut out = content.to_string();
    for rule in rules {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out
}
