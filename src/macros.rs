/// Compile a pattern once per process and hand out a `&'static Regex`.
///
/// Every pattern in the pipeline is a literal, so a failed compile is a
/// programming error caught by the first test that touches the pass.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
