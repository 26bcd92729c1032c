/// Prefix of method member identifiers in the documentation file.
pub const METHOD_MARKER: &str = "M:";

/// Structural signature key of a method.
///
/// `M:<declaring type>.<method>(<param>,<param>,...)`; a method without
/// parameters yields a trailing `()`.
pub fn signature_key<S: AsRef<str>>(declaring_type: &str, method: &str, params: &[S]) -> String {
    let params: Vec<&str> = params.iter().map(AsRef::as_ref).collect();
    format!(
        "{METHOD_MARKER}{declaring_type}.{method}({})",
        params.join(",")
    )
}

/// Normalize a member identifier read from the documentation file.
///
/// Parameterless methods are written without a parameter list; append `()`
/// so they match [`signature_key`].
pub fn normalize_member_key(raw: &str) -> String {
    if raw.contains('(') && raw.contains(')') {
        raw.to_string()
    } else {
        format!("{raw}()")
    }
}
