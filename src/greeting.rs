/// Name used when the caller supplies no name at all.
pub const DEFAULT_NAME: &str = "world";

/// Builds the greeting for `name`, substituting [`DEFAULT_NAME`] when the
/// name is absent. An empty-but-present name is greeted as-is.
#[must_use]
pub fn greet(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("Hello, {name}!")
}
