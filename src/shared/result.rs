/// Result alias used across the application and adapter layers.
///
/// The pure parser returns its own `ParseError`; everything around it
/// propagates `anyhow::Error` so errors can carry context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
