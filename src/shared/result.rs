/// Application-wide Result carrying `anyhow::Error`.
///
/// Core timeline operations return `TimelineError` directly; everything above
/// the domain layer folds those into this alias with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
