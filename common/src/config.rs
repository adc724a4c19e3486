#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses decorative output.
    ///
    /// `1` hides the banner and section headers, `2` also hides the summary.
    pub quiet: u8,
    pub no_banner: bool,
    /// Rejects duplicate vehicle ids on registration and rentals of zero or
    /// negative length.
    ///
    /// Off by default, which matches the behaviour of the reference ledger.
    pub strict: bool,
}

impl Config {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
