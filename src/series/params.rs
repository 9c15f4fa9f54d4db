/// Alpha Vantage FX time-series function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FxFunction {
    /// `FX_DAILY`
    #[default]
    Daily,
    /// `FX_WEEKLY`
    Weekly,
    /// `FX_MONTHLY`
    Monthly,
}

impl FxFunction {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FxFunction::Daily => "FX_DAILY",
            FxFunction::Weekly => "FX_WEEKLY",
            FxFunction::Monthly => "FX_MONTHLY",
        }
    }

    /// Key under which the provider nests the per-date quotes for this function.
    pub(crate) fn series_key(self) -> &'static str {
        match self {
            FxFunction::Daily => "Time Series FX (Daily)",
            FxFunction::Weekly => "Time Series FX (Weekly)",
            FxFunction::Monthly => "Time Series FX (Monthly)",
        }
    }
}

/// How much history the provider returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputSize {
    /// Latest 100 data points.
    Compact,
    /// Full history.
    #[default]
    Full,
}

impl OutputSize {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}
