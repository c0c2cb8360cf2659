/// How `if`/`while` name their jump targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LabelStyle {
    /// Always `label` and `end_label`. Nested or sequential constructs share
    /// the same names; kept for tools that expect the literal text.
    Fixed,
    /// `label_n` and `end_label_n`, numbered per translator from 1.
    #[default]
    Unique,
}

/// What a grammar rule does after reporting a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Recovery {
    /// Each rule recovers in place: abandon the statement where it stands,
    /// or carry on for the forms that tolerate the missing token.
    Local,
    /// Abandon the statement and skip to the next `;`, `}`, or
    /// statement keyword.
    #[default]
    Synchronize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslatorConfig {
    pub labels: LabelStyle,
    pub recovery: Recovery,
}

impl TranslatorConfig {
    /// Output and recovery identical to the first version of the translator.
    pub const fn legacy() -> Self {
        Self {
            labels: LabelStyle::Fixed,
            recovery: Recovery::Local,
        }
    }
}
