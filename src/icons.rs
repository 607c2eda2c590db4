//! Effect name -> icon URL.

use std::borrow::Cow;

use crate::config::DEFAULT_ICON_BASE_URL;

/// Known effect names and their icon file stems.
const ICON_STEMS: &[(&str, &str)] = &[
    ("Vitalité", "pv"),
    ("Force", "terre"),
    ("Intelligence", "feu"),
    ("Chance", "eau"),
    ("Agilité", "air"),
    ("Sagesse", "sagesse"),
    ("Tacle", "tacle"),
    ("Fuite", "fuite"),
    ("Portée", "po"),
    ("PA", "pa"),
    ("PM", "pm"),
    ("Prospection", "pp"),
    ("Puissance", "puissance"),
    ("Retrait PA", "retraitPA"),
    ("Retrait PM", "retraitPM"),
    ("Esquive PA", "esquivePA"),
    ("Esquive PM", "esquivePM"),
    ("% Critique", "critique"),
    ("Dommage(s)", "dommages"),
    ("Dommage(s) Critiques", "dommagesCrit"),
    ("Initiative", "initiative"),
    ("% Résistance Neutre", "resNeutre"),
    ("% Résistance Terre", "resTerre"),
    ("% Résistance Feu", "resFeu"),
    ("% Résistance Eau", "resEau"),
    ("% Résistance Air", "resAir"),
    ("Résistance(s) Critiques", "resCrit"),
    ("Invocation(s)", "invocation"),
    ("Résistance(s) Poussée", "resPoussee"),
];

/// File stem for `effect`: the mapped stem when known, otherwise the name
/// lowercased with whitespace and `( ) % ' / -` removed.
pub fn icon_stem(effect: &str) -> Cow<'static, str> {
    if let Some((_, stem)) = ICON_STEMS.iter().find(|(name, _)| *name == effect) {
        return Cow::Borrowed(*stem);
    }
    Cow::Owned(
        effect
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '%' | '\'' | '/' | '-'))
            .collect(),
    )
}

/// Builds icon URLs under a configurable base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectIcons {
    base_url: String,
}

impl Default for EffectIcons {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_BASE_URL)
    }
}

impl EffectIcons {
    /// `base_url` is used as a prefix verbatim; a missing trailing `/` is added.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn url(&self, effect: &str) -> String {
        format!("{}{}.png", self.base_url, icon_stem(effect))
    }
}

/// Icon URL under the default base.
pub fn effect_icon_url(effect: &str) -> String {
    EffectIcons::default().url(effect)
}
