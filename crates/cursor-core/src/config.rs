//! Construction-time configuration.
//!
//! [`CursorConfig`] mirrors the options object a JS caller passes in: every
//! field is optional and camelCased. [`CursorConfig::resolve`] folds it
//! together with the per-category defaults into [`Settings`], which the
//! engine reads for the rest of its life.

use crate::color::Color;
use crate::constants::*;
use crate::easing::Easing;
use crate::zones::ZoneCategory;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Per-category overrides as supplied by the caller.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationOptions {
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub amount: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub duration: Option<f32>,
    #[serde(deserialize_with = "lenient_easing")]
    pub easing: Option<Easing>,
}

impl AnimationOptions {
    fn resolve(&self, defaults: AnimationConfig) -> AnimationConfig {
        AnimationConfig {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            amount: self.amount.filter(|a| a.is_finite()).unwrap_or(defaults.amount),
            duration: self
                .duration
                .filter(|d| d.is_finite() && *d >= 0.0)
                .unwrap_or(defaults.duration),
            easing: self.easing.clone().unwrap_or(defaults.easing),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Invalid(IgnoredAny),
}

// A field of the wrong type falls back to its default instead of failing the
// whole config.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => value,
        Lenient::Invalid(_) => {
            log::warn!("ignoring option, expected {}", std::any::type_name::<T>());
            T::default()
        }
    })
}

// Unknown curve names degrade to the default curve as well.
fn lenient_easing<'de, D>(deserializer: D) -> std::result::Result<Option<Easing>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = lenient(deserializer)?;
    Ok(name.and_then(|n| match n.parse::<Easing>() {
        Ok(easing) => Some(easing),
        Err(e) => {
            log::warn!("{e}; using the default curve");
            None
        }
    }))
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    #[serde(deserialize_with = "lenient")]
    pub is_gelly: bool,
    #[serde(deserialize_with = "lenient")]
    pub gelly_amount: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub cursor_size: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub default_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub exclusion_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub inner_color: Option<String>,
    /// Timing of plain pointer following.
    #[serde(deserialize_with = "lenient")]
    pub motion: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub stick: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub magnetic: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub color: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub size: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub text: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub exclusion: AnimationOptions,
    #[serde(deserialize_with = "lenient")]
    pub background_image: AnimationOptions,
}

impl CursorConfig {
    pub fn options(&self, category: ZoneCategory) -> &AnimationOptions {
        match category {
            ZoneCategory::Stick => &self.stick,
            ZoneCategory::Magnetic => &self.magnetic,
            ZoneCategory::Color => &self.color,
            ZoneCategory::Size => &self.size,
            ZoneCategory::Text => &self.text,
            ZoneCategory::BackgroundImage => &self.background_image,
            ZoneCategory::Exclusion => &self.exclusion,
        }
    }

    pub fn options_mut(&mut self, category: ZoneCategory) -> &mut AnimationOptions {
        match category {
            ZoneCategory::Stick => &mut self.stick,
            ZoneCategory::Magnetic => &mut self.magnetic,
            ZoneCategory::Color => &mut self.color,
            ZoneCategory::Size => &mut self.size,
            ZoneCategory::Text => &mut self.text,
            ZoneCategory::BackgroundImage => &mut self.background_image,
            ZoneCategory::Exclusion => &mut self.exclusion,
        }
    }

    pub fn resolve(&self) -> Settings {
        let cursor_size = self
            .cursor_size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_CURSOR_SIZE);
        let gelly_amount = self
            .gelly_amount
            .filter(|a| a.is_finite())
            .unwrap_or(DEFAULT_GELLY_AMOUNT);
        let fallback = |raw: &str| raw.parse::<Color>().unwrap_or(Color::WHITE);

        let categories = ZoneCategory::ALL.map(|category| {
            self.options(category)
                .resolve(AnimationConfig::default_for(category))
        });

        Settings {
            gelly: self.is_gelly.then_some(gelly_amount),
            cursor_size,
            default_color: Color::parse_or(self.default_color.as_deref(), fallback(DEFAULT_COLOR)),
            exclusion_color: Color::parse_or(
                self.exclusion_color.as_deref(),
                fallback(DEFAULT_EXCLUSION_COLOR),
            ),
            inner_color: Color::parse_or(
                self.inner_color.as_deref(),
                fallback(DEFAULT_INNER_COLOR),
            ),
            motion: self.motion.resolve(AnimationConfig::motion()),
            categories,
        }
    }
}

/// Resolved `{duration, easing, amount}` for one category.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub amount: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl AnimationConfig {
    fn new(duration: f32, amount: f32) -> Self {
        Self {
            enabled: true,
            amount,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn motion() -> Self {
        Self::new(DEFAULT_MOTION_DURATION, 0.0)
    }

    pub fn default_for(category: ZoneCategory) -> Self {
        match category {
            ZoneCategory::Stick => Self::new(DEFAULT_STICK_DURATION, DEFAULT_STICK_AMOUNT),
            ZoneCategory::Magnetic => {
                Self::new(DEFAULT_MAGNETIC_DURATION, DEFAULT_MAGNETIC_AMOUNT)
            }
            _ => Self::new(DEFAULT_ZONE_DURATION, 0.0),
        }
    }
}

/// Fixed, validated configuration. Read-only once the cursor is mounted,
/// except that a configuration conflict may switch gelly mode off.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Gelly amount when gelly mode is on.
    pub gelly: Option<f32>,
    pub cursor_size: f32,
    pub default_color: Color,
    pub exclusion_color: Color,
    pub inner_color: Color,
    pub motion: AnimationConfig,
    categories: [AnimationConfig; ZoneCategory::COUNT],
}

impl Settings {
    #[inline]
    pub fn animation(&self, category: ZoneCategory) -> &AnimationConfig {
        &self.categories[category.index()]
    }
}

impl Default for Settings {
    fn default() -> Self {
        CursorConfig::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{Curve, Direction};

    #[test]
    fn defaults_match_documented_values() {
        let s = Settings::default();
        assert_eq!(s.gelly, None);
        assert_eq!(s.cursor_size, 48.0);
        assert_eq!(s.motion.duration, 1.25);
        assert!(matches!(s.motion.easing, Easing::Named(Curve::Expo, Direction::Out)));
        assert_eq!(s.animation(ZoneCategory::Stick).amount, 0.09);
        assert_eq!(s.animation(ZoneCategory::Stick).duration, 0.7);
        assert_eq!(s.animation(ZoneCategory::Magnetic).amount, 0.2);
        assert_eq!(s.animation(ZoneCategory::Color).duration, 0.5);
        assert!(ZoneCategory::ALL.iter().all(|c| s.animation(*c).enabled));
    }

    #[test]
    fn gelly_amount_defaults_to_fifty() {
        let cfg = CursorConfig {
            is_gelly: true,
            ..CursorConfig::default()
        };
        assert_eq!(cfg.resolve().gelly, Some(50.0));
    }

    #[test]
    fn deserializes_camel_case_json() {
        let cfg: CursorConfig = serde_json::from_str(
            r##"{
                "isGelly": true,
                "gellyAmount": 30,
                "cursorSize": 64,
                "defaultColor": "#ff0000",
                "motion": { "duration": 0.8, "easing": "power2.out" },
                "stick": { "amount": 0.2 },
                "backgroundImage": { "enabled": false }
            }"##,
        )
        .unwrap();
        let s = cfg.resolve();
        assert_eq!(s.gelly, Some(30.0));
        assert_eq!(s.cursor_size, 64.0);
        assert_eq!(s.default_color, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.motion.duration, 0.8);
        assert!(matches!(s.motion.easing, Easing::Named(Curve::Power2, Direction::Out)));
        // Partial overrides keep the category's own defaults.
        assert_eq!(s.animation(ZoneCategory::Stick).amount, 0.2);
        assert_eq!(s.animation(ZoneCategory::Stick).duration, 0.7);
        assert!(!s.animation(ZoneCategory::BackgroundImage).enabled);
    }

    #[test]
    fn bad_values_degrade_to_defaults() {
        let cfg: CursorConfig = serde_json::from_str(
            r#"{
                "cursorSize": -4,
                "defaultColor": "not-a-color",
                "color": { "duration": -1, "easing": "wobble" }
            }"#,
        )
        .unwrap();
        let s = cfg.resolve();
        assert_eq!(s.cursor_size, 48.0);
        assert_eq!(s.default_color, "#111111".parse::<Color>().unwrap());
        assert_eq!(s.animation(ZoneCategory::Color).duration, 0.5);
        assert!(matches!(
            s.animation(ZoneCategory::Color).easing,
            Easing::Named(Curve::Expo, Direction::Out)
        ));
    }

    #[test]
    fn empty_object_is_a_valid_config() {
        let cfg: CursorConfig = serde_json::from_str("{}").unwrap();
        assert!(!cfg.is_gelly);
        assert_eq!(cfg.resolve().cursor_size, 48.0);
    }

    #[test]
    fn wrong_types_fall_back_per_field() {
        let cfg: CursorConfig = serde_json::from_str(
            r#"{
                "cursorSize": "48",
                "isGelly": "yes",
                "gellyAmount": 20,
                "defaultColor": 7,
                "motion": 5,
                "color": { "duration": "fast", "easing": 5, "amount": 0.3 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.cursor_size, None);
        assert!(!cfg.is_gelly);
        assert_eq!(cfg.gelly_amount, Some(20.0));
        assert_eq!(cfg.default_color, None);
        assert_eq!(cfg.color.amount, Some(0.3));

        let s = cfg.resolve();
        assert_eq!(s.cursor_size, 48.0);
        assert_eq!(s.motion.duration, 1.25);
        assert_eq!(s.animation(ZoneCategory::Color).duration, 0.5);
        assert!(matches!(
            s.animation(ZoneCategory::Color).easing,
            Easing::Named(Curve::Expo, Direction::Out)
        ));
    }
}
