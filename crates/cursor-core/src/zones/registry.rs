use super::{ZoneCategory, ZoneDescriptor, ZoneId, ZoneParams};
use crate::color::Color;
use crate::config::Settings;
use crate::error::CursorError;
use crate::host::Host;

/// Zones found in the view tree at mount time. Zones added to the tree later
/// are not picked up.
#[derive(Clone, Debug)]
pub struct ZoneRegistry<E> {
    zones: Vec<ZoneDescriptor<E>>,
}

impl<E> Default for ZoneRegistry<E> {
    fn default() -> Self {
        Self { zones: Vec::new() }
    }
}

impl<E: Clone> ZoneRegistry<E> {
    /// Query the host for every enabled category and read each zone's
    /// parameter. Ids follow category order, then document order.
    pub fn discover<H>(host: &H, settings: &Settings) -> Self
    where
        H: Host<Element = E>,
    {
        let mut zones = Vec::new();
        for category in ZoneCategory::ALL {
            if !settings.animation(category).enabled {
                continue;
            }
            for element in host.query_zones(category.marker()) {
                let raw = host.attribute(&element, category.marker());
                let params = parse_params(category, raw.as_deref(), settings);
                zones.push(ZoneDescriptor {
                    id: ZoneId(zones.len()),
                    element,
                    params,
                });
            }
        }
        Self { zones }
    }

    pub fn get(&self, id: ZoneId) -> Option<&ZoneDescriptor<E>> {
        self.zones.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneDescriptor<E>> {
        self.zones.iter()
    }

    pub fn count(&self, category: ZoneCategory) -> usize {
        self.zones.iter().filter(|z| z.category() == category).count()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

fn parse_size(raw: &str) -> Result<f32, CursorError> {
    let number = raw.trim().trim_end_matches("px").trim();
    match number.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(CursorError::InvalidSize(raw.to_string())),
    }
}

/// Interpret a marker attribute. Missing or malformed values fall back to
/// the configured defaults; discovery never fails.
pub(crate) fn parse_params(
    category: ZoneCategory,
    raw: Option<&str>,
    settings: &Settings,
) -> ZoneParams {
    let value = raw.map(str::trim).unwrap_or("");
    match category {
        ZoneCategory::Stick => ZoneParams::Stick {
            child: (!value.is_empty()).then(|| value.to_string()),
        },
        ZoneCategory::Magnetic => ZoneParams::Magnetic,
        ZoneCategory::Color => {
            ZoneParams::Color(Color::parse_or(Some(value), settings.default_color))
        }
        ZoneCategory::Size => ZoneParams::Size(match parse_size(value) {
            Ok(size) => size,
            Err(e) => {
                if !value.is_empty() {
                    log::warn!("{e}; using {}px", settings.cursor_size);
                }
                settings.cursor_size
            }
        }),
        ZoneCategory::Text => ZoneParams::Text(value.to_string()),
        ZoneCategory::BackgroundImage => ZoneParams::BackgroundImage(value.to_string()),
        ZoneCategory::Exclusion => ZoneParams::Exclusion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_carry_their_category() {
        let s = Settings::default();
        for category in ZoneCategory::ALL {
            for raw in [None, Some(""), Some("garbage")] {
                assert_eq!(parse_params(category, raw, &s).category(), category);
            }
        }
    }

    #[test]
    fn stick_params_treat_empty_selector_as_self() {
        let s = Settings::default();
        assert_eq!(
            parse_params(ZoneCategory::Stick, Some(""), &s),
            ZoneParams::Stick { child: None }
        );
        assert_eq!(
            parse_params(ZoneCategory::Stick, Some(" .dot "), &s),
            ZoneParams::Stick {
                child: Some(".dot".into())
            }
        );
    }

    #[test]
    fn size_params_accept_px_suffix_and_fall_back() {
        let s = Settings::default();
        assert_eq!(
            parse_params(ZoneCategory::Size, Some("120px"), &s),
            ZoneParams::Size(120.0)
        );
        assert_eq!(
            parse_params(ZoneCategory::Size, Some("80"), &s),
            ZoneParams::Size(80.0)
        );
        assert_eq!(
            parse_params(ZoneCategory::Size, Some("huge"), &s),
            ZoneParams::Size(48.0)
        );
        assert_eq!(
            parse_params(ZoneCategory::Size, None, &s),
            ZoneParams::Size(48.0)
        );
    }

    #[test]
    fn missing_color_and_image_degrade_to_defaults() {
        let s = Settings::default();
        assert_eq!(
            parse_params(ZoneCategory::Color, None, &s),
            ZoneParams::Color(s.default_color)
        );
        assert_eq!(
            parse_params(ZoneCategory::BackgroundImage, None, &s),
            ZoneParams::BackgroundImage(String::new())
        );
        assert_eq!(
            parse_params(ZoneCategory::Text, Some("Open"), &s),
            ZoneParams::Text("Open".into())
        );
    }
}
