use anyhow::anyhow;
use cursor_core::{CursorConfig, Easing, ZoneCategory};
use wasm_bindgen::{JsCast, JsValue};

/// Options key each category's animation block lives under.
fn options_key(category: ZoneCategory) -> &'static str {
    match category {
        ZoneCategory::Stick => "stick",
        ZoneCategory::Magnetic => "magnetic",
        ZoneCategory::Color => "color",
        ZoneCategory::Size => "size",
        ZoneCategory::Text => "text",
        ZoneCategory::BackgroundImage => "backgroundImage",
        ZoneCategory::Exclusion => "exclusion",
    }
}

/// Read `options.<key>.easing` when it is a JS function.
fn function_easing(options: &JsValue, key: &str) -> Option<Easing> {
    let block = js_sys::Reflect::get(options, &JsValue::from_str(key)).ok()?;
    if !block.is_object() {
        return None;
    }
    let f = js_sys::Reflect::get(&block, &JsValue::from_str("easing"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some(Easing::custom(move |t| {
        f.call1(&JsValue::NULL, &JsValue::from_f64(t as f64))
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(t, |v| v as f32)
    }))
}

/// Build a [`CursorConfig`] from the object passed to `mountCursor`.
///
/// Plain data goes through JSON. Easing functions don't survive that, so they
/// are picked up separately and override whatever the JSON pass decided.
pub fn from_js(options: &JsValue) -> anyhow::Result<CursorConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(CursorConfig::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| anyhow!("options are not serializable: {e:?}"))?
        .into();
    let mut config: CursorConfig = serde_json::from_str(&json)?;

    if let Some(easing) = function_easing(options, "motion") {
        config.motion.easing = Some(easing);
    }
    for category in ZoneCategory::ALL {
        if let Some(easing) = function_easing(options, options_key(category)) {
            config.options_mut(category).easing = Some(easing);
        }
    }
    Ok(config)
}
