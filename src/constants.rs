/// DOM names and frame-clock limits for the web overlay.
///
/// The stylesheet below composes the per-frame custom properties into one
/// transform, so the engine only ever writes plain numbers.
// Overlay node ids and classes
pub const OVERLAY_ID: &str = "cursor-overlay";
pub const INNER_CLASS: &str = "cursor-overlay__inner";
pub const STYLE_ID: &str = "cursor-overlay-style";

// Custom properties written every frame
pub const VAR_X: &str = "--cursor-x";
pub const VAR_Y: &str = "--cursor-y";
pub const VAR_ROTATE: &str = "--cursor-rotate";
pub const VAR_SCALE_X: &str = "--cursor-scale-x";
pub const VAR_SCALE_Y: &str = "--cursor-scale-y";
pub const VAR_REVEAL: &str = "--cursor-reveal";

// Above almost everything a page stacks
pub const OVERLAY_Z_INDEX: i32 = 2_147_483_000;

// A hidden tab can stall rAF for seconds; clamp so tweens don't jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

pub const OVERLAY_CSS: &str = "\
#cursor-overlay{position:fixed;left:0;top:0;pointer-events:none;border-radius:50%;\
display:flex;align-items:center;justify-content:center;overflow:hidden;\
transform:translate(var(--cursor-x,0px),var(--cursor-y,0px)) translate(-50%,-50%) \
rotate(var(--cursor-rotate,0deg)) scale(var(--cursor-scale-x,1),var(--cursor-scale-y,1));}\
.cursor-overlay__inner{width:100%;height:100%;display:flex;align-items:center;\
justify-content:center;border-radius:50%;background-size:cover;background-position:center;\
transform:rotate(var(--cursor-rotate,0deg)) scale(var(--cursor-reveal,0));\
opacity:0;}";
