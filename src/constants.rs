// DOM hooks and page-chrome styling used by the web frontend.

// Element lookups
pub const CANVAS_ID: &str = "bg-canvas";
pub const VIDEO_ID: &str = "birthday-video";
pub const PLACEHOLDER_SELECTOR: &str = ".video-placeholder";
pub const SECTION_SELECTOR: &str = "section";
pub const HERO_SELECTOR: &str = ".hero";

// Video placeholder display values
pub const PLACEHOLDER_HIDDEN: &str = "none";
pub const PLACEHOLDER_SHOWN: &str = "flex";

// Section fade-in
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const SECTION_HIDDEN_OPACITY: &str = "0";
pub const SECTION_HIDDEN_TRANSFORM: &str = "translateY(50px)";
pub const SECTION_SHOWN_OPACITY: &str = "1";
pub const SECTION_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const SECTION_TRANSITION: &str = "opacity 0.8s ease-out, transform 0.8s ease-out";

pub const GREETING: &str = "🎂 Happy Birthday Lauryn! 💜";
