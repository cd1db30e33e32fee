/// Page structure and class names the effect layer drives.
///
/// The stylesheet owns every animation; these names are the contract between
/// it and the DOM surface.

// Element ids
pub const BACKGROUND_ID: &str = "background";
pub const STARFIELD_ID: &str = "starfield";
pub const GALLERY_CONTAINER_ID: &str = "gallery-image-container";

// Star classes
pub const STAR_CLASS: &str = "star";
pub const SPARKLE_CLASS: &str = "sparkle";

// Wave visuals
pub const WAVE_CLASS: &str = "wave"; // on #background and #starfield while a wave runs
pub const RIPPLE_CLASS: &str = "ripple";
pub const WAVE_LAYER_CLASS: &str = "wave-layer";

// Gallery
pub const GALLERY_MODE_CLASS: &str = "gallery-mode"; // on <body>
pub const GALLERY_EXIT_CLASS: &str = "gallery-exit"; // on <body>
pub const GALLERY_CONTAINER_CLASS: &str = "gallery-image-container";
pub const GALLERY_IMAGE_CLASS: &str = "gallery-image";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const GALLERY_IMAGE_ALT: &str = "Gallery Image";

// CSS custom properties
pub const CLICK_X_VAR: &str = "--click-x";
pub const CLICK_Y_VAR: &str = "--click-y";
pub const MAX_SIZE_VAR: &str = "--max-size";
pub const GALLERY_CLICK_X_VAR: &str = "--gallery-click-x";
pub const GALLERY_CLICK_Y_VAR: &str = "--gallery-click-y";

/// Images the double-click gallery cycles through.
pub const GALLERY_IMAGES: &[&str] = &["/img/qiqi-ice.jpg"];
