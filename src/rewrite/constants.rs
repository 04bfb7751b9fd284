/// Extension appended to a file path to form its backup path
pub const BACKUP_EXTENSION: &str = ".backup";
/// Public directory holding the desktop/tablet encodes
pub const DESKTOP_VIDEO_DIR: &str = "/assets/video/responsive/desktop";
/// Public directory holding the mobile encodes
pub const MOBILE_VIDEO_DIR: &str = "/assets/video/responsive/mobile";
/// MIME type written on every generated source
pub const VIDEO_MIME_TYPE: &str = "video/mp4";
/// Smallest viewport width (px) that receives the desktop source
pub const DESKTOP_MIN_WIDTH_PX: u32 = 769;
/// Text shown by browsers without video support
pub const FALLBACK_TEXT: &str = "Your browser does not support video playback.";
