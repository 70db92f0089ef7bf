pub const GALLERY_CLI: &str = "gallery";
