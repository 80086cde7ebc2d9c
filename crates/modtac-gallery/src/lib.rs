//! Image listing for the gallery strip and the HTTP endpoint that serves it.

pub mod listing;
pub mod natural;
pub mod server;

pub use listing::{image_urls, is_image, list_or_empty, DirectoryGallery, GalleryResponse, ALLOWED_EXTENSIONS};
pub use natural::natural_cmp;
pub use server::{
    respond, Accept, GalleryServer, RequestHead, Response, DEFAULT_HEAD_TIMEOUT, GALLERY_ROUTE,
};
