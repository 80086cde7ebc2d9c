pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::{
    AppConfig, GalleryConfig, GridConfig, IntroConfig, LayoutConfig, ScrollConfig,
    TypewriterConfig,
};
pub use error::ModtacError;
pub use result::ModtacResult;
pub use traits::{Observer, Source};
