//! Static asset loading

mod fs_image_loader;

pub use fs_image_loader::FsImageLoader;
