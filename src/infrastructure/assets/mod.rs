mod cloudinary;

pub use cloudinary::{CloudinaryAssetStore, CloudinaryConfig};
