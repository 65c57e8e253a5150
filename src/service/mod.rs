pub mod picture_loader;
