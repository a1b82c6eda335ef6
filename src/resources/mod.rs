//! Module handling the resources used for meme composition.

mod filesystem;
mod fonts;

pub use self::filesystem::{BytesLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader, FontProvider,
                      FILE_EXTENSION as FONT_FILE_EXTENSION};


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err>;
}
