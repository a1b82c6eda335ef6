//! Module for loading the fonts used to render captions.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;
use log::{debug, warn};
use thiserror::Error;

use crate::util::cache::ThreadSafeCache;
use super::Loader;
use super::filesystem::{self, BytesLoader};


pub const FILE_EXTENSION: &str = "ttf";

/// How many distinct fonts are retained per provider.
const FONT_CACHE_CAPACITY: usize = 16;

/// The font compiled into the binary and substituted
/// whenever a named font cannot be loaded.
static BUILTIN_FONT_BYTES: &[u8] = include_bytes!("../../fonts/sans-bold.ttf");

lazy_static! {
    static ref BUILTIN_FONT: rusttype::Font<'static> =
        rusttype::Font::try_from_bytes(BUILTIN_FONT_BYTES)
            .expect("bundled fallback font must parse");
}


/// Font that can be used to render meme captions.
pub struct Font(rusttype::Font<'static>);

impl Font {
    /// The built-in fallback font.
    #[inline]
    pub fn builtin() -> Self {
        Font(BUILTIN_FONT.clone())
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyphs)", self.0.glyph_count())
    }
}


/// Error that may occur while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// Error while reading the font file.
    #[error("cannot read font file: {0}")]
    Io(#[from] io::Error),
    /// The file was read but doesn't contain a usable font.
    #[error("no usable font in the file for `{0}`")]
    Unusable(String),
}


/// Loader of fonts from a directory of TTF files.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::for_extension(directory, FILE_EXTENSION),
        }
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load(&self, name: &str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name)?;
        match rusttype::Font::try_from_vec(bytes) {
            Some(font) => {
                debug!("Font `{}` loaded successfully", name);
                Ok(Font(font))
            }
            None => Err(FontError::Unusable(name.to_owned())),
        }
    }
}


/// Resolver of font names for the compositor.
///
/// Resolution has two deterministic tiers: a font of the given name loaded
/// from the font directory, and -- should that fail for any reason --
/// the built-in fallback font. It therefore never fails outward,
/// though fallback substitutions are logged and counted.
///
/// Resolved fonts (including substituted ones) are kept in a cache
/// scoped to this provider, i.e. for the duration of one batch run.
pub struct FontProvider {
    loader: Option<FontLoader>,
    cache: ThreadSafeCache<String, Font>,
    fallbacks: AtomicUsize,
}

impl FontProvider {
    /// Create a provider resolving font names against given directory.
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Self {
        if !filesystem::has_any_with_extension(&font_directory, FILE_EXTENSION) {
            warn!("Font directory `{}` contains no .{} files; \
                   every caption will use the built-in font",
                font_directory.as_ref().display(), FILE_EXTENSION);
        }
        FontProvider{
            loader: Some(FontLoader::new(font_directory)),
            cache: ThreadSafeCache::new(FONT_CACHE_CAPACITY),
            fallbacks: AtomicUsize::new(0),
        }
    }

    /// Create a provider that always resolves to the built-in font.
    pub fn builtin_only() -> Self {
        FontProvider{
            loader: None,
            cache: ThreadSafeCache::new(FONT_CACHE_CAPACITY),
            fallbacks: AtomicUsize::new(0),
        }
    }
}

impl FontProvider {
    /// Resolve a font name, falling back on the built-in font if necessary.
    pub fn resolve(&self, name: &str) -> Arc<Font> {
        let key = name.to_owned();
        if let Some(font) = self.cache.get(&key) {
            return font;
        }

        let font = match self.loader.as_ref().map(|l| l.load(name)) {
            Some(Ok(font)) => font,
            Some(Err(e)) => {
                warn!("Cannot load font `{}`, substituting the built-in one: {}", name, e);
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                Font::builtin()
            }
            None => Font::builtin(),
        };
        self.cache.put(key, font)
    }

    /// How many resolutions have been answered with the fallback font so far.
    ///
    /// Those indicate degraded output quality, not failures.
    pub fn fallback_count(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Reference to the provider's font cache, for examining its statistics.
    pub fn cache(&self) -> &ThreadSafeCache<String, Font> {
        &self.cache
    }
}

impl fmt::Debug for FontProvider {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FontProvider")
            .field("loader", &self.loader)
            .field("cache", &self.cache)
            .field("fallbacks", &self.fallback_count())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::{Font, FontProvider};

    #[test]
    fn builtin_font_parses() {
        let font = Font::builtin();
        assert!(font.glyph_count() > 0);
    }

    #[test]
    fn unknown_name_falls_back() {
        let provider = FontProvider::builtin_only();
        let font = provider.resolve("no-such-font");
        assert!(font.glyph_count() > 0);
    }

    #[test]
    fn missing_directory_falls_back_and_counts() {
        let provider = FontProvider::new("/definitely/no/such/directory");
        provider.resolve("whatever");
        assert_eq!(1, provider.fallback_count());
    }

    #[test]
    fn resolution_is_cached() {
        let provider = FontProvider::builtin_only();
        provider.resolve("sans-bold");
        provider.resolve("sans-bold");
        assert_eq!(1, provider.cache().len());
        assert_eq!(1, provider.cache().hits());
    }
}
