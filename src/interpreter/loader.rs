use std::{fs, path::PathBuf};

use crate::locale::Locale;

/// Turns a logical template path and a locale into template source.
///
/// A loader answers for exactly one (path, locale) pair per call; locale
/// fallback (exact locale, then the configured default) is applied by the
/// engine before it gives up, not by the loader and not by the lex/parse
/// pipeline. Loading happens once per cached pair, before lexing; no I/O
/// runs during evaluation.
pub trait Loader {
    /// Loads the source for `template_path` in `locale`, or `None` when
    /// this loader has no source for that pair.
    fn load_source(&self, template_path: &str, locale: &Locale) -> Option<String>;
}

/// Loads template source from a per-locale directory tree:
/// `<root>/<locale>/<template path>`.
///
/// ## Example layout
/// ```text
/// templates/
///   en-US/
///     greeting.html
///     master/master.html
///   pt-BR/
///     greeting.html
/// ```
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    /// Creates a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Loader for FileLoader {
    fn load_source(&self, template_path: &str, locale: &Locale) -> Option<String> {
        let path = self.root.join(locale.tag()).join(template_path);
        fs::read_to_string(path).ok()
    }
}
