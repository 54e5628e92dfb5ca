use crate::locale::Locale;

/// A transform applied to every plain text value before emission.
pub type Treatment = fn(&str) -> String;

/// Render-time configuration: the default locale and the text treatment.
///
/// The treatment hook runs on every plain text identifier resolution before
/// the text reaches the output (escaping is the typical use). It never runs
/// on locale-sensitive values, which arrive already formatted, and it never
/// runs on literal template text. The default treatment is identity.
///
/// ## Example
/// ```
/// use brook::Configuration;
///
/// fn shout(text: &str) -> String {
///     text.to_uppercase()
/// }
///
/// let configuration = Configuration::default().with_treatment(shout);
///
/// assert_eq!(configuration.apply_treatment("quiet"), "QUIET");
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    default_locale: Locale,
    treatment:      Option<Treatment>,
}

impl Configuration {
    /// Replaces the default locale, used when a render call names none and
    /// as the fallback locale when loading template source.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Installs a treatment hook for plain text values.
    #[must_use]
    pub fn with_treatment(mut self, treatment: Treatment) -> Self {
        self.treatment = Some(treatment);
        self
    }

    /// The locale used when a render call names none.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Runs the treatment hook on `text`, or returns it unchanged when no
    /// hook is installed.
    #[must_use]
    pub fn apply_treatment(&self, text: &str) -> String {
        match self.treatment {
            Some(treatment) => treatment(text),
            None => text.to_owned(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self { default_locale: Locale::default(),
               treatment:      None, }
    }
}
