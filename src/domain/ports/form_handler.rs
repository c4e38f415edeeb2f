//! FormHandler port
//!
//! Contract for creating and submitting forms for one or many objects.
//! No implementation ships with this crate.

pub trait FormHandler {
    /// Form configuration (form type, method, options)
    type Config;
    /// Object bound to a form
    type Object;
    /// Submitted form
    type Form;
    type Error: std::error::Error;

    /// Create and submit the form for one object.
    fn process_form(
        &self,
        config: &Self::Config,
        object: Self::Object,
    ) -> Result<Self::Form, Self::Error>;

    /// Create and submit one form per object.
    ///
    /// `limit` caps the number of rows; `None` falls back to
    /// [`FormHandler::default_limit`].
    fn process_forms(
        &self,
        config: &Self::Config,
        objects: Vec<Self::Object>,
        limit: Option<usize>,
    ) -> Result<Vec<Self::Form>, Self::Error>;

    /// Default row limit, `None` when unlimited
    fn default_limit(&self) -> Option<usize>;
}
