// SPDX-License-Identifier: MPL-2.0
//! Upload form state.
//!
//! A submission needs a category and a picked file; the form tracks both and
//! only hands the pair over once complete. The engine never touches file
//! contents, it just carries the embedder's [`ImageRef`] through to the
//! registry on submit.

use crate::domain::{Category, ImageRef};

/// Caption shown while no file has been picked.
pub const NO_FILE_SELECTED_LABEL: &str = "No file selected";

/// File picked into the form, with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    name: String,
    image: ImageRef,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, image: ImageRef) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

/// State of the add-image form.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    category: Option<Category>,
    file: Option<PendingFile>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn select_file(&mut self, name: impl Into<String>, image: ImageRef) {
        self.file = Some(PendingFile::new(name, image));
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn file(&self) -> Option<&PendingFile> {
        self.file.as_ref()
    }

    /// Caption for the file slot.
    ///
    /// Falls back to [`NO_FILE_SELECTED_LABEL`] until a file is picked.
    #[must_use]
    pub fn file_label(&self) -> &str {
        self.file
            .as_ref()
            .map(PendingFile::name)
            .unwrap_or(NO_FILE_SELECTED_LABEL)
    }

    /// Whether the submit action should be enabled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && self.file.is_some()
    }

    /// Takes the completed submission out of the form and resets it.
    ///
    /// Returns `None` without side effects while the form is incomplete.
    pub fn submit(&mut self) -> Option<(Category, ImageRef)> {
        if !self.is_complete() {
            return None;
        }
        let category = self.category.take()?;
        let file = self.file.take()?;
        Some((category, file.image))
    }

    pub fn reset(&mut self) {
        self.category = None;
        self.file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_incomplete() {
        let form = UploadForm::new();
        assert!(!form.is_complete());
        assert_eq!(form.file_label(), NO_FILE_SELECTED_LABEL);
    }

    #[test]
    fn category_alone_is_not_enough() {
        let mut form = UploadForm::new();
        form.select_category(Category::Nature);
        assert!(!form.is_complete());
    }

    #[test]
    fn file_alone_is_not_enough() {
        let mut form = UploadForm::new();
        form.select_file("tree.jpg", ImageRef::new("blob:tree"));
        assert!(!form.is_complete());
        assert_eq!(form.file_label(), "tree.jpg");
    }

    #[test]
    fn both_fields_complete_the_form() {
        let mut form = UploadForm::new();
        form.select_category(Category::People);
        form.select_file("crowd.jpg", ImageRef::new("blob:crowd"));
        assert!(form.is_complete());
    }

    #[test]
    fn clearing_the_file_disables_submit_again() {
        let mut form = UploadForm::new();
        form.select_category(Category::People);
        form.select_file("crowd.jpg", ImageRef::new("blob:crowd"));
        form.clear_file();

        assert!(!form.is_complete());
        assert_eq!(form.file_label(), NO_FILE_SELECTED_LABEL);
    }

    #[test]
    fn submit_on_incomplete_form_changes_nothing() {
        let mut form = UploadForm::new();
        form.select_category(Category::Nature);

        assert!(form.submit().is_none());
        assert_eq!(form.category(), Some(Category::Nature));
    }

    #[test]
    fn submit_hands_over_the_pair_and_resets() {
        let mut form = UploadForm::new();
        form.select_category(Category::StreetArt);
        form.select_file("mural.png", ImageRef::new("blob:mural"));

        let (category, image) = form.submit().expect("complete form submits");
        assert_eq!(category, Category::StreetArt);
        assert_eq!(image.as_str(), "blob:mural");

        assert!(!form.is_complete());
        assert!(form.category().is_none());
        assert_eq!(form.file_label(), NO_FILE_SELECTED_LABEL);
    }
}
