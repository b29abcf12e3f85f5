//! Corpus records and the documents built from them.
//!
//! A [`Record`] is one corpus entry with named, typed fields. The engine
//! validates records once at build time; after that they are immutable.
//! A [`Document`] is the record's searchable text (dish, origin, and
//! description joined with spaces), produced once per record when the
//! index is built. The `recipe` and `image` fields are presentation
//! payload: carried through hit lookups, never searched or interpreted.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaporError};

/// One corpus entry: a dish with its origin and descriptive text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable row identifier.
    pub id: u64,
    /// Dish name.
    pub dish: String,
    /// Country of origin.
    pub origin: String,
    /// Free-text description.
    pub description: String,
    /// Recipe link, opaque presentation payload.
    #[serde(default)]
    pub recipe: String,
    /// Image path, opaque presentation payload.
    #[serde(default)]
    pub image: String,
}

impl Record {
    /// Create a record from its searchable fields.
    pub fn new<S1, S2, S3>(id: u64, dish: S1, origin: S2, description: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Record {
            id,
            dish: dish.into(),
            origin: origin.into(),
            description: description.into(),
            recipe: String::new(),
            image: String::new(),
        }
    }

    /// Attach a recipe link.
    pub fn with_recipe<S: Into<String>>(mut self, recipe: S) -> Self {
        self.recipe = recipe.into();
        self
    }

    /// Attach an image path.
    pub fn with_image<S: Into<String>>(mut self, image: S) -> Self {
        self.image = image.into();
        self
    }

    /// Check that every searchable field carries text.
    ///
    /// The presentation fields may be empty; a record without a dish name,
    /// origin, or description cannot be meaningfully indexed and fails the
    /// whole build.
    pub fn validate(&self) -> Result<()> {
        if self.dish.trim().is_empty() {
            return Err(SaporError::corpus(format!(
                "record {} has an empty dish name",
                self.id
            )));
        }
        if self.origin.trim().is_empty() {
            return Err(SaporError::corpus(format!(
                "record {} has an empty origin",
                self.id
            )));
        }
        if self.description.trim().is_empty() {
            return Err(SaporError::corpus(format!(
                "record {} has an empty description",
                self.id
            )));
        }
        Ok(())
    }

    /// The text the index sees for this record.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.dish, self.origin, self.description)
    }
}

/// The searchable text of one record, produced at index build time.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Identifier of the record this document was built from.
    pub record_id: u64,
    /// Concatenated searchable fields.
    pub text: String,
}

impl Document {
    /// Build the document for a record.
    pub fn for_record(record: &Record) -> Self {
        Document {
            record_id: record.id,
            text: record.searchable_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new(7, "Paella", "Spain", "Rice with saffron")
            .with_recipe("https://example.com/paella")
            .with_image("images/paella.jpg");

        assert_eq!(record.id, 7);
        assert_eq!(record.dish, "Paella");
        assert_eq!(record.recipe, "https://example.com/paella");
        assert_eq!(record.image, "images/paella.jpg");
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        let record = Record::new(0, "Lablebi", "Tunisia", "Chickpea soup with cumin");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let record = Record::new(3, "", "Spain", "Cold tomato soup");
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("record 3"));
        assert!(err.to_string().contains("dish name"));

        let record = Record::new(4, "Gazpacho", "  ", "Cold tomato soup");
        assert!(record.validate().is_err());

        let record = Record::new(5, "Gazpacho", "Spain", "");
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_searchable_text_excludes_payload() {
        let record = Record::new(1, "Masfouf", "Tunisia", "Sweet couscous")
            .with_recipe("https://example.com/masfouf");

        let document = Document::for_record(&record);
        assert_eq!(document.record_id, 1);
        assert_eq!(document.text, "Masfouf Tunisia Sweet couscous");
        assert!(!document.text.contains("example.com"));
    }
}
