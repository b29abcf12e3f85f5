//! Corpus loading from CSV files.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::corpus::Record;
use crate::error::{Result, SaporError};

/// Load corpus records from a CSV file.
///
/// The header row must name `dish`, `country`, and `description`
/// columns (case-insensitive); `recipe` and `image` columns are
/// optional presentation payload. Records are assigned sequential ids
/// in row order. Field validation happens at engine build, so a row
/// with an empty required field loads here but fails there with its id.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();

    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| SaporError::corpus(format!("cannot read {}: {e}", path.display())))?;

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let row_data = result?;
        records.push(columns.record(row as u64, &row_data));
    }

    Ok(records)
}

/// Positions of the known columns in the header row.
struct ColumnMap {
    dish: usize,
    country: usize,
    description: usize,
    recipe: Option<usize>,
    image: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<ColumnMap> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        };
        let required = |name: &str| {
            position(name)
                .ok_or_else(|| SaporError::corpus(format!("missing required column '{name}'")))
        };

        Ok(ColumnMap {
            dish: required("dish")?,
            country: required("country")?,
            description: required("description")?,
            recipe: position("recipe"),
            image: position("image"),
        })
    }

    fn record(&self, id: u64, row: &StringRecord) -> Record {
        let field = |index: usize| row.get(index).unwrap_or("").to_string();

        let mut record = Record::new(id, field(self.dish), field(self.country), field(self.description));
        if let Some(recipe) = self.recipe {
            record = record.with_recipe(field(recipe));
        }
        if let Some(image) = self.image {
            record = record.with_image(field(image));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_records_in_row_order() {
        let file = corpus_file(
            "dish,country,description\n\
             Paella,Spain,A rice dish with saffron\n\
             Masfouf,Tunisia,A sweet couscous dish\n",
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].dish, "Paella");
        assert_eq!(records[0].origin, "Spain");
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].dish, "Masfouf");
    }

    #[test]
    fn test_optional_payload_columns() {
        let file = corpus_file(
            "dish,country,description,recipe,image\n\
             Paella,Spain,A rice dish,https://example.com/paella,img/paella.jpg\n",
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(records[0].recipe, "https://example.com/paella");
        assert_eq!(records[0].image, "img/paella.jpg");
    }

    #[test]
    fn test_payload_columns_may_be_absent() {
        let file = corpus_file("dish,country,description\nPaella,Spain,A rice dish\n");

        let records = load_records(file.path()).unwrap();

        assert!(records[0].recipe.is_empty());
        assert!(records[0].image.is_empty());
    }

    #[test]
    fn test_missing_required_column() {
        let file = corpus_file("dish,description\nPaella,A rice dish\n");

        let err = load_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("country"));
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let file = corpus_file("Dish,Country,Description\nPaella,Spain,A rice dish\n");

        let records = load_records(file.path()).unwrap();
        assert_eq!(records[0].dish, "Paella");
    }

    #[test]
    fn test_columns_may_come_in_any_order() {
        let file = corpus_file(
            "description,dish,country\n\
             A rice dish,Paella,Spain\n",
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(records[0].dish, "Paella");
        assert_eq!(records[0].origin, "Spain");
        assert_eq!(records[0].description, "A rice dish");
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let file = corpus_file(
            "dish,country,description\n\
             Paella,Spain,\"A rice dish with saffron, seafood, and peas\"\n",
        );

        let records = load_records(file.path()).unwrap();
        assert_eq!(
            records[0].description,
            "A rice dish with saffron, seafood, and peas"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_records("/nonexistent/corpus.csv").unwrap_err();
        assert!(err.to_string().contains("corpus.csv"));
    }

    #[test]
    fn test_empty_corpus_loads_no_records() {
        let file = corpus_file("dish,country,description\n");

        let records = load_records(file.path()).unwrap();
        assert!(records.is_empty());
    }
}
