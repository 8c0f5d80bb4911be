use std::{fs::File, io::BufReader, path::Path};

use dominant_core::Matrix;
use log::debug;
use serde_json::{Map, Value};

use crate::{MatrixLoadError, MatrixSource};

/// The dataset loaded when none is given.
pub const DEFAULT_DATASET: &str = "/A/value";

/// A JSON document holding one or more matrices.
///
/// Datasets are addressed by JSON pointer (RFC 6901), for example
/// `/A/value`. A dataset is either an array of equal-length rows:
///
/// ```json
/// { "A": { "value": [[2.0, 0.0], [0.0, 1.0]] } }
/// ```
///
/// or an object with a `shape` and a flat row-major `data` array:
///
/// ```json
/// { "A": { "value": { "shape": [2, 2], "data": [2.0, 0.0, 0.0, 1.0] } } }
/// ```
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: Value,
}

impl JsonSource {
    /// Reads and parses the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixLoadError::Io`] if the file cannot be read and
    /// [`MatrixLoadError::Parse`] if it is not valid JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MatrixLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MatrixLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document =
            serde_json::from_reader(BufReader::new(file)).map_err(MatrixLoadError::Parse)?;
        debug!("opened matrix document {}", path.display());
        Ok(Self { document })
    }

    /// Parses a JSON document from text.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixLoadError::Parse`] if `text` is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, MatrixLoadError> {
        let document = serde_json::from_str(text).map_err(MatrixLoadError::Parse)?;
        Ok(Self { document })
    }

    /// Wraps an already parsed document.
    #[must_use]
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Returns the underlying document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl MatrixSource for JsonSource {
    fn load(&self, dataset: &str) -> Result<Matrix, MatrixLoadError> {
        let value = self
            .document
            .pointer(dataset)
            .ok_or_else(|| MatrixLoadError::NotFound {
                dataset: dataset.to_owned(),
            })?;

        let Dataset { rows, cols, data } = match value {
            Value::Object(map) if map.contains_key("shape") => read_shaped(dataset, map)?,
            _ => read_nested(dataset, value)?,
        };

        if rows != cols {
            return Err(MatrixLoadError::NotSquare {
                dataset: dataset.to_owned(),
                rows,
                cols,
            });
        }

        let matrix =
            Matrix::from_row_major(rows, data).map_err(|source| MatrixLoadError::Matrix {
                dataset: dataset.to_owned(),
                source,
            })?;
        debug!("loaded {rows}x{cols} matrix from dataset {dataset}");
        Ok(matrix)
    }
}

/// A 2-D dataset flattened row-major.
struct Dataset {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Reads an array of rows.
fn read_nested(dataset: &str, value: &Value) -> Result<Dataset, MatrixLoadError> {
    let rank = rank_of(value);
    let Value::Array(rows) = value else {
        return Err(not_two_dimensional(dataset, rank));
    };
    if rank != 2 {
        return Err(not_two_dimensional(dataset, rank));
    }

    let cols = rows.first().and_then(Value::as_array).map_or(0, Vec::len);
    let mut data = Vec::new();
    for row in rows {
        let row = row
            .as_array()
            .filter(|row| row.len() == cols)
            .ok_or_else(|| MatrixLoadError::Ragged {
                dataset: dataset.to_owned(),
            })?;
        for entry in row {
            let index = data.len();
            data.push(number(dataset, entry, index)?);
        }
    }

    Ok(Dataset {
        rows: rows.len(),
        cols,
        data,
    })
}

/// Reads `{ "shape": [rows, cols], "data": [...] }`.
fn read_shaped(dataset: &str, map: &Map<String, Value>) -> Result<Dataset, MatrixLoadError> {
    let shape_path = format!("{dataset}/shape");
    let shape = map
        .get("shape")
        .and_then(Value::as_array)
        .ok_or_else(|| not_two_dimensional(dataset, 0))?;
    if shape.len() != 2 {
        return Err(not_two_dimensional(dataset, shape.len()));
    }
    let rows = dimension(&shape_path, &shape[0], 0)?;
    let cols = dimension(&shape_path, &shape[1], 1)?;

    let values = map
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| MatrixLoadError::NotFound {
            dataset: format!("{dataset}/data"),
        })?;
    if rows.checked_mul(cols) != Some(values.len()) {
        return Err(MatrixLoadError::ShapeMismatch {
            dataset: dataset.to_owned(),
            rows,
            cols,
            found: values.len(),
        });
    }

    let data = values
        .iter()
        .enumerate()
        .map(|(index, entry)| number(dataset, entry, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset { rows, cols, data })
}

/// Returns the nesting depth of arrays, following first elements.
fn rank_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.first().map_or(0, rank_of),
        _ => 0,
    }
}

fn number(dataset: &str, entry: &Value, index: usize) -> Result<f64, MatrixLoadError> {
    entry.as_f64().ok_or_else(|| MatrixLoadError::NonNumeric {
        dataset: dataset.to_owned(),
        index,
    })
}

fn dimension(dataset: &str, entry: &Value, index: usize) -> Result<usize, MatrixLoadError> {
    entry
        .as_u64()
        .and_then(|dim| usize::try_from(dim).ok())
        .ok_or_else(|| MatrixLoadError::NonNumeric {
            dataset: dataset.to_owned(),
            index,
        })
}

fn not_two_dimensional(dataset: &str, rank: usize) -> MatrixLoadError {
    MatrixLoadError::NotTwoDimensional {
        dataset: dataset.to_owned(),
        rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use approx::assert_relative_eq;
    use dominant_core::MatrixError;
    use serde_json::json;

    fn load(document: Value, dataset: &str) -> Result<Matrix, MatrixLoadError> {
        JsonSource::from_value(document).load(dataset)
    }

    #[test]
    fn opens_file_and_loads_default_dataset() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"A": {{"value": [[2.0, 0.0], [0.0, 1.0]]}}}}"#).expect("write");

        let source = JsonSource::open(file.path()).expect("valid document");
        let matrix = source.load(DEFAULT_DATASET).expect("valid dataset");

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.as_slice(), &[2.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");

        let err = JsonSource::open(&path).unwrap_err();

        assert!(matches!(err, MatrixLoadError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            JsonSource::parse("{ not json"),
            Err(MatrixLoadError::Parse(_))
        ));
    }

    #[test]
    fn loads_integer_entries_and_custom_dataset() {
        let document = json!({ "matrices": { "small": [[1, 2], [3, 4]] } });

        let matrix = load(document, "/matrices/small").expect("valid dataset");

        assert_relative_eq!(matrix.get(1, 0).expect("in range"), 3.0);
    }

    #[test]
    fn loads_shaped_dataset() {
        let document = json!({ "A": { "value": { "shape": [2, 2], "data": [4, 1, 2, 3] } } });

        let matrix = load(document, DEFAULT_DATASET).expect("valid dataset");

        assert_eq!(matrix.as_slice(), &[4.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let err = load(json!({ "B": [[1.0]] }), DEFAULT_DATASET).unwrap_err();

        assert!(matches!(err, MatrixLoadError::NotFound { dataset } if dataset == "/A/value"));
    }

    #[test]
    fn rejects_wrong_rank() {
        let err = load(json!({ "v": [1.0, 2.0] }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::NotTwoDimensional { rank: 1, .. }));

        let err = load(json!({ "v": [[[1.0]]] }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::NotTwoDimensional { rank: 3, .. }));

        let err = load(json!({ "v": 1.0 }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::NotTwoDimensional { rank: 0, .. }));

        let err = load(json!({ "v": { "shape": [4], "data": [1, 2, 3, 4] } }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::NotTwoDimensional { rank: 1, .. }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = load(json!({ "v": [[1.0, 2.0], [3.0]] }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::Ragged { .. }));
    }

    #[test]
    fn rejects_non_numeric_entries() {
        let err = load(json!({ "v": [[1.0, "x"], [3.0, 4.0]] }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::NonNumeric { index: 1, .. }));
    }

    #[test]
    fn rejects_non_square_dataset() {
        let err = load(json!({ "v": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]] }), "/v").unwrap_err();
        assert!(matches!(
            err,
            MatrixLoadError::NotSquare {
                rows: 2,
                cols: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = load(json!({ "v": { "shape": [2, 2], "data": [1, 2, 3] } }), "/v").unwrap_err();
        assert!(matches!(err, MatrixLoadError::ShapeMismatch { found: 3, .. }));
    }

    #[test]
    fn shape_whose_product_overflows_is_a_mismatch() {
        let huge = 1u64 << 32;
        let document = json!({ "v": { "shape": [huge, huge], "data": [] } });

        let err = load(document, "/v").unwrap_err();

        assert!(matches!(
            err,
            MatrixLoadError::ShapeMismatch { found: 0, .. } | MatrixLoadError::NonNumeric { .. }
        ));
    }

    #[test]
    fn short_rows_after_a_long_first_row_are_ragged() {
        let mut rows = vec![vec![0.0; 1000]];
        rows.extend(std::iter::repeat_n(vec![1.0], 1000));

        let err = load(json!({ "v": rows }), "/v").unwrap_err();

        assert!(matches!(err, MatrixLoadError::Ragged { .. }));
    }

    #[test]
    fn empty_dataset_is_an_invalid_matrix() {
        let err = load(json!({ "v": { "shape": [0, 0], "data": [] } }), "/v").unwrap_err();
        assert!(matches!(
            err,
            MatrixLoadError::Matrix {
                source: MatrixError::Empty,
                ..
            }
        ));
    }
}
