use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::loader::CatalogLoadError;
use crate::domain::product::RowIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    Content,
    Collaborative,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => f.write_str("content"),
            Self::Collaborative => f.write_str("collaborative"),
        }
    }
}

/// Square score table stored row-major; `row(i)[j]` is the similarity of row `i` to row `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    kind: MatrixKind,
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn from_rows(kind: MatrixKind, rows: Vec<Vec<f64>>) -> Result<Self, CatalogLoadError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(CatalogLoadError::NotSquare {
                    matrix: kind,
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            scores.extend(values);
        }

        Ok(Self { kind, size, scores })
    }

    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Scores of every catalog row against `anchor`, in row order.
    pub fn row(&self, anchor: RowIndex) -> Option<&[f64]> {
        if anchor.0 >= self.size {
            return None;
        }
        let start = anchor.0 * self.size;
        self.scores.get(start..start + self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::{MatrixKind, SimilarityMatrix};
    use crate::catalog::loader::CatalogLoadError;
    use crate::domain::product::RowIndex;

    #[test]
    fn rows_are_addressed_by_row_index() {
        let matrix = SimilarityMatrix::from_rows(
            MatrixKind::Content,
            vec![vec![1.0, 0.2], vec![0.3, 1.0]],
        )
        .expect("square matrix");

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.row(RowIndex(1)), Some(&[0.3, 1.0][..]));
        assert_eq!(matrix.row(RowIndex(2)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let error = SimilarityMatrix::from_rows(
            MatrixKind::Collaborative,
            vec![vec![1.0, 0.2], vec![0.3]],
        )
        .expect_err("ragged matrix");

        assert!(matches!(
            error,
            CatalogLoadError::NotSquare { row: 1, expected: 2, found: 1, .. }
        ));
    }
}
