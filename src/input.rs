//! Loader for the plain text dataset format.
//!
//! ```text
//! total_points total_values K max_iterations has_name
//! <value> ... <value> [name]
//! ...
//! ```
//! Tokens are whitespace separated and may be spread over lines freely. Points get the ids `0..total_points`
//! in file order.

use crate::{memory::*, InputError, KMeans, Point};
use num::NumCast;
use std::{fs::File, io::{BufRead, BufReader}, path::Path, str::SplitWhitespace};

/// Points together with the run parameters given in the dataset header.
#[derive(Clone, Debug)]
pub struct Dataset<T: Primitive> {
    pub points: Vec<Point<T>>,
    pub sample_dims: usize,
    pub k: usize,
    pub max_iter: usize,
}
impl<T: Primitive> Dataset<T> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let sample_cnt = header_field(&mut tokens, "total_points")?;
        let sample_dims = header_field(&mut tokens, "total_values")?;
        let k = match header_field(&mut tokens, "K")? {
            0 => return Err(InputError::InvalidHeader { field: "K", token: "0".to_string() }),
            k => k,
        };
        let max_iter = header_field(&mut tokens, "max_iterations")?;
        let has_name = header_field(&mut tokens, "has_name")? != 0;

        let mut points = Vec::new();
        for id in 0..sample_cnt {
            let mut values = Vec::new();
            for _ in 0..sample_dims {
                let token = tokens.next().ok_or(InputError::UnexpectedEof { point: id })?;
                values.push(parse_value(token).ok_or_else(|| InputError::InvalidValue { point: id, token: token.to_string() })?);
            }
            let point = if has_name {
                let name = tokens.next().ok_or(InputError::UnexpectedEof { point: id })?;
                Point::with_name(id, values, name)
            } else {
                Point::new(id, values)
            };
            points.push(point);
        }
        if tokens.next().is_some() {
            log::warn!("ignoring trailing input after {} points", sample_cnt);
        }

        Ok(Self { points, sample_dims, k, max_iter })
    }

    /// Hand the points over to a new [`KMeans`] instance.
    pub fn into_kmeans(self) -> KMeans<T> {
        KMeans::new(self.points, self.sample_dims)
    }
}

fn header_field(tokens: &mut SplitWhitespace<'_>, field: &'static str) -> Result<usize, InputError> {
    let token = tokens.next().ok_or(InputError::MissingHeader)?;
    token.parse().map_err(|_| InputError::InvalidHeader { field, token: token.to_string() })
}

fn parse_value<T: Primitive>(token: &str) -> Option<T> {
    token.parse::<f64>().ok().and_then(<T as NumCast>::from)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_points() {
        let input = "3 2 2 100 1\n\
                     1.0 2.0 alpha\n\
                     4.5 -1 beta\n\
                     0 0\n gamma\n";
        let ds: Dataset<f64> = Dataset::from_reader(input.as_bytes()).unwrap();
        assert_eq!((ds.sample_dims, ds.k, ds.max_iter), (2, 2, 100));
        assert_eq!(ds.points.len(), 3);
        assert_eq!(ds.points[1].values(), &[4.5, -1.0]);
        assert_eq!(ds.points[1].name(), Some("beta"));
        assert_eq!(ds.points[2].name(), Some("gamma"));
        assert_eq!(ds.points[2].id(), 2);
        assert!(ds.points.iter().all(|p| p.cluster().is_none()));
    }

    #[test]
    fn unnamed_points() {
        let ds: Dataset<f32> = Dataset::from_reader("2 3 1 5 0 1 2 3 4 5 6".as_bytes()).unwrap();
        assert_eq!(ds.points[0].values(), &[1.0, 2.0, 3.0]);
        assert_eq!(ds.points[1].values(), &[4.0, 5.0, 6.0]);
        assert_eq!(ds.points[1].name(), None);
        assert_eq!(ds.into_kmeans().sample_cnt(), 2);
    }

    #[test]
    fn malformed_input() {
        let err = Dataset::<f64>::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::MissingHeader));

        let err = Dataset::<f64>::from_reader("2 x 1 5 0".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::InvalidHeader { field: "total_values", .. }));

        let err = Dataset::<f64>::from_reader("2 1 1 5 0 1.5".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { point: 1 }));

        let err = Dataset::<f64>::from_reader("2 1 1 5 1 1.5".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { point: 0 }));

        let err = Dataset::<f64>::from_reader("1 2 1 5 0 1.5 abc".as_bytes()).unwrap_err();
        match err {
            InputError::InvalidValue { point, token } => assert_eq!((point, token.as_str()), (0, "abc")),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn oversized_counts_run_out_of_input() {
        let err = Dataset::<f64>::from_reader("18446744073709551615 1 1 1 0 1.0".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { point: 1 }));

        let err = Dataset::<f64>::from_reader("1 18446744073709551615 1 1 0 1.0".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { point: 0 }));
    }

    #[test]
    fn zero_clusters() {
        let err = Dataset::<f64>::from_reader("2 1 0 10 0 1.0 2.0".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::InvalidHeader { field: "K", .. }));
    }

    #[test]
    fn missing_file() {
        let err = Dataset::<f64>::from_path("/nonexistent/lloyd/dataset.txt").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
