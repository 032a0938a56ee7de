use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::{
    BoostError,
    Result,
};
use super::feature::Feature;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV/ARFF format file to [`Sample`].
/// The format is chosen by the file extension.
///
/// # Example
/// ```no_run
/// use weakboost::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    target: Option<String>,
    class_names: Option<Vec<String>>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
            class_names: None,
        }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the CSV file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for class labels.
    /// By default, the last column is the class.
    /// This option requires a header row.
    pub fn target_feature<S: ToString>(mut self, column: S) -> Self {
        self.target = Some(column.to_string());
        self
    }


    /// Fix the mapping from class names to labels.
    /// Label `c` is `names[c]`.
    /// Use this to read a test file with the classes of a training file.
    pub fn class_names<S: ToString>(mut self, names: &[S]) -> Self {
        let names = names.iter()
            .map(|name| name.to_string())
            .collect();
        self.class_names = Some(names);
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.as_ref()
            .ok_or_else(|| BoostError::invalid("file", "not set"))?;
        let file = file.as_ref();

        match file.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => self.read_csv(file),
            Some("arff") => self.read_arff(file),
            _ => Err(BoostError::UnsupportedFormat(file.to_path_buf())),
        }
    }


    fn read_csv(&self, file: &Path) -> Result<Sample> {
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let mut names: Option<Vec<String>> = None;
        if self.has_header {
            if let Some((_, line)) = lines.next() {
                let header = line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
                names = Some(header);
            }
        }

        let target_pos = match (&self.target, &names) {
            (Some(target), Some(names)) => {
                let pos = names.iter()
                    .position(|name| name == target)
                    .ok_or_else(|| BoostError::invalid(
                        "target_feature",
                        format!("column `{target}` does not exist"),
                    ))?;
                Some(pos)
            },
            (Some(_), None) => {
                return Err(BoostError::invalid(
                    "target_feature",
                    "a named target requires a header row",
                ));
            },
            (None, _) => None,
        };

        let mut columns: Vec<Vec<f64>> = Vec::new();
        let mut labels: Vec<String> = Vec::new();
        let mut n_column = names.as_ref().map(|names| names.len());

        for (lineno, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            let n = *n_column.get_or_insert(cells.len());
            if cells.len() != n {
                return Err(BoostError::parse(
                    lineno,
                    format!("expected {n} columns, got {}", cells.len()),
                ));
            }
            if n < 2 {
                return Err(BoostError::parse(
                    lineno,
                    "a row needs at least one attribute and the class",
                ));
            }
            if columns.is_empty() {
                columns = vec![Vec::new(); n - 1];
            }

            let target_pos = target_pos.unwrap_or(n - 1);
            let mut values = columns.iter_mut();
            for (j, cell) in cells.into_iter().enumerate() {
                if j == target_pos {
                    labels.push(cell.to_string());
                    continue;
                }
                let x = cell.parse::<f64>()
                    .map_err(|e| BoostError::parse(
                        lineno, format!("`{cell}`: {e}")
                    ))?;
                // `values` yields exactly one column per non-target cell.
                if let Some(column) = values.next() {
                    column.push(x);
                }
            }
        }

        let n_column = n_column.unwrap_or(0);
        let target_pos = target_pos.unwrap_or(n_column.saturating_sub(1));
        let feature_names = match names {
            Some(mut names) => {
                if target_pos < names.len() { names.remove(target_pos); }
                names
            },
            None => {
                (1..n_column).map(|i| format!("Feat. [{i}]"))
                    .collect()
            },
        };

        let features = feature_names.into_iter()
            .zip(columns)
            .map(|(name, vals)| Feature::from_vals(name, vals))
            .collect::<Vec<_>>();

        let class_names = match &self.class_names {
            Some(names) => names.clone(),
            None => sorted_class_names(&labels),
        };
        let target = labels_to_indices(&labels, &class_names)?;

        Sample::from_parts(features, target, class_names)
    }


    fn read_arff(&self, file: &Path) -> Result<Sample> {
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut features: Vec<Feature> = Vec::new();
        let mut nominal: Option<Vec<String>> = None;
        let mut labels: Vec<String> = Vec::new();
        let mut in_data = false;

        for (i, line) in lines.enumerate() {
            let lineno = i + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('%') { continue; }

            if !in_data {
                let lower = line.to_ascii_lowercase();
                if lower.starts_with("@relation") {
                    continue;
                } else if lower.starts_with("@data") {
                    if nominal.is_none() {
                        return Err(BoostError::parse(
                            lineno,
                            "the last attribute must be a nominal class",
                        ));
                    }
                    in_data = true;
                } else if lower.starts_with("@attribute") {
                    if nominal.is_some() {
                        return Err(BoostError::parse(
                            lineno,
                            "the nominal class must be the last attribute",
                        ));
                    }
                    let (name, kind) = parse_attribute(&line[10..])
                        .ok_or_else(|| BoostError::parse(
                            lineno, "malformed @attribute line"
                        ))?;
                    if let Some(values) = parse_nominal(kind) {
                        nominal = Some(values);
                    } else {
                        match kind.to_ascii_lowercase().as_str() {
                            "numeric" | "real" | "integer" => {
                                features.push(Feature::new(name));
                            },
                            other => {
                                return Err(BoostError::parse(
                                    lineno,
                                    format!("unsupported attribute type `{other}`"),
                                ));
                            },
                        }
                    }
                } else {
                    return Err(BoostError::parse(
                        lineno, format!("unexpected line `{line}`")
                    ));
                }
                continue;
            }

            let cells = line.split(',')
                .map(|cell| cell.trim().trim_matches('\''))
                .collect::<Vec<_>>();
            if cells.len() != features.len() + 1 {
                return Err(BoostError::parse(
                    lineno,
                    format!(
                        "expected {} values, got {}",
                        features.len() + 1,
                        cells.len()
                    ),
                ));
            }

            for (feat, cell) in features.iter_mut().zip(&cells) {
                let x = cell.parse::<f64>()
                    .map_err(|e| BoostError::parse(
                        lineno, format!("`{cell}`: {e}")
                    ))?;
                feat.append(x);
            }
            labels.push(cells[features.len()].to_string());
        }

        let class_names = match (&self.class_names, nominal) {
            (Some(names), _) => names.clone(),
            (None, Some(names)) => names,
            (None, None) => {
                return Err(BoostError::parse(0, "no @data section"));
            },
        };
        let target = labels_to_indices(&labels, &class_names)?;

        Sample::from_parts(features, target, class_names)
    }
}


/// Splits `<name> <type>` of an `@attribute` line.
/// The name may be quoted.
fn parse_attribute(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim();
    let (name, kind) = if let Some(quoted) = rest.strip_prefix('\'') {
        let end = quoted.find('\'')?;
        (&quoted[..end], &quoted[end + 1..])
    } else {
        let end = rest.find(char::is_whitespace)?;
        (&rest[..end], &rest[end..])
    };
    let kind = kind.trim();
    if name.is_empty() || kind.is_empty() { None } else { Some((name, kind)) }
}


/// Parses `{a, b, c}` into `["a", "b", "c"]`.
fn parse_nominal(kind: &str) -> Option<Vec<String>> {
    let inner = kind.strip_prefix('{')?.strip_suffix('}')?;
    let values = inner.split(',')
        .map(|v| v.trim().trim_matches('\'').to_string())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>();
    Some(values)
}


/// Returns the distinct class names.
/// The order is numeric if every name is an integer,
/// lexicographic otherwise.
pub(super) fn sorted_class_names(labels: &[String]) -> Vec<String> {
    let mut names = labels.to_vec();
    names.sort_unstable();
    names.dedup();

    let numeric = names.iter()
        .map(|name| name.parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>();
    if let Ok(keys) = numeric {
        let mut keyed = keys.into_iter()
            .zip(names)
            .collect::<Vec<_>>();
        keyed.sort_by_key(|(key, _)| *key);
        names = keyed.into_iter().map(|(_, name)| name).collect();
    }
    names
}


fn labels_to_indices(labels: &[String], class_names: &[String])
    -> Result<Vec<usize>>
{
    labels.iter()
        .enumerate()
        .map(|(row, label)| {
            class_names.iter()
                .position(|name| name == label)
                .ok_or_else(|| BoostError::parse(
                    row + 1,
                    format!("unknown class `{label}`"),
                ))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_class_names() {
        let labels = ["10", "2", "1", "2"].map(String::from);
        assert_eq!(sorted_class_names(&labels), vec!["1", "2", "10"]);
    }

    #[test]
    fn textual_class_names() {
        let labels = ["b", "a", "c", "a"].map(String::from);
        assert_eq!(sorted_class_names(&labels), vec!["a", "b", "c"]);
    }

    #[test]
    fn nominal_declaration() {
        let values = parse_nominal("{Iris-setosa, Iris-versicolor}").unwrap();
        assert_eq!(values, vec!["Iris-setosa", "Iris-versicolor"]);
        assert!(parse_nominal("numeric").is_none());
    }

    #[test]
    fn attribute_line() {
        assert_eq!(parse_attribute(" sepallength REAL"), Some(("sepallength", "REAL")));
        assert_eq!(parse_attribute(" 'petal width' numeric"), Some(("petal width", "numeric")));
        assert_eq!(parse_attribute(" class"), None);
    }
}
