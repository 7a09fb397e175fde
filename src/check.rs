use std::{collections::BTreeSet, fmt};

use _model::{is_normalized, looks_japanese, Record};
use itertools::Itertools;

use crate::Dataset;

/// A data-quality defect found in one of the shipped lists. Checking never
/// touches the records themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    EmptyField { row: usize },
    NotNormalized { row: usize, value: String },
    Duplicate { rows: Vec<usize>, name: String },
    OverCapacity { len: usize, capacity: usize },
    WrongSuffix { row: usize, query: String },
    LooksJapanese { row: usize, name: String },
    AlsoIn { row: usize, name: String, other: Dataset },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rows are 1-based and skip the header, matching a spreadsheet view
        match self {
            Self::EmptyField { row } => write!(f, "row {}: empty field", row + 1),
            Self::NotNormalized { row, value } => {
                write!(f, "row {}: stray whitespace in {value:?}", row + 1)
            }
            Self::Duplicate { rows, name } => write!(
                f,
                "rows {}: duplicate company {name:?}",
                rows.iter().map(|x| x + 1).join(", ")
            ),
            Self::OverCapacity { len, capacity } => {
                write!(f, "{len} rows, expected at most {capacity}")
            }
            Self::WrongSuffix { row, query } => {
                write!(f, "row {}: unexpected address query {query:?}", row + 1)
            }
            Self::LooksJapanese { row, name } => {
                write!(f, "row {}: {name:?} looks like a Japanese company", row + 1)
            }
            Self::AlsoIn { row, name, other } => {
                write!(f, "row {}: {name:?} is also listed in {other}", row + 1)
            }
        }
    }
}

pub fn check(dataset: Dataset) -> Vec<Problem> {
    let records = dataset.records();
    let mut problems = check_records(records, dataset.capacity(), dataset.query_suffix());

    if dataset == Dataset::ForeignTokyo50 {
        let japanese: BTreeSet<_> = Dataset::JapanTop200
            .records()
            .iter()
            .map(Record::key)
            .collect();
        problems.extend(check_foreign(records, &japanese, Dataset::JapanTop200));
    }

    problems
}

fn check_records(records: &[Record], capacity: usize, suffix: &str) -> Vec<Problem> {
    let mut problems = Vec::new();

    if records.len() > capacity {
        problems.push(Problem::OverCapacity {
            len: records.len(),
            capacity,
        });
    }

    for (row, record) in records.iter().enumerate() {
        if record.name.is_empty() || record.address_query.is_empty() {
            problems.push(Problem::EmptyField { row });
            continue;
        }
        for value in [record.name, record.address_query] {
            if !is_normalized(value) {
                problems.push(Problem::NotNormalized {
                    row,
                    value: value.to_string(),
                });
            }
        }
        if !record.address_query.ends_with(&format!(" {suffix}")) {
            problems.push(Problem::WrongSuffix {
                row,
                query: record.address_query.to_string(),
            });
        }
    }

    let groups = records.iter().enumerate().into_group_map_by(|(_, x)| x.key());
    for (_, group) in groups.into_iter().sorted_by_key(|(_, x)| x[0].0) {
        if group.len() > 1 {
            problems.push(Problem::Duplicate {
                rows: group.iter().map(|(row, _)| *row).collect(),
                name: group[0].1.name.to_string(),
            });
        }
    }

    problems
}

fn check_foreign(records: &[Record], exclude: &BTreeSet<String>, other: Dataset) -> Vec<Problem> {
    let mut problems = Vec::new();
    for (row, record) in records.iter().enumerate() {
        let name = record.name.to_string();
        if exclude.contains(&record.key()) {
            problems.push(Problem::AlsoIn { row, name, other });
        } else if looks_japanese(record.name) {
            problems.push(Problem::LooksJapanese { row, name });
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_datasets_are_clean() {
        for dataset in Dataset::all() {
            let problems = check(dataset);
            assert!(problems.is_empty(), "{dataset}: {problems:?}");
        }
    }

    #[test]
    fn flags_row_level_problems() {
        let records = [
            Record::new("Apple", "Apple 東京オフィス"),
            Record::new("", "Nowhere 東京オフィス"),
            Record::new("Adobe\u{a0}Inc", "Adobe  東京オフィス"),
            Record::new("Intel", "Intel Japan"),
        ];
        assert_eq!(
            check_records(&records, 50, "東京オフィス"),
            vec![
                Problem::EmptyField { row: 1 },
                Problem::NotNormalized {
                    row: 2,
                    value: "Adobe\u{a0}Inc".to_string()
                },
                Problem::NotNormalized {
                    row: 2,
                    value: "Adobe  東京オフィス".to_string()
                },
                Problem::WrongSuffix {
                    row: 3,
                    query: "Intel Japan".to_string()
                },
            ]
        );
    }

    #[test]
    fn flags_duplicates_and_capacity() {
        let records = [
            Record::new("Apple Inc.", "Apple 東京オフィス"),
            Record::new("Oracle", "Oracle 東京オフィス"),
            Record::new("apple", "Apple Japan 東京オフィス"),
        ];
        let problems = check_records(&records, 2, "東京オフィス");
        assert_eq!(
            problems,
            vec![
                Problem::OverCapacity {
                    len: 3,
                    capacity: 2
                },
                Problem::Duplicate {
                    rows: vec![0, 2],
                    name: "Apple Inc.".to_string()
                },
            ]
        );
        assert_eq!(
            problems[1].to_string(),
            "rows 1, 3: duplicate company \"Apple Inc.\""
        );
    }

    #[test]
    fn flags_japanese_companies_in_foreign_list() {
        let records = [
            Record::new("Apple", "Apple 東京オフィス"),
            Record::new("Rakuten", "楽天 東京オフィス"),
            Record::new("Toyota Motor Corporation", "トヨタ 東京オフィス"),
        ];
        let exclude = BTreeSet::from(["toyota motor".to_string()]);
        assert_eq!(
            check_foreign(&records, &exclude, Dataset::JapanTop200),
            vec![
                Problem::LooksJapanese {
                    row: 1,
                    name: "Rakuten".to_string()
                },
                Problem::AlsoIn {
                    row: 2,
                    name: "Toyota Motor Corporation".to_string(),
                    other: Dataset::JapanTop200
                },
            ]
        );
    }
}
