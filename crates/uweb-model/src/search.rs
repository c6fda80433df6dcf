//! Free-text search over a model's searchable columns

use crate::error::{ModelError, Result};
use crate::model::Model;
use crate::query::{ColumnRef, Condition};

/// Tables and conditions needed to search a model
#[derive(Debug, Clone, PartialEq)]
pub struct SearchClause {
	/// Tables to select from, base table first
	pub tables: Vec<String>,
	/// Join conditions followed by the OR'ed `LIKE` condition
	pub conditions: Vec<Condition>,
}

/// Builds the search clause of `M` for `term`
///
/// A plain column `col` is matched as `base.col`. A column `rel.col` looks
/// `rel` up in [`Model::RELATIONS`]; the foreign table is joined with
/// `base.<foreign table> = foreign.<join key>` and added to `tables`, once
/// per relation. All `LIKE`s end up in a single parenthesized OR.
pub fn search_clause<M: Model>(mut tables: Vec<String>, term: &str) -> Result<SearchClause> {
	let base = M::META.table_name;
	if tables.is_empty() {
		tables.push(base.to_string());
	}

	let mut conditions = Vec::new();
	let mut matches = Vec::with_capacity(M::SEARCHABLE_COLUMNS.len());
	let mut joined: Vec<&str> = Vec::new();

	for &column in M::SEARCHABLE_COLUMNS {
		let Some((name, foreign_column)) = column.split_once('.') else {
			check_name(column, column)?;
			matches.push(Condition::contains(ColumnRef::qualified(base, column), term));
			continue;
		};
		check_name(column, name)?;
		check_name(column, foreign_column)?;

		let relation = M::relation(name).ok_or_else(|| ModelError::UnknownRelation {
			relation: name.to_string(),
			model: base.to_string(),
		})?;
		let foreign = relation.table.table_name;

		if !joined.contains(&relation.name) {
			joined.push(relation.name);
			conditions.push(Condition::column_eq(
				ColumnRef::qualified(base, foreign),
				ColumnRef::qualified(foreign, relation.join_key()),
			));
			if foreign != base && !tables.iter().any(|table| table == foreign) {
				tables.push(foreign.to_string());
			}
		}
		matches.push(Condition::contains(
			ColumnRef::qualified(foreign, foreign_column),
			term,
		));
	}

	if !matches.is_empty() {
		conditions.push(Condition::Any(matches));
	}
	Ok(SearchClause { tables, conditions })
}

fn check_name(column: &str, part: &str) -> Result<()> {
	if part.is_empty() || part.contains('.') {
		return Err(ModelError::InvalidSearchColumn(column.to_string()));
	}
	Ok(())
}
