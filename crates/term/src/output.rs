//! Rendering of filtered rows.

use std::io::{self, Write};

use quickbar_core::{Category, QuickBar};
use serde::Serialize;

/// One printed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
	pub rank: usize,
	pub score: i32,
	pub primary: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary: Option<&'a str>,
	pub category: Category,
}

/// The first `limit` visible rows of `bar`.
pub fn rows(bar: &QuickBar, limit: usize) -> Vec<Row<'_>> {
	bar.scored_items()
		.into_iter()
		.take(limit)
		.enumerate()
		.map(|(i, scored)| Row {
			rank: i + 1,
			score: scored.score,
			primary: scored.item.primary_text(),
			secondary: scored.item.secondary_text(),
			category: scored.item.category(),
		})
		.collect()
}

pub fn write_table(mut out: impl Write, rows: &[Row<'_>]) -> io::Result<()> {
	let width = rows.iter().map(|row| row.primary.chars().count()).max().unwrap_or(0);
	for row in rows {
		match row.secondary {
			Some(secondary) => writeln!(out, "{:>3}  {:>4}  {:<width$}  {}", row.rank, row.score, row.primary, secondary)?,
			None => writeln!(out, "{:>3}  {:>4}  {}", row.rank, row.score, row.primary)?,
		}
	}
	Ok(())
}

pub fn write_json(mut out: impl Write, rows: &[Row<'_>]) -> io::Result<()> {
	serde_json::to_writer_pretty(&mut out, rows)?;
	writeln!(out)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn sample() -> Vec<Row<'static>> {
		vec![
			Row {
				rank: 1,
				score: 27,
				primary: "Kitchen Light",
				secondary: Some("light.kitchen"),
				category: Category::Entity,
			},
			Row {
				rank: 2,
				score: 4,
				primary: "Fan",
				secondary: Some("fan.attic"),
				category: Category::Entity,
			},
			Row {
				rank: 3,
				score: -3,
				primary: "Reload Scripts",
				secondary: None,
				category: Category::Reload,
			},
		]
	}

	#[test]
	fn table_aligns_columns() {
		let mut out = Vec::new();
		write_table(&mut out, &sample()).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert_eq!(
			text,
			"  1    27  Kitchen Light   light.kitchen\n  2     4  Fan             fan.attic\n  3    -3  Reload Scripts\n"
		);
	}

	#[test]
	fn json_omits_missing_secondary() {
		let mut out = Vec::new();
		write_json(&mut out, &sample()[2..]).unwrap();
		let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(
			value,
			serde_json::json!([{"rank": 3, "score": -3, "primary": "Reload Scripts", "category": "reload"}])
		);
	}

	#[test]
	fn empty_table_prints_nothing() {
		let mut out = Vec::new();
		write_table(&mut out, &[]).unwrap();
		assert!(out.is_empty());
	}
}
