//! Static board categorization tables.
//
// Manually scraped from the site front page. Ideally this information would
// be available from the API itself.

use crate::payloads::{Board, BoardName, Boards};
use lazy_static::lazy_static;
use std::collections::HashMap;

const CATEGORY_TABLE: [(&str, &[&str]); 7] = [
	(
		"Japanese Culture",
		&["a", "c", "w", "m", "cgl", "cm", "f", "n", "jp", "vt"],
	),
	(
		"Video Games",
		&["v", "vg", "vm", "vmg", "vp", "vr", "vrpg", "vst"],
	),
	(
		"Interests",
		&[
			"co", "g", "tv", "k", "o", "an", "tg", "sp", "asp", "xs", "pw",
			"sci", "his", "int", "out", "toy",
		],
	),
	(
		"Creative",
		&[
			"i", "po", "p", "ck", "ic", "wg", "lit", "mu", "fa", "3", "gd",
			"diy", "wsg", "qst",
		],
	),
	(
		"Other",
		&[
			"biz", "trv", "fit", "x", "adv", "lgbt", "mlp", "news", "wsr",
			"vip",
		],
	),
	(
		"Adult",
		&[
			"s", "hc", "hm", "h", "e", "u", "d", "y", "t", "hr", "gif",
			"aco", "r",
		],
	),
	("Misc", &["b", "bant", "r9k", "pol", "soc", "s4s"]),
];

/// Fallback category for boards missing from the table
const UNCATEGORIZED: &str = "Uncategorized";

/// Display order of categories
const CATEGORY_ORDER: [&str; 8] = [
	"Japanese Culture",
	"Video Games",
	"Interests",
	"Creative",
	"Other",
	"Misc",
	"Adult",
	UNCATEGORIZED,
];

/// Boards excluded from categorization due to low image content
const LOW_IMAGE_BOARDS: [&str; 1] = ["f"];

fn is_nsfw(category: &str) -> bool {
	matches!(category, "Adult" | "Misc" | UNCATEGORIZED)
}

lazy_static! {
	static ref CATEGORY_BY_BOARD: HashMap<&'static str, &'static str> =
		CATEGORY_TABLE
			.iter()
			.flat_map(|(category, boards)| {
				boards.iter().map(move |b| (*b, *category))
			})
			.collect();
}

/// One display group of boards
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
	pub title: String,
	pub boards: Vec<Board>,

	/// True, if the boards in this category are Not Safe For Work
	pub nsfw: bool,
}

/// The full board list grouped into display categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categorized {
	/// Categories in display order. Empty categories are omitted.
	pub categories: Vec<Category>,

	/// Maps board name to its category title
	pub board_map: HashMap<BoardName, String>,
}

/// Group a fetched board list into display categories
pub fn categorize(boards: &Boards) -> Categorized {
	let mut by_category = HashMap::<&str, Vec<Board>>::new();
	for b in &boards.boards {
		if LOW_IMAGE_BOARDS.contains(&b.board.as_str()) {
			continue;
		}
		let category = CATEGORY_BY_BOARD
			.get(b.board.as_str())
			.copied()
			.unwrap_or(UNCATEGORIZED);
		by_category.entry(category).or_default().push(b.clone());
	}

	let mut res = Categorized::default();
	for category in &CATEGORY_ORDER {
		if let Some(boards) = by_category.remove(category) {
			for b in &boards {
				res.board_map
					.insert(b.board.clone(), (*category).to_owned());
			}
			res.categories.push(Category {
				title: (*category).to_owned(),
				boards,
				nsfw: is_nsfw(category),
			});
		}
	}
	res
}
