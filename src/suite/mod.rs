//! # Probe Suite
//!
//! The fixed list of cases run against the dish-search service, in the order
//! they are printed.

use crate::http::request::RequestInput;
use crate::testing::Assertion;

/// How a case prints the body of the response it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Pretty-print the whole JSON body.
    RawJson,
    /// List entries of the `restaurants` array, optionally only the first `limit`.
    Restaurants { limit: Option<usize>, layout: Layout },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Multi-line block per restaurant.
    Detailed,
    /// One line per restaurant.
    Compact,
}

#[derive(Debug, Clone)]
pub struct TestCase {
    pub label: String,
    pub request: RequestInput,
    pub summary: Summary,
    pub assertions: Vec<Assertion>,
    /// Blank lines printed after the case block.
    pub trailing_blank_lines: usize,
}

pub fn default_suite() -> Vec<TestCase> {
    vec![
        TestCase {
            label: "TEST 1: Health Check".into(),
            request: RequestInput::get("/health"),
            summary: Summary::RawJson,
            assertions: vec![Assertion::StatusEquals(200)],
            trailing_blank_lines: 2,
        },
        dish_search(
            "TEST 2: Search Biryani (Price: ₹150-₹300)",
            "biryani",
            (150.0, 300.0),
            Summary::Restaurants {
                limit: Some(5),
                layout: Layout::Detailed,
            },
            1,
        ),
        dish_search(
            "TEST 3: Search Chicken (Price: ₹190-₹250)",
            "chicken",
            (190.0, 250.0),
            Summary::Restaurants {
                limit: None,
                layout: Layout::Compact,
            },
            2,
        ),
        dish_search(
            "TEST 4: Search Vegetable (Price: ₹100-₹200)",
            "vegetable",
            (100.0, 200.0),
            Summary::Restaurants {
                limit: None,
                layout: Layout::Compact,
            },
            2,
        ),
        TestCase {
            label: "TEST 5: Error Case - Missing minPrice parameter".into(),
            request: RequestInput::get("/search/dishes")
                .param("name", "biryani")
                .param("maxPrice", 300.0),
            summary: Summary::RawJson,
            assertions: vec![Assertion::StatusNotSuccess],
            // The completion banner opens with its own blank line.
            trailing_blank_lines: 0,
        },
    ]
}

fn dish_search(
    label: &str,
    name: &str,
    (min, max): (f64, f64),
    summary: Summary,
    trailing_blank_lines: usize,
) -> TestCase {
    TestCase {
        label: label.into(),
        request: RequestInput::get("/search/dishes")
            .param("name", name)
            .param("minPrice", min)
            .param("maxPrice", max),
        summary,
        assertions: vec![
            Assertion::StatusEquals(200),
            Assertion::HasKey("restaurants".into()),
        ],
        trailing_blank_lines,
    }
}
