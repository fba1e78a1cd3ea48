// Built-in sample of traditional North American full moon names.
// Limited coverage: real deployments should load a complete table.
use lazy_static::lazy_static;

use crate::moon::MoonTable;

const BUILTIN_FULL_MOONS: &[(&str, &str)] = &[
    ("1990-01-11", "Wolf Moon"), ("1990-02-09", "Snow Moon"), ("1990-03-11", "Worm Moon"),
    ("1990-04-10", "Pink Moon"), ("1990-05-09", "Flower Moon"), ("1990-06-08", "Strawberry Moon"),
    ("1990-07-08", "Buck Moon"), ("1990-08-06", "Sturgeon Moon"), ("1990-09-05", "Corn Moon"),
    ("1990-10-04", "Hunter's Moon"), ("1990-11-03", "Beaver Moon"), ("1990-12-02", "Cold Moon"),
    ("2023-01-06", "Wolf Moon"), ("2023-02-05", "Snow Moon"), ("2023-03-07", "Worm Moon"),
    ("2023-04-06", "Pink Moon"), ("2023-05-05", "Flower Moon"), ("2023-06-03", "Strawberry Moon"),
    ("2023-07-03", "Buck Moon"), ("2023-08-01", "Sturgeon Moon"), ("2023-08-30", "Blue Moon"),
    ("2023-09-29", "Harvest Moon"), ("2023-10-28", "Hunter's Moon"), ("2023-11-27", "Beaver Moon"),
    ("2023-12-26", "Cold Moon"),
    ("2024-01-25", "Wolf Moon"), ("2024-02-24", "Snow Moon"), ("2024-03-25", "Worm Moon"),
    ("2024-04-23", "Pink Moon"), ("2024-05-23", "Flower Moon"), ("2024-06-21", "Strawberry Moon"),
    ("2024-07-21", "Buck Moon"), ("2024-08-19", "Sturgeon Moon"), ("2024-09-17", "Harvest Moon"),
    ("2024-10-17", "Hunter's Moon"), ("2024-11-15", "Beaver Moon"), ("2024-12-15", "Cold Moon"),
    ("2025-01-13", "Wolf Moon"), ("2025-02-12", "Snow Moon"), ("2025-03-14", "Worm Moon"),
    ("2025-04-12", "Pink Moon"), ("2025-05-12", "Flower Moon"), ("2025-06-10", "Strawberry Moon"),
    ("2025-07-09", "Buck Moon"), ("2025-08-08", "Sturgeon Moon"), ("2025-09-06", "Harvest Moon"),
    ("2025-10-06", "Hunter's Moon"), ("2025-11-04", "Beaver Moon"), ("2025-12-04", "Cold Moon"),
    ("2026-01-02", "Wolf Moon"), ("2026-02-01", "Snow Moon"), ("2026-03-03", "Worm Moon"),
    ("2035-01-19", "Wolf Moon"), ("2035-02-18", "Snow Moon"),
];

lazy_static! {
    pub static ref BUILTIN_TABLE: MoonTable = MoonTable::from_pairs(BUILTIN_FULL_MOONS);
}
