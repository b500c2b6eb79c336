//! Word sources: the embedded country dataset and plain word-list files.
//!
//! The dataset follows the mledoze/countries shape (`name.common`,
//! `region`, `subregion`) and is used under the Open Database License,
//! <https://mledoze.github.io/countries/>.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::DataError;

pub const EMBEDDED_COUNTRIES: &str = include_str!("resources/countries.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

pub fn load_embedded_countries() -> Result<Vec<Country>, DataError> {
    Ok(serde_json::from_str(EMBEDDED_COUNTRIES)?)
}

/// A category of country names to play.
///
/// `Region(String::new())` covers countries with no region in the dataset,
/// shown to the player as "Other".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    World,
    Region(String),
    Subregion(String),
}

impl Selection {
    /// Builds a selection from the `--region` / `--subregion` flags.
    pub fn from_flags(region: &str, subregion: Option<&str>) -> Self {
        match subregion {
            Some(sub) if !sub.eq_ignore_ascii_case("all") => {
                Selection::Subregion(sub.to_string())
            }
            _ if region.eq_ignore_ascii_case("world") => Selection::World,
            _ if region.eq_ignore_ascii_case("other") => Selection::Region(String::new()),
            _ => Selection::Region(region.to_string()),
        }
    }
}

/// The words for a category, or an error if the category matches nothing.
pub fn words_for(countries: &[Country], selection: &Selection) -> Result<Vec<String>, DataError> {
    let words: Vec<String> = countries
        .iter()
        .filter(|c| match selection {
            Selection::World => true,
            Selection::Region(region) => c.region == *region,
            Selection::Subregion(subregion) => c.subregion == *subregion,
        })
        .map(|c| c.name.common.clone())
        .collect();
    if words.is_empty() {
        return Err(DataError::EmptySelection);
    }
    Ok(words)
}

/// Per-region and per-subregion country counts, for the picker menus.
#[derive(Debug, Default)]
pub struct RegionIndex {
    pub total: usize,
    pub regions: BTreeMap<String, RegionEntry>,
}

#[derive(Debug, Default)]
pub struct RegionEntry {
    pub count: usize,
    pub subregions: BTreeMap<String, usize>,
}

impl RegionIndex {
    pub fn build(countries: &[Country]) -> Self {
        let mut index = Self::default();
        for country in countries {
            index.total += 1;
            let entry = index.regions.entry(country.region.clone()).or_default();
            entry.count += 1;
            *entry.subregions.entry(country.subregion.clone()).or_default() += 1;
        }
        index
    }
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_string();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}
