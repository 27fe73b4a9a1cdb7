//! Data model for Cobertura XML coverage reports.
//!
//! Each struct maps one XML element attribute-by-attribute. Every attribute
//! and every wrapper element is optional: anything missing deserializes to
//! the zero value of its type, so a sparse report still parses.
//!
//! # Types
//!
//! - [`CoverageReport`] - the `<coverage>` root
//! - [`Package`] - a `<package>` inside `<packages>`
//! - [`Class`] - a `<class>` inside `<classes>`
//! - [`Method`] - a `<method>` inside `<methods>`
//! - [`Line`] - a `<line>` inside `<lines>`

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Root `<coverage>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CoverageReport {
    #[serde(rename = "@line-rate", deserialize_with = "lenient_number")]
    pub line_rate: f32,

    #[serde(rename = "@branch-rate", deserialize_with = "lenient_number")]
    pub branch_rate: f32,

    #[serde(rename = "@version")]
    pub version: String,

    #[serde(rename = "@timestamp", deserialize_with = "lenient_number")]
    pub timestamp: i64,

    #[serde(rename = "packages", deserialize_with = "merge_packages")]
    packages: Vec<Package>,
}

impl CoverageReport {
    /// Packages in document order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Number of class-level `<line>` entries across the whole report.
    ///
    /// Method-level lines are not counted; this matches the number of
    /// profile lines the report flattens into.
    pub fn class_line_count(&self) -> usize {
        self.packages()
            .iter()
            .flat_map(Package::classes)
            .map(|class| class.lines().len())
            .sum()
    }
}

/// A `<package>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Package {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@line-rate", deserialize_with = "lenient_number")]
    pub line_rate: f32,

    #[serde(rename = "@branch-rate", deserialize_with = "lenient_number")]
    pub branch_rate: f32,

    #[serde(rename = "@complexity", deserialize_with = "lenient_number")]
    pub complexity: f32,

    #[serde(rename = "classes", deserialize_with = "merge_classes")]
    classes: Vec<Class>,
}

impl Package {
    /// Classes in document order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }
}

/// A `<class>` element. `filename` names the source file its lines belong to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Class {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@filename")]
    pub filename: String,

    #[serde(rename = "@line-rate", deserialize_with = "lenient_number")]
    pub line_rate: f32,

    #[serde(rename = "@branch-rate", deserialize_with = "lenient_number")]
    pub branch_rate: f32,

    #[serde(rename = "@complexity", deserialize_with = "lenient_number")]
    pub complexity: f32,

    #[serde(rename = "methods", deserialize_with = "merge_methods")]
    methods: Vec<Method>,

    #[serde(rename = "lines", deserialize_with = "merge_lines")]
    lines: Vec<Line>,
}

impl Class {
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Class-level lines only. Lines declared under `<methods>` live on
    /// each [`Method`].
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// A `<method>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Method {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@signature")]
    pub signature: String,

    #[serde(rename = "@line-rate", deserialize_with = "lenient_number")]
    pub line_rate: f32,

    #[serde(rename = "@branch-rate", deserialize_with = "lenient_number")]
    pub branch_rate: f32,

    #[serde(rename = "lines", deserialize_with = "merge_lines")]
    lines: Vec<Line>,
}

impl Method {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// A `<line>` element: a source line number and how often it ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Line {
    #[serde(rename = "@number", deserialize_with = "lenient_number")]
    pub number: i64,

    #[serde(rename = "@hits", deserialize_with = "lenient_number")]
    pub hits: i64,
}

impl Line {
    pub fn new(number: i64, hits: i64) -> Self {
        Self { number, hits }
    }
}

/// Decode a numeric attribute the way tolerant Cobertura producers expect:
/// surrounding whitespace is ignored and an empty value reads as zero.
/// Anything else must parse as `T`.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let value = raw.trim();
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse()
        .map_err(|e| de::Error::custom(format!("invalid number {:?}: {}", raw, e)))
}

// Wrapper elements (`<packages>`, `<classes>`, ...) hold nothing but a
// repeated child. A wrapper may appear more than once; the children of
// every occurrence are concatenated in document order.

trait Wrapper {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

fn merge_wrappers<'de, D, W>(deserializer: D) -> Result<Vec<W::Item>, D::Error>
where
    D: Deserializer<'de>,
    W: Wrapper + Deserialize<'de>,
{
    let wrappers = Vec::<W>::deserialize(deserializer)?;
    Ok(wrappers.into_iter().flat_map(W::into_items).collect())
}

fn merge_packages<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Package>, D::Error> {
    merge_wrappers::<D, Packages>(deserializer)
}

fn merge_classes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Class>, D::Error> {
    merge_wrappers::<D, Classes>(deserializer)
}

fn merge_methods<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Method>, D::Error> {
    merge_wrappers::<D, Methods>(deserializer)
}

fn merge_lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Line>, D::Error> {
    merge_wrappers::<D, Lines>(deserializer)
}

macro_rules! wrapper {
    ($name:ident, $child:literal, $item:ty) => {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct $name {
            #[serde(rename = $child)]
            items: Vec<$item>,
        }

        impl Wrapper for $name {
            type Item = $item;

            fn into_items(self) -> Vec<$item> {
                self.items
            }
        }
    };
}

wrapper!(Packages, "package", Package);
wrapper!(Classes, "class", Class);
wrapper!(Methods, "method", Method);
wrapper!(Lines, "line", Line);
