// src/records.rs
//! Row types of the two CSV tables.
//!
//! Column names are fixed by the file contract, so every field is renamed
//! explicitly. Readers are lenient about how booleans and integer ratings are
//! spelled (`True`/`true`, `3`/`3.0`) so that tables written by other tools
//! load as well; writers always produce the canonical spelling.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const RAW_HEADERS: [&str; 4] = ["Title", "Price_Raw", "Rating_Text", "Availability"];

pub const CLEAN_HEADERS: [&str; 6] =
    ["Title", "Price", "Rating", "Availability", "Price_Z_Score", "Is_Outlier"];

/// One listing entry exactly as scraped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price_Raw")]
    pub price_raw: String,
    #[serde(rename = "Rating_Text")]
    pub rating_text: String,
    #[serde(rename = "Availability")]
    pub availability: String,
}

/// One retained row after normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Rating", deserialize_with = "de_rating")]
    pub rating: u8,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Price_Z_Score")]
    pub price_z_score: f64,
    #[serde(rename = "Is_Outlier", serialize_with = "ser_flag", deserialize_with = "de_flag")]
    pub is_outlier: bool,
}

fn ser_flag<S: Serializer>(v: &bool, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(if *v { "True" } else { "False" })
}

fn de_flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    let s = String::deserialize(de)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!("not a boolean: {other:?}"))),
    }
}

fn de_rating<'de, D: Deserializer<'de>>(de: D) -> Result<u8, D::Error> {
    let s = String::deserialize(de)?;
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("not a rating: {s:?}")))?;
    if v.fract() != 0.0 || !(1.0..=5.0).contains(&v) {
        return Err(serde::de::Error::custom(format!("rating out of range: {s:?}")));
    }
    Ok(v as u8)
}
