// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal plans served by the nutrition service.
//!
//! Field names follow the backend's JSON exactly (including the odd
//! `total*Contains` macro names), with serde renames mapping them onto
//! something usable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meal plan assigned to one client for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Account ID of the client the plan belongs to
    pub client_id: u64,
    /// First day of the plan (ISO 8601 date)
    pub start_date: String,
    /// Last day of the plan, inclusive (ISO 8601 date)
    pub end_date: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl MealPlan {
    /// Total calories across every meal in the plan.
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.total_calories).sum()
    }

    /// Number of days the plan covers, inclusive of both endpoints.
    ///
    /// `None` when either date fails to parse; the dashboard shows the
    /// raw strings in that case.
    pub fn duration_days(&self) -> Option<i64> {
        let start = parse_plan_date(&self.start_date)?;
        let end = parse_plan_date(&self.end_date)?;
        Some((end - start).num_days() + 1)
    }
}

/// One meal slot within a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: u64,
    /// Meal slot label (breakfast, lunch, dinner, snack)
    pub time: String,
    #[serde(default)]
    pub total_calories: u32,
    /// Protein in grams
    #[serde(default, rename = "totalProteinsContains")]
    pub total_proteins: f64,
    /// Carbohydrates in grams
    #[serde(default, rename = "totalCarbsContains")]
    pub total_carbs: f64,
    /// Fat in grams
    #[serde(default, rename = "totalFatContains")]
    pub total_fat: f64,
    #[serde(default)]
    pub food_items: Vec<FoodItem>,
}

/// A single food entry inside a meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub quantity: f64,
    /// Serving unit (g, ml, piece)
    pub unit: Option<String>,
    /// Protein in grams
    #[serde(default)]
    pub proteins: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default)]
    pub fats: f64,
}

/// Parse a plan date as emitted by the backend.
///
/// Accepts a bare date, an RFC 3339 timestamp, or a naive timestamp.
fn parse_plan_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
