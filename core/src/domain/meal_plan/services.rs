use chrono::NaiveDate;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::domain::meal_plan::{entities::MealType, value_objects::GeneratedSlot};

/// Meal types filled per day when auto-generating a plan. Snacks stay manual.
const GENERATED_MEAL_TYPES: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

/// Fills every day in `start..=end` with one random recipe per meal type.
/// Returns no slots when the candidate pool is empty or the range is inverted.
pub fn spread_random_recipes(
    recipe_ids: &[Uuid],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<GeneratedSlot> {
    if recipe_ids.is_empty() || start > end {
        return Vec::new();
    }

    let mut rng = rand::thread_rng();
    let mut slots = Vec::new();
    let mut date = start;

    while date <= end {
        for meal_type in GENERATED_MEAL_TYPES {
            let recipe_id = recipe_ids
                .choose(&mut rng)
                .copied()
                .unwrap_or(recipe_ids[0]);
            slots.push(GeneratedSlot {
                recipe_id,
                planned_date: date,
                meal_type,
            });
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn fills_three_meals_per_day() {
        let pool = vec![Uuid::new_v4(), Uuid::new_v4()];
        let slots = spread_random_recipes(&pool, date("2025-03-03"), date("2025-03-05"));

        assert_eq!(slots.len(), 9);
        for day in ["2025-03-03", "2025-03-04", "2025-03-05"] {
            let meals: Vec<MealType> = slots
                .iter()
                .filter(|s| s.planned_date == date(day))
                .map(|s| s.meal_type)
                .collect();
            assert_eq!(
                meals,
                vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
            );
        }
        assert!(slots.iter().all(|s| pool.contains(&s.recipe_id)));
    }

    #[test]
    fn single_day_range() {
        let pool = vec![Uuid::new_v4()];
        let slots = spread_random_recipes(&pool, date("2025-03-03"), date("2025-03-03"));
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.recipe_id == pool[0]));
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let slots = spread_random_recipes(&[], date("2025-03-03"), date("2025-03-05"));
        assert!(slots.is_empty());
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let pool = vec![Uuid::new_v4()];
        let slots = spread_random_recipes(&pool, date("2025-03-05"), date("2025-03-03"));
        assert!(slots.is_empty());
    }
}
